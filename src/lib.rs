//! bossc - Boss definition compiler
//!
//! Turns an INI-like boss definition file, plus optional hitbox atlases,
//! into a C++ declarations header and definitions source for the game
//! engine. Sequence frames are allocated on a per-sheet cursor, hitboxes
//! are quantized onto a grid and keyed by composite frame id, and every
//! record is validated against a closed field schema before anything is
//! written.

pub mod cli;
pub mod compile;
pub mod config;
pub mod emit;
pub mod error;
pub mod frames;
pub mod output;
pub mod parser;
pub mod publish;
pub mod types;
pub mod validation;

pub use compile::{compile_file, compile_source, Compilation, CompileOptions};
pub use config::{Config, CONFIG_FILENAME};
pub use emit::{emit, Artifact, Artifacts, EmitOptions};
pub use error::{BossError, Result};
pub use parser::{parse_definitions, AtlasSource, FsAtlasSource, ParseOptions, ParseOutput};
pub use publish::{plan, publish, Outcome, PublishReport};
pub use types::{
    AnimationSequence, Attribute, BossRecord, Constant, ConstantPool, Define, FrameTable, HitKind,
    HitRect, Sequence,
};
pub use validation::{validate_records, Diagnostic, Severity, ValidationResult};
