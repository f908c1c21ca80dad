//! Parser for boss definition files.
//!
//! # File Structure
//!
//! ```text
//! # comments run to the end of the line
//! private MAX_HP 500          # integer constant (global state only)
//! define BOSS_FLAG_FLY 0x1    # preprocessor constant (global state only)
//!
//! >>>sheet 1                  # switch sprite sheet, rewinds the frame cursor
//!
//! [slug]                      # section header: starts a new boss
//! aims 1
//! speed 4 anime=2             # composite: speed, speed_anime
//! bullet algo=1 speed=2 9     # composite: bullet_algo, bullet_speed, bullet
//! flags BOSS_FLAG_FLY,0x2     # joined as `BOSS_FLAG_FLY | 0x2`
//! hitbox 0 0 32 32
//! moving 4 slug_walk.json     # allocate 4 * aims frames, bind atlas hitboxes
//! idle @moving                # alias: copy of `moving`
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use bossc::parser::{parse_definitions, FsAtlasSource, ParseOptions};
//!
//! let source = std::fs::read_to_string("bosses.ini")?;
//! let output = parse_definitions(&source, FsAtlasSource::new("."), ParseOptions::default())?;
//!
//! for record in &output.records {
//!     println!("Found: {}", record.name.value);
//! }
//! ```

mod accumulator;
pub mod attributes;
pub mod span;
pub mod tokenizer;

// Re-export main entry points
pub use accumulator::{
    parse_definitions, AtlasSource, FsAtlasSource, ParseOptions, ParseOutput, SectionAccumulator,
    SHEET_PRAGMA,
};
pub use span::{Location, Span, Spanned};
pub use tokenizer::{tokenize, TokenLine, TokenLines};
