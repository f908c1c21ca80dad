//! Core domain types for bossc.
//!
//! - `BossRecord` - one boss definition, keyed by the closed field schema
//! - `ConstantPool` - named integer constants in declaration order
//! - `FrameTable` - composite frame id to quantized hitboxes

mod constant;
mod frame;
mod record;

pub use constant::{clean_name, parse_int, AnimationSequence, Constant, ConstantPool, Define};
pub use frame::{
    Frame, FrameTable, HitKind, HitRect, HitboxLiteral, Placement, DEFAULT_MAX_HITBOXES,
};
pub use record::{is_composite, schema_fields, Attribute, BossRecord, Sequence, COMPOSITE_GROUPS};
