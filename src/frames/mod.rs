//! Frame allocation and hitbox binding.
//!
//! Sequence lines reserve frame ranges on the current sprite sheet through
//! the `FrameAllocator`. When a sequence names a hitbox atlas, the
//! `HitboxBinder` files the atlas boxes under composite frame ids
//! (`sheet * SHEET_SPACER + base + sprite`).

mod allocator;
mod atlas;
mod binder;

pub use allocator::FrameAllocator;
pub use atlas::{Atlas, AtlasBox, FrameGeometry};
pub use binder::{BindReport, HitboxBinder};
