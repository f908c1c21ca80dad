//! Maps pixel-space atlas boxes into the global frame hitbox table.

use crate::types::{FrameTable, HitKind, HitRect, Placement};

use super::atlas::{Atlas, AtlasBox, FrameGeometry};

/// Counts of what happened to each atlas box during binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindReport {
    /// Boxes stored in the frame table.
    pub added: usize,
    /// Placeholder-category boxes, skipped.
    pub placeholders: usize,
    /// Boxes dropped because their frame was full.
    pub overflowed: usize,
    /// Boxes outside the sheet columns or with an unknown category.
    pub rejected: usize,
}

/// Quantizes atlas boxes to the grid and files them under composite frame ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitboxBinder {
    grid_unit: u32,
    sheet_spacer: u32,
}

impl HitboxBinder {
    pub fn new(grid_unit: u32, sheet_spacer: u32) -> Self {
        Self {
            grid_unit: grid_unit.max(1),
            sheet_spacer,
        }
    }

    /// Composite frame id of a sprite within a sequence on a sheet.
    pub fn frame_id(&self, sheet: u32, base: u32, sprite: u32) -> u32 {
        sheet
            .saturating_mul(self.sheet_spacer)
            .saturating_add(base)
            .saturating_add(sprite)
    }

    /// Locate the sprite owning a box and quantize the box relative to it.
    ///
    /// Returns `None` when the box starts beyond the last sheet column or its
    /// sprite index or grid size does not fit the generated integer types.
    pub fn map_box(&self, geometry: &FrameGeometry, b: &AtlasBox, kind: HitKind) -> Option<(u32, HitRect)> {
        let col = b.x.checked_div(geometry.width)?;
        let row = b.y.checked_div(geometry.height)?;
        if col >= geometry.cols {
            return None;
        }

        let sprite = row.checked_mul(geometry.cols)?.checked_add(col)?;
        let rel_x = b.x % geometry.width;
        let rel_y = b.y % geometry.height;

        let q = |v: u32| i32::try_from(v / self.grid_unit).ok();
        Some((sprite, HitRect::new(q(rel_x)?, q(rel_y)?, q(b.w)?, q(b.h)?, kind)))
    }

    /// Bind every box of an atlas to frames starting at `base` on `sheet`.
    pub fn bind(&self, atlas: &Atlas, sheet: u32, base: u32, table: &mut FrameTable) -> BindReport {
        let mut report = BindReport::default();

        for b in &atlas.hitboxes {
            let kind = match HitKind::from_code(b.kind) {
                Some(HitKind::None) => {
                    report.placeholders += 1;
                    continue;
                }
                Some(kind) => kind,
                None => {
                    report.rejected += 1;
                    continue;
                }
            };

            let Some((sprite, rect)) = self.map_box(&atlas.frame, b, kind) else {
                report.rejected += 1;
                continue;
            };

            match table.push(self.frame_id(sheet, base, sprite), rect) {
                Placement::Added => report.added += 1,
                Placement::Overflow => report.overflowed += 1,
            }
        }

        report
    }
}
