//! Frame range allocation for animation sequences.

use crate::types::{clean_name, AnimationSequence, Constant, ConstantPool, Sequence};

/// Assigns sheet-relative frame offsets to animation sequences.
///
/// The cursor only moves forward within a sheet and returns to 0 when a
/// new sheet is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameAllocator {
    cursor: u32,
    sheet: u32,
}

impl FrameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next free frame offset on the current sheet.
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn sheet(&self) -> u32 {
        self.sheet
    }

    /// Select a sheet and rewind the cursor.
    pub fn switch_sheet(&mut self, sheet: u32) {
        self.sheet = sheet;
        self.cursor = 0;
    }

    /// Allocate `frame_count * aims` frames for a sequence.
    ///
    /// Registers `<SECTION>_<SEQUENCE>_BASE` (the current cursor) and
    /// `<SECTION>_<SEQUENCE>_LEN` (the frame count) in the pool.
    pub fn allocate(
        &mut self,
        section: &str,
        sequence: Sequence,
        frame_count: u32,
        aims: u32,
        pool: &mut ConstantPool,
    ) -> AnimationSequence {
        let prefix = format!("{}_{}", clean_name(section), clean_name(sequence.name()));

        let base = Constant::new(format!("{prefix}_BASE"), i64::from(self.cursor));
        let length = Constant::new(format!("{prefix}_LEN"), i64::from(frame_count));
        pool.push(base.name.clone(), base.value);
        pool.push(length.name.clone(), length.value);

        self.cursor = self
            .cursor
            .saturating_add(frame_count.saturating_mul(aims));

        AnimationSequence::new(base, length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocations_are_contiguous() {
        let mut pool = ConstantPool::new();
        let mut frames = FrameAllocator::new();

        let moving = frames.allocate("slug", Sequence::Moving, 4, 1, &mut pool);
        let attack = frames.allocate("slug", Sequence::Attack, 2, 1, &mut pool);

        assert_eq!((moving.base.value, moving.length.value), (0, 4));
        assert_eq!((attack.base.value, attack.length.value), (4, 2));
        assert_eq!(frames.cursor(), 6);
        assert_eq!(pool.get("SLUG_MOVING_BASE"), Some(0));
        assert_eq!(pool.get("SLUG_ATTACK_LEN"), Some(2));
    }

    #[test]
    fn test_aims_multiply_the_range() {
        let mut pool = ConstantPool::new();
        let mut frames = FrameAllocator::new();

        let moving = frames.allocate("turret", Sequence::Moving, 3, 8, &mut pool);
        let hurt = frames.allocate("turret", Sequence::Hurt, 1, 8, &mut pool);

        assert_eq!(moving.length.value, 3);
        assert_eq!(hurt.base.value, 24);
        assert_eq!(frames.cursor(), 32);
    }

    #[test]
    fn test_switch_sheet_rewinds() {
        let mut pool = ConstantPool::new();
        let mut frames = FrameAllocator::new();
        frames.allocate("a", Sequence::Idle, 5, 1, &mut pool);

        frames.switch_sheet(2);
        assert_eq!(frames.cursor(), 0);
        assert_eq!(frames.sheet(), 2);

        let idle = frames.allocate("b", Sequence::Idle, 1, 1, &mut pool);
        assert_eq!(idle.base.value, 0);
    }

    #[test]
    fn test_constant_names_are_cleaned() {
        let mut pool = ConstantPool::new();
        let mut frames = FrameAllocator::new();
        let seq = frames.allocate("ice queen", Sequence::Death, 2, 1, &mut pool);

        assert_eq!(seq.base.name, "ICE_QUEEN_DEATH_BASE");
        assert_eq!(seq.length.name, "ICE_QUEEN_DEATH_LEN");
    }

    #[test]
    fn test_allocation_is_deterministic() {
        let run = || {
            let mut pool = ConstantPool::new();
            let mut frames = FrameAllocator::new();
            frames.allocate("x", Sequence::Moving, 7, 2, &mut pool);
            frames.allocate("x", Sequence::Attack, 3, 2, &mut pool);
            pool
        };
        assert_eq!(run(), run());
    }
}
