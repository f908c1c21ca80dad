//! Hitbox rectangles and the per-frame hitbox table.

use std::collections::BTreeMap;
use std::fmt;

/// Default number of hitboxes a single frame may hold.
pub const DEFAULT_MAX_HITBOXES: usize = 4;

/// Hitbox category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum HitKind {
    /// Placeholder category; atlas boxes tagged with it are skipped.
    #[default]
    None,
    Main,
    Attack,
    Special1,
    Special2,
}

impl HitKind {
    pub const ALL: [HitKind; 5] = [
        HitKind::None,
        HitKind::Main,
        HitKind::Attack,
        HitKind::Special1,
        HitKind::Special2,
    ];

    pub fn from_code(code: i64) -> Option<HitKind> {
        usize::try_from(code)
            .ok()
            .and_then(|i| HitKind::ALL.get(i).copied())
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Enumerator name in the emitted `HitboxType` enum.
    pub fn c_name(self) -> &'static str {
        match self {
            HitKind::None => "HITBOX_NONE",
            HitKind::Main => "HITBOX_MAIN",
            HitKind::Attack => "HITBOX_ATTACK",
            HitKind::Special1 => "HITBOX_SPECIAL1",
            HitKind::Special2 => "HITBOX_SPECIAL2",
        }
    }
}

/// A rectangle with a category, in grid units once quantized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub kind: HitKind,
}

impl HitRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32, kind: HitKind) -> Self {
        Self {
            x,
            y,
            width,
            height,
            kind,
        }
    }
}

impl fmt::Display for HitRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}, {}, {}, {}, {}}}",
            self.x,
            self.y,
            self.width,
            self.height,
            self.kind.code()
        )
    }
}

/// The body hitbox of a boss, as written in the definition file.
///
/// Dimensions are kept as source tokens so symbolic values such as
/// `BOSS_W` pass through to the generated code unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitboxLiteral {
    pub x: String,
    pub y: String,
    pub width: String,
    pub height: String,
}

impl fmt::Display for HitboxLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}, {}, {}, {}, {}}}",
            self.x,
            self.y,
            self.width,
            self.height,
            HitKind::None.code()
        )
    }
}

/// Hitboxes of one composite frame id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub id: u32,
    pub boxes: Vec<HitRect>,
}

/// Outcome of adding a box to the frame table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Added,
    /// The frame was already full; the box was dropped.
    Overflow,
}

/// Composite frame id → hitboxes, ordered by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable {
    frames: BTreeMap<u32, Vec<HitRect>>,
    max_boxes: usize,
}

impl Default for FrameTable {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HITBOXES)
    }
}

impl FrameTable {
    pub fn new(max_boxes: usize) -> Self {
        Self {
            frames: BTreeMap::new(),
            max_boxes,
        }
    }

    pub fn max_boxes(&self) -> usize {
        self.max_boxes
    }

    /// Append a box to a frame, creating the frame on first use.
    ///
    /// Boxes beyond the per-frame maximum are dropped in arrival order.
    pub fn push(&mut self, id: u32, rect: HitRect) -> Placement {
        let boxes = self.frames.entry(id).or_default();
        if boxes.len() >= self.max_boxes {
            return Placement::Overflow;
        }
        boxes.push(rect);
        Placement::Added
    }

    pub fn get(&self, id: u32) -> Option<&[HitRect]> {
        self.frames.get(&id).map(|b| b.as_slice())
    }

    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        self.frames.iter().map(|(&id, boxes)| Frame {
            id,
            boxes: boxes.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
