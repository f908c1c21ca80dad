//! Boss record types and the closed field schema.
//!
//! A `BossRecord` is built one attribute line at a time by the section
//! accumulator. Known fields are keyed by the closed `Attribute` and
//! `Sequence` enums; composite suffixes outside the schema land in a side
//! table so validation can report them.

use std::collections::BTreeMap;
use std::fmt;

use crate::parser::Spanned;

use super::constant::{clean_name, AnimationSequence};
use super::frame::HitboxLiteral;

/// Composite attribute groups (`bullet speed=2 algo=1 9`).
pub const COMPOSITE_GROUPS: [&str; 4] = ["bullet", "distance", "speed", "color"];

/// Returns true when `name` is a composite group keyword.
pub fn is_composite(name: &str) -> bool {
    COMPOSITE_GROUPS.contains(&name)
}

/// Scalar and composite attributes of a boss, in serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribute {
    Speed,
    SpeedAnime,
    Hp,
    Type,
    Score,
    Damage,
    Aims,
    Flags,
    Path,
    Bullet,
    BulletSpeed,
    BulletAlgo,
    DistanceChase,
    DistancePursuit,
    ColorHp,
    ColorName,
    IsGoal,
    ShowDetails,
}

impl Attribute {
    /// Every attribute, in serialization order.
    pub const ALL: [Attribute; 18] = [
        Attribute::Speed,
        Attribute::SpeedAnime,
        Attribute::Hp,
        Attribute::Type,
        Attribute::Score,
        Attribute::Damage,
        Attribute::Aims,
        Attribute::Flags,
        Attribute::Path,
        Attribute::Bullet,
        Attribute::BulletSpeed,
        Attribute::BulletAlgo,
        Attribute::DistanceChase,
        Attribute::DistancePursuit,
        Attribute::ColorHp,
        Attribute::ColorName,
        Attribute::IsGoal,
        Attribute::ShowDetails,
    ];

    /// Field name as written in definitions and emitted code.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Speed => "speed",
            Attribute::SpeedAnime => "speed_anime",
            Attribute::Hp => "hp",
            Attribute::Type => "type",
            Attribute::Score => "score",
            Attribute::Damage => "damage",
            Attribute::Aims => "aims",
            Attribute::Flags => "flags",
            Attribute::Path => "path",
            Attribute::Bullet => "bullet",
            Attribute::BulletSpeed => "bullet_speed",
            Attribute::BulletAlgo => "bullet_algo",
            Attribute::DistanceChase => "distance_chase",
            Attribute::DistancePursuit => "distance_pursuit",
            Attribute::ColorHp => "color_hp",
            Attribute::ColorName => "color_name",
            Attribute::IsGoal => "is_goal",
            Attribute::ShowDetails => "show_details",
        }
    }

    pub fn from_name(name: &str) -> Option<Attribute> {
        Attribute::ALL.into_iter().find(|a| a.name() == name)
    }

    /// C type of the emitted struct member.
    pub fn c_type(self) -> &'static str {
        match self {
            Attribute::Flags | Attribute::Path | Attribute::ColorHp | Attribute::ColorName => {
                "uint32_t"
            }
            Attribute::Bullet | Attribute::BulletSpeed | Attribute::BulletAlgo => "uint8_t",
            Attribute::IsGoal | Attribute::ShowDetails => "bool",
            _ => "int",
        }
    }

    /// Member comment in the emitted struct.
    pub fn description(self) -> &'static str {
        match self {
            Attribute::Speed => "movement speed",
            Attribute::SpeedAnime => "animation speed",
            Attribute::Hp => "hp",
            Attribute::Type => "type",
            Attribute::Score => "score received",
            Attribute::Damage => "damage given",
            Attribute::Aims => "aim directions per frame",
            Attribute::Flags => "custom flags",
            Attribute::Path => "path finding algo",
            Attribute::Bullet => "boss bullet",
            Attribute::BulletSpeed => "boss bullet speed",
            Attribute::BulletAlgo => "boss bullet algo",
            Attribute::DistanceChase => "distance to engage chase",
            Attribute::DistancePursuit => "continue pursuit within distance",
            Attribute::ColorHp => "hp bar color",
            Attribute::ColorName => "name color",
            Attribute::IsGoal => "is this boss a map goal?",
            Attribute::ShowDetails => "display hp bar/name",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named animation sequences, in serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sequence {
    Moving,
    Attack,
    Hurt,
    Death,
    Idle,
}

impl Sequence {
    pub const ALL: [Sequence; 5] = [
        Sequence::Moving,
        Sequence::Attack,
        Sequence::Hurt,
        Sequence::Death,
        Sequence::Idle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Sequence::Moving => "moving",
            Sequence::Attack => "attack",
            Sequence::Hurt => "hurt",
            Sequence::Death => "death",
            Sequence::Idle => "idle",
        }
    }

    pub fn from_name(name: &str) -> Option<Sequence> {
        Sequence::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Names of every field a complete record carries, in serialization order.
pub fn schema_fields() -> Vec<&'static str> {
    let mut fields = vec!["name"];
    fields.extend(Attribute::ALL.iter().map(|a| a.name()));
    fields.extend(Sequence::ALL.iter().map(|s| s.name()));
    fields.push("hitbox");
    fields.push("sheet");
    fields
}

/// A single boss definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossRecord {
    pub name: Spanned<String>,
    pub sheet: u32,
    attributes: BTreeMap<Attribute, Spanned<String>>,
    sequences: BTreeMap<Sequence, Spanned<AnimationSequence>>,
    hitbox: Option<Spanned<HitboxLiteral>>,
    /// Composite fields with suffixes outside the schema.
    unknown: BTreeMap<String, Spanned<String>>,
}

impl BossRecord {
    pub fn new(name: Spanned<String>, sheet: u32) -> Self {
        Self {
            name,
            sheet,
            attributes: BTreeMap::new(),
            sequences: BTreeMap::new(),
            hitbox: None,
            unknown: BTreeMap::new(),
        }
    }

    /// Set an attribute. Returns the previous value if one was overwritten.
    pub fn set(&mut self, attr: Attribute, value: Spanned<String>) -> Option<Spanned<String>> {
        self.attributes.insert(attr, value)
    }

    pub fn get(&self, attr: Attribute) -> Option<&str> {
        self.attributes.get(&attr).map(|v| v.value.as_str())
    }

    pub fn get_spanned(&self, attr: Attribute) -> Option<&Spanned<String>> {
        self.attributes.get(&attr)
    }

    /// Name of the header constant holding this boss's `type`.
    pub fn type_constant(&self) -> String {
        format!("BOSS_{}", clean_name(&self.name.value))
    }

    pub fn set_sequence(
        &mut self,
        seq: Sequence,
        value: Spanned<AnimationSequence>,
    ) -> Option<Spanned<AnimationSequence>> {
        self.sequences.insert(seq, value)
    }

    pub fn sequence(&self, seq: Sequence) -> Option<&AnimationSequence> {
        self.sequences.get(&seq).map(|s| &s.value)
    }

    pub fn sequence_spanned(&self, seq: Sequence) -> Option<&Spanned<AnimationSequence>> {
        self.sequences.get(&seq)
    }

    pub fn set_hitbox(
        &mut self,
        hitbox: Spanned<HitboxLiteral>,
    ) -> Option<Spanned<HitboxLiteral>> {
        self.hitbox.replace(hitbox)
    }

    pub fn hitbox(&self) -> Option<&HitboxLiteral> {
        self.hitbox.as_ref().map(|h| &h.value)
    }

    /// Store a composite field whose name is not part of the schema.
    pub fn set_unknown(&mut self, field: String, value: Spanned<String>) -> Option<Spanned<String>> {
        self.unknown.insert(field, value)
    }

    pub fn unknown_fields(&self) -> impl Iterator<Item = (&str, &Spanned<String>)> {
        self.unknown.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Value of any populated field by its emitted name, including unknown ones.
    pub fn field(&self, name: &str) -> Option<&str> {
        if let Some(attr) = Attribute::from_name(name) {
            return self.get(attr);
        }
        self.unknown.get(name).map(|v| v.value.as_str())
    }

    /// Names of every populated field, in serialization order, then unknowns.
    pub fn populated_fields(&self) -> Vec<String> {
        let mut fields = vec!["name".to_string()];
        fields.extend(self.attributes.keys().map(|a| a.name().to_string()));
        fields.extend(self.sequences.keys().map(|s| s.name().to_string()));
        if self.hitbox.is_some() {
            fields.push("hitbox".to_string());
        }
        fields.push("sheet".to_string());
        fields.extend(self.unknown.keys().cloned());
        fields
    }
}
