//! Global constants, preprocessor defines, and animation sequences.

use std::fmt;

/// A named integer constant emitted into the definitions artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    pub name: String,
    pub value: i64,
}

impl Constant {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A preprocessor constant emitted into the declarations artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Define {
    pub name: String,
    pub value: String,
}

/// Append-only pool of integer constants, kept in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstantPool {
    entries: Vec<Constant>,
}

impl ConstantPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a constant and return its name.
    pub fn push(&mut self, name: impl Into<String>, value: i64) -> String {
        let constant = Constant::new(name, value);
        let name = constant.name.clone();
        self.entries.push(constant);
        name
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries.iter().find(|c| c.name == name).map(|c| c.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constant> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An animation sequence: named base offset and length constants.
///
/// Aliases are resolved at parse time by cloning the referenced sequence,
/// so there is no alias variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationSequence {
    pub base: Constant,
    pub length: Constant,
}

impl AnimationSequence {
    pub fn new(base: Constant, length: Constant) -> Self {
        Self { base, length }
    }
}

impl fmt::Display for AnimationSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}, {}={}", self.base.name, self.base.value, self.length.name, self.length.value)
    }
}

/// Upper-case a name and replace runs of non-alphanumeric characters with `_`.
pub fn clean_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c.to_ascii_uppercase());
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}

/// Parse an integer literal: decimal with optional sign, or `0x` hex.
pub fn parse_int(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let value = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => i64::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<i64>().ok()?,
    };
    Some(if negative { -value } else { value })
}
