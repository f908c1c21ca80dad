//! Attribute line classification and value parsing.
//!
//! These helpers are stateless: they turn the tokens of one attribute line
//! into values or diagnostics. The section accumulator applies the results
//! to the record being built.

use crate::types::{is_composite, parse_int, Attribute, HitboxLiteral, Sequence};
use crate::validation::Diagnostic;

use super::span::Spanned;

/// Prefix marking a sequence alias (`attack @moving`).
pub const ALIAS_PREFIX: char = '@';

/// What an attribute line sets, decided by its first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `bullet`, `distance`, `speed` or `color` followed by values.
    Composite(&'a str),
    Hitbox,
    Sequence(Sequence),
    Flags,
    Scalar(Attribute),
    /// `name` and `sheet` are set implicitly.
    Reserved(&'a str),
    Unknown(&'a str),
}

/// Classify an attribute line by its first token.
pub fn classify(head: &str) -> LineKind<'_> {
    if is_composite(head) {
        return LineKind::Composite(head);
    }
    if head == "hitbox" {
        return LineKind::Hitbox;
    }
    if head == "name" || head == "sheet" {
        return LineKind::Reserved(head);
    }
    if let Some(seq) = Sequence::from_name(head) {
        return LineKind::Sequence(seq);
    }
    match Attribute::from_name(head) {
        Some(Attribute::Flags) => LineKind::Flags,
        Some(attr) => LineKind::Scalar(attr),
        None => LineKind::Unknown(head),
    }
}

/// Expand the values of a composite line into `(field, value)` pairs.
///
/// A bare token is stored under the group name, `suffix=value` under
/// `group_suffix`. Malformed pairs are reported and skipped one by one.
pub fn parse_composite(
    group: &str,
    args: &[Spanned<String>],
) -> (Vec<(String, Spanned<String>)>, Vec<Diagnostic>) {
    let mut fields = Vec::new();
    let mut problems = Vec::new();

    for token in args {
        let Some((suffix, value)) = token.value.split_once('=') else {
            fields.push((group.to_string(), token.clone()));
            continue;
        };

        if suffix.is_empty() || value.is_empty() {
            problems.push(
                Diagnostic::warning(
                    "bossc::parse::bad-composite",
                    format!("malformed `{}` value `{}`", group, token.value),
                )
                .at_line(token.line())
                .with_help(format!("Write `{} suffix=value` or a bare value", group)),
            );
            continue;
        }

        fields.push((
            format!("{}_{}", group, suffix),
            Spanned::new(value.to_string(), token.span),
        ));
    }

    (fields, problems)
}

/// Join flag tokens into a single bitwise-or expression.
///
/// `flags A,B C` becomes `A | B C`; empty segments are dropped.
pub fn parse_flags(args: &[Spanned<String>]) -> Option<String> {
    let joined = args
        .iter()
        .map(|t| t.value.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let parts: Vec<&str> = joined
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" | "))
    }
}

/// Parse `hitbox x y w h`, keeping each dimension as written.
///
/// Dimensions may be separated by whitespace, commas, or both.
pub fn parse_hitbox(line: u32, args: &[Spanned<String>]) -> Result<HitboxLiteral, Diagnostic> {
    let dims: Vec<&str> = args
        .iter()
        .flat_map(|t| t.value.split(','))
        .filter(|d| !d.is_empty())
        .collect();

    let [x, y, width, height] = dims.as_slice() else {
        return Err(Diagnostic::warning(
            "bossc::parse::arity",
            format!("hitbox must have 4 dimensions, found {}", dims.len()),
        )
        .at_line(line)
        .with_help("Write `hitbox x y width height`"));
    };

    Ok(HitboxLiteral {
        x: x.to_string(),
        y: y.to_string(),
        width: width.to_string(),
        height: height.to_string(),
    })
}

/// A parsed sequence line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceSpec {
    /// `attack @moving`: copy another sequence of the same record.
    Alias {
        target: Spanned<String>,
        atlas: Option<Spanned<String>>,
    },
    /// `moving 4 [atlas]`: allocate frames.
    Frames {
        count: u32,
        atlas: Option<Spanned<String>>,
    },
}

/// Parse the arguments of a sequence line.
pub fn parse_sequence(
    seq: Sequence,
    line: u32,
    args: &[Spanned<String>],
) -> Result<SequenceSpec, Diagnostic> {
    let (first, atlas) = match args {
        [first] => (first, None),
        [first, atlas] => (first, Some(atlas.clone())),
        _ => {
            return Err(Diagnostic::warning(
                "bossc::parse::arity",
                format!(
                    "`{}` expects a frame count or @alias and an optional atlas, found {} value(s)",
                    seq,
                    args.len()
                ),
            )
            .at_line(line)
            .with_help(format!("Write `{} 4` or `{} 4 atlas.json`", seq, seq)));
        }
    };

    if let Some(target) = first.value.strip_prefix(ALIAS_PREFIX) {
        return Ok(SequenceSpec::Alias {
            target: Spanned::new(target.to_string(), first.span),
            atlas,
        });
    }

    let count = parse_int(&first.value)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| {
            Diagnostic::warning(
                "bossc::parse::bad-integer",
                format!("`{}` frame count `{}` is not a non-negative integer", seq, first.value),
            )
            .at_line(first.line())
        })?;

    Ok(SequenceSpec::Frames { count, atlas })
}
