//! Validation checks for accumulated boss records.
//!
//! Each check takes the full record list and returns a `ValidationResult`,
//! so one run reports every defect at once.

use std::collections::HashMap;

use crate::types::{schema_fields, Attribute, BossRecord};

use super::warning::{Diagnostic, ValidationResult};

/// Check every record against the closed field schema.
///
/// Reports missing fields and fields the schema does not know about.
pub fn check_schema(records: &[BossRecord]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let schema = schema_fields();

    for record in records {
        let populated = record.populated_fields();
        let line = record.name.line();

        let missing: Vec<&str> = schema
            .iter()
            .copied()
            .filter(|f| !populated.iter().any(|p| p.as_str() == *f))
            .collect();
        if !missing.is_empty() {
            result.push(
                Diagnostic::error(
                    "bossc::validate::missing-field",
                    format!(
                        "missing fields: {} for `{}`",
                        missing.join(", "),
                        record.name.value
                    ),
                )
                .at_line(line)
                .with_help("Every boss must define the complete field set"),
            );
        }

        let unknown: Vec<&str> = record.unknown_fields().map(|(name, _)| name).collect();
        if !unknown.is_empty() {
            result.push(
                Diagnostic::error(
                    "bossc::validate::unknown-field",
                    format!(
                        "invalid fields: {} for `{}`",
                        unknown.join(", "),
                        record.name.value
                    ),
                )
                .at_line(line)
                .with_help(format!("Known fields are: {}", schema.join(", "))),
            );
        }
    }

    result
}

/// Check that every boss name is used once.
pub fn check_duplicate_names(records: &[BossRecord]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashMap<&str, u32> = HashMap::new();

    for record in records {
        let name = record.name.value.as_str();
        if let Some(first) = seen.get(name) {
            result.push(
                Diagnostic::error(
                    "bossc::validate::duplicate-name",
                    format!("boss `{}` is already defined on line {}", name, first),
                )
                .at_line(record.name.line())
                .with_help("Section names must be unique"),
            );
        } else {
            seen.insert(name, record.name.line());
        }
    }

    result
}

/// Check for bosses sharing a `type` value.
///
/// Lookup by type returns the first match, so later bosses are unreachable.
pub fn check_duplicate_types(records: &[BossRecord]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for record in records {
        let Some(kind) = record.get(Attribute::Type) else {
            continue;
        };
        if let Some(first) = seen.get(kind) {
            result.push(
                Diagnostic::warning(
                    "bossc::validate::duplicate-type",
                    format!(
                        "`{}` shares type {} with `{}`; lookups by type return `{}`",
                        record.name.value, kind, first, first
                    ),
                )
                .at_line(record.name.line()),
            );
        } else {
            seen.insert(kind, record.name.value.as_str());
        }
    }

    result
}

/// Check that no two generated identifiers share a name.
///
/// Covers pool constants, per-boss type constants, and defines. Two sections
/// whose names clean to the same identifier, or a boss named `count` next to
/// the generated `BOSS_COUNT`, would not compile.
pub fn check_duplicate_identifiers<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for name in names {
        let count = seen.entry(name).or_insert(0);
        *count += 1;
        if *count == 2 {
            result.push(
                Diagnostic::error(
                    "bossc::validate::duplicate-constant",
                    format!("identifier `{}` is emitted more than once", name),
                )
                .with_help("Rename the section, constant, or define so identifiers stay unique"),
            );
        }
    }

    result
}
