//! Validation system for boss records.
//!
//! Runs a suite of checks against the accumulated records and reports
//! errors and warnings. Any error stops the build before artifacts are
//! generated. Used by both `bossc build` and `bossc check`.

mod checks;
mod warning;

pub use checks::check_duplicate_identifiers;
pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::Printer;
use crate::types::BossRecord;

/// Run all validation checks against the records.
pub fn validate_records(records: &[BossRecord]) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_schema(records));
    result.merge(checks::check_duplicate_names(records));
    result.merge(checks::check_duplicate_types(records));

    result
}

/// Print diagnostics through the printer, followed by a summary line.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity);
        printer.plain(&format!("{}[{}]: {}", label, d.code, d));
        if let Some(help) = &d.help {
            printer.plain(&format!("    {}: {}", printer.dim("help"), help));
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        printer.error(
            "Failed",
            &format!("validation: {} error(s), {} warning(s)", errors, warnings),
        );
    } else if warnings > 0 {
        printer.warning("Checked", &format!("{} warning(s)", warnings));
    }
}
