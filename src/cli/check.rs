//! Check command implementation.
//!
//! Runs the compiler up to validation and reports diagnostics. Nothing is
//! written.

use std::path::PathBuf;

use clap::Args;

use crate::compile::{compile_file, CompileOptions};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::validation::print_diagnostics;

use super::Project;

/// Parse and validate boss definitions without writing anything
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Boss definition file (default: from bossc.yaml, else bosses.ini)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Configuration file (default: ./bossc.yaml when present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let project = Project::resolve(args.config.as_deref(), args.input, None)?;

    printer.status("Checking", &display_path(&project.input));
    let compilation = compile_file(&project.input, &CompileOptions::from(&project.config))?;
    print_diagnostics(&compilation.diagnostics, printer);
    compilation.ensure_valid()?;

    printer.success(
        "Valid",
        &format!(
            "{}, {}",
            plural(compilation.records.len(), "boss", "bosses"),
            plural(compilation.constants.len(), "constant", "constants")
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_check_reports_invalid_definitions() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bosses.ini");
        fs::write(&input, "[slug]\naims 1\nhp 3\n").unwrap();

        let args = CheckArgs {
            input: Some(input),
            config: None,
        };
        let err = run(args, &Printer::plain_text()).unwrap_err();
        assert!(err.to_string().contains("error"));
    }

    #[test]
    fn test_check_accepts_empty_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bosses.ini");
        fs::write(&input, "# nothing yet\n").unwrap();

        let args = CheckArgs {
            input: Some(input),
            config: None,
        };
        run(args, &Printer::plain_text()).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_check_missing_input() {
        let dir = tempdir().unwrap();
        let args = CheckArgs {
            input: Some(dir.path().join("missing.ini")),
            config: None,
        };
        assert!(run(args, &Printer::plain_text()).is_err());
    }
}
