//! Build command implementation.
//!
//! Compiles the boss definition file and publishes the generated
//! declarations and definitions to the output directory.

use std::path::PathBuf;

use clap::Args;

use crate::compile::{compile_file, CompileOptions};
use crate::emit::{emit, EmitOptions};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::publish::{plan, publish, Outcome};
use crate::validation::print_diagnostics;

use super::Project;

/// Compile boss definitions and publish the generated sources
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Boss definition file (default: from bossc.yaml, else bosses.ini)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Directory the generated sources are published to
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Configuration file (default: ./bossc.yaml when present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Compile and report, but write nothing
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let project = Project::resolve(args.config.as_deref(), args.input, args.output)?;
    let config = &project.config;

    printer.status("Compiling", &display_path(&project.input));
    let compilation = compile_file(&project.input, &CompileOptions::from(config))?;
    print_diagnostics(&compilation.diagnostics, printer);
    compilation.ensure_valid()?;

    let options = EmitOptions {
        notice: config.notice_text(&project.base)?,
        header_name: config.header.clone(),
        source_name: config.source.clone(),
        includes: config.includes.clone(),
        max_hitboxes: config.max_hitboxes,
    };
    let artifacts = emit(&compilation, &options);

    let summary = format!(
        "{}, {}",
        plural(compilation.records.len(), "boss", "bosses"),
        plural(compilation.frames.len(), "hitbox frame", "hitbox frames")
    );

    if args.dry_run {
        let report = plan(&artifacts, &project.output)?;
        for entry in &report.entries {
            let verb = match entry.outcome {
                Outcome::Published => "Would write",
                Outcome::Unchanged => "Unchanged",
            };
            printer.info(verb, &display_path(&entry.path));
        }
        printer.success("Checked", &format!("{} (dry run)", summary));
        return Ok(());
    }

    let report = publish(&artifacts, &project.output, printer)?;
    printer.success(
        "Finished",
        &format!(
            "{} ({} written, {} unchanged)",
            summary,
            report.published(),
            report.unchanged()
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILENAME;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const SLUG: &str = "\
[slug]
aims 1
speed 4 anime=2
hp 50
type 2
score 100
damage 5
flags 0
path BossData::ASTAR
bullet algo=0 speed=2 9
distance chase=10 pursuit=20
color hp=0xff0000 name=0xffffff
is_goal false
show_details true
hitbox 0 0 32 32
moving 4
attack 2
hurt 1
death 3
idle @moving
";

    fn project(dir: &Path, definitions: &str) -> PathBuf {
        fs::write(dir.join("bosses.ini"), definitions).unwrap();
        let config = dir.join(CONFIG_FILENAME);
        fs::write(&config, "output: gen\n").unwrap();
        config
    }

    fn args(config: PathBuf, dry_run: bool) -> BuildArgs {
        BuildArgs {
            config: Some(config),
            dry_run,
            ..BuildArgs::default()
        }
    }

    #[test]
    fn test_build_publishes_both_artifacts() {
        let dir = tempdir().unwrap();
        let config = project(dir.path(), SLUG);

        run(args(config, false), &Printer::plain_text()).unwrap();

        let header = fs::read_to_string(dir.path().join("gen/bossdata.h")).unwrap();
        let source = fs::read_to_string(dir.path().join("gen/bossdata.cpp")).unwrap();
        assert!(header.contains("constexpr int BOSS_SLUG = 2;"));
        assert!(source.contains(".name = \"slug\","));
    }

    #[test]
    fn test_build_fails_on_schema_error_without_writing() {
        let dir = tempdir().unwrap();
        let config = project(dir.path(), &SLUG.replace("damage 5\n", ""));

        let result = run(args(config, false), &Printer::plain_text());

        assert!(result.is_err());
        assert!(!dir.path().join("gen").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = project(dir.path(), SLUG);

        run(args(config, true), &Printer::plain_text()).unwrap();

        assert!(!dir.path().join("gen").exists());
    }

    #[test]
    fn test_output_flag_overrides_config() {
        let dir = tempdir().unwrap();
        let config = project(dir.path(), SLUG);
        let elsewhere = dir.path().join("elsewhere");

        let build = BuildArgs {
            output: Some(elsewhere.clone()),
            ..args(config, false)
        };
        run(build, &Printer::plain_text()).unwrap();

        assert!(elsewhere.join("bossdata.h").exists());
        assert!(!dir.path().join("gen").exists());
    }

    #[test]
    fn test_custom_notice_is_used() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bosses.ini"), SLUG).unwrap();
        fs::write(dir.path().join("notice.txt"), "// (c) studio\n").unwrap();
        let config = dir.path().join(CONFIG_FILENAME);
        fs::write(&config, "output: gen\nnotice: notice.txt\n").unwrap();

        run(args(config, false), &Printer::plain_text()).unwrap();

        let header = fs::read_to_string(dir.path().join("gen/bossdata.h")).unwrap();
        assert!(header.starts_with("// (c) studio\n"));
    }
}
