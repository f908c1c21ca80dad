pub mod build;
pub mod check;
pub mod completions;
pub mod init;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

/// bossc - Boss definition compiler
#[derive(Parser, Debug)]
#[command(name = "bossc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile boss definitions and publish the generated sources
    Build(build::BuildArgs),

    /// Parse and validate boss definitions without writing anything
    Check(check::CheckArgs),

    /// Initialize a bossc project (generates bossc.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Configuration with its paths resolved for one invocation.
#[derive(Debug, Clone)]
pub(crate) struct Project {
    pub config: Config,
    /// Directory that relative configuration paths are resolved against.
    pub base: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Project {
    /// Load `config` (or `./bossc.yaml` when present) and apply overrides.
    ///
    /// Paths from the file are relative to the file's directory; paths given
    /// on the command line are used as is.
    pub fn resolve(
        config: Option<&Path>,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Result<Self> {
        let (config, base) = match config {
            Some(path) => {
                let base = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
                (Config::load(path)?, base)
            }
            None => (Config::load_or_default(Path::new("."))?, PathBuf::from(".")),
        };

        let input = input.unwrap_or_else(|| base.join(&config.input));
        let output = output.unwrap_or_else(|| base.join(&config.output));

        Ok(Self {
            config,
            base,
            input,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILENAME;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_config_paths_relative_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "input: data/bosses.ini\noutput: gen\n").unwrap();

        let project = Project::resolve(Some(&path), None, None).unwrap();

        assert_eq!(project.input, dir.path().join("data/bosses.ini"));
        assert_eq!(project.output, dir.path().join("gen"));
    }

    #[test]
    fn test_flags_override_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "output: gen\n").unwrap();

        let project =
            Project::resolve(Some(&path), Some("x.ini".into()), Some("out".into())).unwrap();

        assert_eq!(project.input, PathBuf::from("x.ini"));
        assert_eq!(project.output, PathBuf::from("out"));
    }

    #[test]
    fn test_cli_parses_without_subcommand() {
        let cli = Cli::parse_from(["bossc"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parses_build_flags() {
        let cli = Cli::parse_from(["bossc", "build", "--input", "b.ini", "--dry-run"]);
        match cli.command {
            Some(Commands::Build(args)) => {
                assert_eq!(args.input, Some(PathBuf::from("b.ini")));
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
