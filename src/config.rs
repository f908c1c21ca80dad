//! Project configuration (bossc.yaml) parsing.
//!
//! The configuration names the definition file, the directory the generated
//! sources are published to, and the numeric constants of the hitbox grid.
//! Every key is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BossError, Result};
use crate::types::DEFAULT_MAX_HITBOXES;

/// The name of the configuration file.
pub const CONFIG_FILENAME: &str = "bossc.yaml";

/// Default notice placed at the top of both generated artifacts.
pub const DEFAULT_NOTICE: &str = "/*\n    Generated by bossc from boss definition files.\n    Do not edit by hand: changes are overwritten on the next build.\n*/";

/// Project configuration loaded from bossc.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Boss definition file.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Directory the generated artifacts are published to.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// File name of the declarations artifact.
    #[serde(default = "default_header")]
    pub header: String,

    /// File name of the definitions artifact.
    #[serde(default = "default_source")]
    pub source: String,

    /// Hitbox quantization step in pixels.
    #[serde(default = "default_grid_unit")]
    pub grid_unit: u32,

    /// Multiplier separating frame ids of different sheets.
    #[serde(default = "default_sheet_spacer")]
    pub sheet_spacer: u32,

    /// Maximum hitboxes stored per frame.
    #[serde(default = "default_max_hitboxes")]
    pub max_hitboxes: usize,

    /// File whose contents replace the default notice.
    #[serde(default)]
    pub notice: Option<PathBuf>,

    /// Extra headers included by the definitions artifact.
    #[serde(default)]
    pub includes: Vec<String>,
}

fn default_input() -> PathBuf {
    PathBuf::from("bosses.ini")
}

fn default_output() -> PathBuf {
    PathBuf::from(".")
}

fn default_header() -> String {
    "bossdata.h".to_string()
}

fn default_source() -> String {
    "bossdata.cpp".to_string()
}

fn default_grid_unit() -> u32 {
    8
}

fn default_sheet_spacer() -> u32 {
    1024
}

fn default_max_hitboxes() -> usize {
    DEFAULT_MAX_HITBOXES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            header: default_header(),
            source: default_source(),
            grid_unit: default_grid_unit(),
            sheet_spacer: default_sheet_spacer(),
            max_hitboxes: default_max_hitboxes(),
            notice: None,
            includes: vec![],
        }
    }
}

impl Config {
    /// Load configuration from a bossc.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BossError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read configuration: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `dir/bossc.yaml` when present, defaults otherwise.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(content).map_err(|e| BossError::Config {
            message: format!("Invalid configuration: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;
        config.check()?;
        Ok(config)
    }

    /// Reject values the compiler cannot work with.
    pub fn check(&self) -> Result<()> {
        let zero = [
            ("grid_unit", self.grid_unit == 0),
            ("sheet_spacer", self.sheet_spacer == 0),
            ("max_hitboxes", self.max_hitboxes == 0),
        ];
        if let Some((key, _)) = zero.iter().find(|(_, is_zero)| *is_zero) {
            return Err(BossError::Config {
                message: format!("`{}` must be greater than zero", key),
                help: None,
            });
        }
        if self.header == self.source {
            return Err(BossError::Config {
                message: format!("`header` and `source` both name `{}`", self.header),
                help: Some("The two artifacts need distinct file names".to_string()),
            });
        }
        Ok(())
    }

    /// Text of the notice block, read relative to `base` when configured.
    pub fn notice_text(&self, base: &Path) -> Result<String> {
        match &self.notice {
            Some(path) => {
                let path = base.join(path);
                let text = std::fs::read_to_string(&path).map_err(|e| BossError::Io {
                    path: path.clone(),
                    message: format!("Failed to read notice: {}", e),
                })?;
                Ok(text.trim_end().to_string())
            }
            None => Ok(DEFAULT_NOTICE.to_string()),
        }
    }

    /// Serialize to YAML, as written by `bossc init`.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| BossError::Config {
            message: format!("Failed to serialize configuration: {}", e),
            help: None,
        })
    }
}
