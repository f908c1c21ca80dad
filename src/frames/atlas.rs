//! Hitbox atlas reader.
//!
//! An atlas describes pixel hitboxes drawn over a sprite sheet:
//!
//! ```json
//! { "frame": { "width": 32, "height": 32, "cols": 4 },
//!   "hitboxes": [ { "x": 40, "y": 0, "w": 8, "h": 8, "type": 1 } ] }
//! ```
//!
//! `.yaml`/`.yml` files are read as YAML, everything else as JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BossError, Result};

/// Sprite frame geometry of the sheet the atlas covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameGeometry {
    pub width: u32,
    pub height: u32,
    /// Sprites per sheet row.
    pub cols: u32,
}

/// One pixel-space box, positioned in absolute sheet coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasBox {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    #[serde(rename = "type", default)]
    pub kind: i64,
}

/// A parsed hitbox atlas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atlas {
    pub frame: FrameGeometry,
    #[serde(default)]
    pub hitboxes: Vec<AtlasBox>,
}

impl Atlas {
    /// Read and parse an atlas file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| BossError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read atlas: {}", e),
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        let atlas = if is_yaml {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        };

        atlas.map_err(|message| BossError::Atlas {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_json(content: &str) -> std::result::Result<Self, String> {
        let atlas: Atlas = serde_json::from_str(content).map_err(|e| e.to_string())?;
        atlas.check()?;
        Ok(atlas)
    }

    pub fn from_yaml(content: &str) -> std::result::Result<Self, String> {
        let atlas: Atlas = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        atlas.check()?;
        Ok(atlas)
    }

    fn check(&self) -> std::result::Result<(), String> {
        if self.frame.width == 0 || self.frame.height == 0 {
            return Err(format!(
                "frame size must be non-zero, got {}x{}",
                self.frame.width, self.frame.height
            ));
        }
        if self.frame.cols == 0 {
            return Err("frame.cols must be at least 1".to_string());
        }
        Ok(())
    }
}
