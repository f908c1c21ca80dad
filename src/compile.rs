//! Compilation pipeline: parse, bind hitboxes, validate.
//!
//! A [`Compilation`] carries everything the emitter needs together with every
//! diagnostic gathered on the way. Validation errors do not abort compilation
//! itself; callers decide with [`Compilation::ensure_valid`] whether the
//! result may be published.

use std::path::Path;

use crate::config::Config;
use crate::error::{BossError, Result};
use crate::output::plural;
use crate::parser::{parse_definitions, AtlasSource, FsAtlasSource, ParseOptions};
use crate::types::{BossRecord, ConstantPool, Define, FrameTable, DEFAULT_MAX_HITBOXES};
use crate::validation::{check_duplicate_identifiers, validate_records, ValidationResult};

/// Numeric settings of one compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    pub grid_unit: u32,
    pub sheet_spacer: u32,
    pub max_hitboxes: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            grid_unit: 8,
            sheet_spacer: 1024,
            max_hitboxes: DEFAULT_MAX_HITBOXES,
        }
    }
}

impl From<&Config> for CompileOptions {
    fn from(config: &Config) -> Self {
        Self {
            grid_unit: config.grid_unit,
            sheet_spacer: config.sheet_spacer,
            max_hitboxes: config.max_hitboxes,
        }
    }
}

impl CompileOptions {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            grid_unit: self.grid_unit,
            sheet_spacer: self.sheet_spacer,
            max_hitboxes: self.max_hitboxes,
        }
    }
}

/// The compiled form of a definition file.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub records: Vec<BossRecord>,
    /// Private, sequence, and fixed count constants in emission order.
    pub constants: ConstantPool,
    pub defines: Vec<Define>,
    pub frames: FrameTable,
    /// Parse and validation diagnostics, in the order they were found.
    pub diagnostics: ValidationResult,
    /// Sheet selected when input ended.
    pub sheet: u32,
    /// Frame cursor when input ended.
    pub cursor: u32,
}

impl Compilation {
    /// Fail when any diagnostic is an error.
    pub fn ensure_valid(&self) -> Result<()> {
        if !self.diagnostics.has_errors() {
            return Ok(());
        }
        let errors = self.diagnostics.error_count();
        Err(BossError::Validation {
            message: format!(
                "{} in boss definitions",
                plural(errors, "error", "errors")
            ),
            help: Some("Fix the reported errors; no files were written".to_string()),
        })
    }
}

/// Compile definition text, loading atlases through `atlases`.
///
/// Returns `Err` only for fatal parse conditions. Schema violations are
/// reported as error diagnostics on the returned compilation.
pub fn compile_source<S: AtlasSource>(
    source: &str,
    atlases: S,
    options: &CompileOptions,
) -> Result<Compilation> {
    let parsed = parse_definitions(source, atlases, options.parse_options())?;

    let mut diagnostics = parsed.diagnostics;
    diagnostics.merge(validate_records(&parsed.records));

    let mut constants = parsed.constants;
    constants.push("BOSS_COUNT", parsed.records.len() as i64);
    constants.push("HITBOX_FRAME_COUNT", parsed.frames.len() as i64);
    constants.push("SHEET_SPACER", i64::from(options.sheet_spacer));

    let type_constants: Vec<String> = parsed.records.iter().map(|r| r.type_constant()).collect();
    let identifiers = constants
        .iter()
        .map(|c| c.name.as_str())
        .chain(type_constants.iter().map(String::as_str))
        .chain(parsed.defines.iter().map(|d| d.name.as_str()));
    diagnostics.merge(check_duplicate_identifiers(identifiers));

    Ok(Compilation {
        records: parsed.records,
        constants,
        defines: parsed.defines,
        frames: parsed.frames,
        diagnostics,
        sheet: parsed.sheet,
        cursor: parsed.cursor,
    })
}

/// Compile a definition file. Atlases resolve relative to its directory.
pub fn compile_file(path: &Path, options: &CompileOptions) -> Result<Compilation> {
    let source = std::fs::read_to_string(path).map_err(|e| BossError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read definitions: {}", e),
    })?;
    let root = path.parent().unwrap_or_else(|| Path::new("."));
    compile_source(&source, FsAtlasSource::new(root), options)
}
