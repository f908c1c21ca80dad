//! C++ code generation.
//!
//! A compilation is serialized into two artifacts:
//! - the declarations header: defines, per-boss type constants, enums,
//!   struct layouts, and the lookup function signatures;
//! - the definitions source: the constant pool, the boss table, the hitbox
//!   frame table, and the lookup function bodies.
//!
//! Output depends only on the compilation, never on map iteration order,
//! so identical input always yields byte-identical artifacts.

mod header;
mod source;

pub use header::render_header;
pub use source::render_source;

use crate::compile::Compilation;
use crate::config::DEFAULT_NOTICE;
use crate::types::DEFAULT_MAX_HITBOXES;

const INDENT: &str = "    ";

/// Settings that shape the generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Comment block placed at the top of both artifacts.
    pub notice: String,
    /// File name of the declarations artifact, included by the definitions.
    pub header_name: String,
    /// File name of the definitions artifact.
    pub source_name: String,
    /// Extra headers included by the definitions artifact.
    pub includes: Vec<String>,
    /// Capacity of `hitboxFrame_t::boxes`.
    pub max_hitboxes: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            notice: DEFAULT_NOTICE.to_string(),
            header_name: "bossdata.h".to_string(),
            source_name: "bossdata.cpp".to_string(),
            includes: vec![],
            max_hitboxes: DEFAULT_MAX_HITBOXES,
        }
    }
}

/// A generated file, staged in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub content: String,
}

/// The declarations/definitions pair produced by one compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub header: Artifact,
    pub source: Artifact,
}

impl Artifacts {
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        [&self.header, &self.source].into_iter()
    }
}

/// Render both artifacts.
pub fn emit(compilation: &Compilation, options: &EmitOptions) -> Artifacts {
    Artifacts {
        header: Artifact {
            name: options.header_name.clone(),
            content: render_header(compilation, options),
        },
        source: Artifact {
            name: options.source_name.clone(),
            content: render_source(compilation, options),
        },
    }
}

/// Notice followed by the autogenerated marker.
fn banner(notice: &str) -> String {
    let mut out = String::new();
    out.push_str(notice.trim_end());
    out.push_str("\n\n");
    out.push_str("//////////////////////////////////////////////////\n");
    out.push_str("// autogenerated\n\n");
    out
}

/// Quote a string as a C string literal.
fn c_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
