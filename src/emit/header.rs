//! Declarations artifact.

use crate::compile::Compilation;
use crate::types::{Attribute, HitKind, Sequence};

use super::{banner, EmitOptions, INDENT};

/// Path finding algorithms understood by the engine.
const PATHS: [&str; 4] = ["ASTAR", "BFS", "LOS", "ASTAR_SMOOTH"];

/// Column where struct member comments start.
const COMMENT_COLUMN: usize = 28;

/// Render the declarations header.
pub fn render_header(compilation: &Compilation, options: &EmitOptions) -> String {
    let mut out = banner(&options.notice);

    out.push_str("#pragma once\n\n");
    out.push_str("#include <cstdint>\n\n");

    if !compilation.defines.is_empty() {
        for define in &compilation.defines {
            out.push_str(&format!("#define {} {}\n", define.name, define.value));
        }
        out.push('\n');
    }

    if !compilation.records.is_empty() {
        for record in &compilation.records {
            let kind = record.get(Attribute::Type).unwrap_or("0");
            out.push_str(&format!(
                "constexpr int {} = {};\n",
                record.type_constant(),
                kind
            ));
        }
        out.push('\n');
    }

    out.push_str("namespace BossData\n{\n");
    push_enum(&mut out, "Path", PATHS.iter().copied());
    out.push('\n');
    push_enum(&mut out, "HitboxType", HitKind::ALL.iter().map(|k| k.c_name()));
    out.push_str("}\n\n");

    push_struct(
        &mut out,
        "boss_seq_t",
        &[("int base;", "first frame"), ("int length;", "frames per aim")],
    );
    push_struct(
        &mut out,
        "hitbox_t",
        &[
            ("int x;", "grid units from the sprite's left edge"),
            ("int y;", "grid units from the sprite's top edge"),
            ("int width;", "grid units"),
            ("int height;", "grid units"),
            ("uint8_t type;", "BossData::HitboxType"),
        ],
    );

    let boxes = format!("hitbox_t boxes[{}];", options.max_hitboxes);
    push_struct(
        &mut out,
        "hitboxFrame_t",
        &[
            ("int id;", "sheet * SHEET_SPACER + frame"),
            ("int count;", "boxes in use"),
            (boxes.as_str(), "hitboxes"),
        ],
    );

    let mut members: Vec<(String, String)> =
        vec![("const char *name;".to_string(), "boss name".to_string())];
    for attr in Attribute::ALL {
        members.push((
            format!("{} {};", attr.c_type(), attr.name()),
            attr.description().to_string(),
        ));
    }
    for seq in Sequence::ALL {
        members.push((
            format!("boss_seq_t {};", seq.name()),
            format!("animation seq: {}", seq.name()),
        ));
    }
    members.push(("hitbox_t hitbox;".to_string(), "boss hitbox".to_string()));
    members.push(("int sheet;".to_string(), "sprite sheet used".to_string()));
    let members: Vec<(&str, &str)> = members
        .iter()
        .map(|(d, c)| (d.as_str(), c.as_str()))
        .collect();
    push_struct(&mut out, "bossData_t", &members);

    out.push_str("bossData_t *getBossData(const int type);\n");
    out.push_str("const hitboxFrame_t *getHitboxFrame(const int id);\n");

    out
}

fn push_enum<'a>(out: &mut String, name: &str, variants: impl Iterator<Item = &'a str>) {
    out.push_str(&format!("{INDENT}enum {name} : uint8_t\n{INDENT}{{\n"));
    for variant in variants {
        out.push_str(&format!("{INDENT}{INDENT}{variant},\n"));
    }
    out.push_str(&format!("{INDENT}}};\n"));
}

fn push_struct(out: &mut String, name: &str, members: &[(&str, &str)]) {
    out.push_str(&format!("struct {name}\n{{\n"));
    for (decl, comment) in members {
        let member = format!("{INDENT}{decl}");
        out.push_str(&format!("{member:<COMMENT_COLUMN$}// {comment}\n"));
    }
    out.push_str("};\n\n");
}
