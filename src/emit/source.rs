//! Definitions artifact.

use crate::compile::Compilation;
use crate::types::{Attribute, BossRecord, Frame, Sequence};

use super::{banner, c_string, EmitOptions, INDENT};

/// Render the definitions source.
pub fn render_source(compilation: &Compilation, options: &EmitOptions) -> String {
    let mut out = banner(&options.notice);

    out.push_str("#include <cstddef>\n");
    for include in &options.includes {
        out.push_str(&format!("#include \"{}\"\n", include));
    }
    out.push_str(&format!("#include \"{}\"\n\n", options.header_name));

    out.push_str("namespace BossData\n{\n");
    for constant in compilation.constants.iter() {
        out.push_str(&format!(
            "{INDENT}constexpr int {} = {};\n",
            constant.name, constant.value
        ));
    }
    out.push_str("}\n\nusing namespace BossData;\n\n");

    out.push_str("bossData_t g_bosses[] = {\n");
    if compilation.records.is_empty() {
        // Zero-length arrays are ill-formed; lookups never read past BOSS_COUNT.
        out.push_str(&format!("{INDENT}{{}},\n"));
    }
    for record in &compilation.records {
        push_record(&mut out, record);
    }
    out.push_str("};\n\n");

    out.push_str("const hitboxFrame_t g_hitboxFrames[] = {\n");
    if compilation.frames.is_empty() {
        out.push_str(&format!("{INDENT}{{}},\n"));
    }
    for frame in compilation.frames.frames() {
        push_frame(&mut out, &frame);
    }
    out.push_str("};\n\n");

    push_lookup(
        &mut out,
        "bossData_t *getBossData(const int type)",
        "BOSS_COUNT",
        "g_bosses[i].type == type",
        "&g_bosses[i]",
    );
    out.push('\n');
    push_lookup(
        &mut out,
        "const hitboxFrame_t *getHitboxFrame(const int id)",
        "HITBOX_FRAME_COUNT",
        "g_hitboxFrames[i].id == id",
        "&g_hitboxFrames[i]",
    );

    out
}

fn push_record(out: &mut String, record: &BossRecord) {
    let field = |out: &mut String, name: &str, value: &str| {
        out.push_str(&format!("{INDENT}{INDENT}.{} = {},\n", name, value));
    };

    out.push_str(&format!("{INDENT}{{\n"));
    field(out, "name", &c_string(&record.name.value));
    for attr in Attribute::ALL {
        if let Some(value) = record.get(attr) {
            field(out, attr.name(), value);
        }
    }
    for seq in Sequence::ALL {
        if let Some(s) = record.sequence(seq) {
            field(out, seq.name(), &format!("{{{}, {}}}", s.base.name, s.length.name));
        }
    }
    if let Some(hitbox) = record.hitbox() {
        field(out, "hitbox", &hitbox.to_string());
    }
    field(out, "sheet", &record.sheet.to_string());
    out.push_str(&format!("{INDENT}}},\n"));
}

fn push_frame(out: &mut String, frame: &Frame) {
    let boxes: Vec<String> = frame.boxes.iter().map(|b| b.to_string()).collect();
    out.push_str(&format!(
        "{INDENT}{{ .id = {}, .count = {}, .boxes = {{ {} }} }},\n",
        frame.id,
        frame.boxes.len(),
        boxes.join(", ")
    ));
}

fn push_lookup(out: &mut String, signature: &str, count: &str, test: &str, found: &str) {
    out.push_str(&format!("{signature}\n{{\n"));
    out.push_str(&format!("{INDENT}for (int i = 0; i < {count}; i++)\n"));
    out.push_str(&format!("{INDENT}{{\n"));
    out.push_str(&format!("{INDENT}{INDENT}if ({test})\n"));
    out.push_str(&format!("{INDENT}{INDENT}{INDENT}return {found};\n"));
    out.push_str(&format!("{INDENT}}}\n"));
    out.push_str(&format!("{INDENT}return nullptr;\n"));
    out.push_str("}\n");
}
