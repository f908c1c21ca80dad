//! Section accumulator: the line-level state machine of a definition file.
//!
//! Before the first `[section]` header the accumulator is in the global
//! state, where `private` and `define` directives are accepted. Each header
//! flushes the record being built and starts a new one. `>>>sheet N`
//! switches sprite sheets in either state.

use std::path::PathBuf;

use crate::error::{BossError, Result};
use crate::frames::{Atlas, FrameAllocator, HitboxBinder};
use crate::types::{
    clean_name, parse_int, Attribute, BossRecord, ConstantPool, Define, FrameTable, Sequence,
    DEFAULT_MAX_HITBOXES,
};
use crate::validation::{Diagnostic, ValidationResult};

use super::attributes::{self, LineKind, SequenceSpec};
use super::span::{Span, Spanned};
use super::tokenizer::{tokenize, TokenLine};

/// Sheet switch pragma.
pub const SHEET_PRAGMA: &str = ">>>sheet";

/// Where sequence lines find their hitbox atlases.
pub trait AtlasSource {
    fn load(&self, name: &str) -> Result<Atlas>;
}

/// Loads atlases from files relative to a root directory.
#[derive(Debug, Clone)]
pub struct FsAtlasSource {
    root: PathBuf,
}

impl FsAtlasSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AtlasSource for FsAtlasSource {
    fn load(&self, name: &str) -> Result<Atlas> {
        Atlas::load(&self.root.join(name))
    }
}

/// Numeric settings of the frame and hitbox tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub grid_unit: u32,
    pub sheet_spacer: u32,
    pub max_hitboxes: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            grid_unit: 8,
            sheet_spacer: 1024,
            max_hitboxes: DEFAULT_MAX_HITBOXES,
        }
    }
}

/// Everything accumulated from one definition file.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub records: Vec<BossRecord>,
    pub constants: ConstantPool,
    pub defines: Vec<Define>,
    pub frames: FrameTable,
    pub diagnostics: ValidationResult,
    /// Sheet selected when input ended.
    pub sheet: u32,
    /// Frame cursor when input ended.
    pub cursor: u32,
}

/// Builds boss records one tokenized line at a time.
pub struct SectionAccumulator<S> {
    atlases: S,
    binder: HitboxBinder,
    allocator: FrameAllocator,
    /// Record of the open section; `None` while in the global state.
    current: Option<BossRecord>,
    records: Vec<BossRecord>,
    constants: ConstantPool,
    defines: Vec<Define>,
    frames: FrameTable,
    diagnostics: ValidationResult,
}

impl<S: AtlasSource> SectionAccumulator<S> {
    pub fn new(atlases: S, options: ParseOptions) -> Self {
        Self {
            atlases,
            binder: HitboxBinder::new(options.grid_unit, options.sheet_spacer),
            allocator: FrameAllocator::new(),
            current: None,
            records: Vec::new(),
            constants: ConstantPool::new(),
            defines: Vec::new(),
            frames: FrameTable::new(options.max_hitboxes),
            diagnostics: ValidationResult::new(),
        }
    }

    /// Process one line. Errors are fatal for the whole run.
    pub fn feed(&mut self, line: &TokenLine) -> Result<()> {
        if line.text.starts_with('[') {
            return self.open_section(line);
        }
        if line.head() == SHEET_PRAGMA {
            self.switch_sheet(line);
            return Ok(());
        }

        match self.current.take() {
            Some(mut record) => {
                let outcome = self.apply_attribute(&mut record, line);
                self.current = Some(record);
                outcome
            }
            None => {
                self.global_directive(line);
                Ok(())
            }
        }
    }

    /// Flush the open section and return everything accumulated.
    pub fn finish(mut self) -> ParseOutput {
        self.flush();
        ParseOutput {
            records: self.records,
            constants: self.constants,
            defines: self.defines,
            frames: self.frames,
            diagnostics: self.diagnostics,
            sheet: self.allocator.sheet(),
            cursor: self.allocator.cursor(),
        }
    }

    fn flush(&mut self) {
        if let Some(record) = self.current.take() {
            self.records.push(record);
        }
    }

    fn warn(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn open_section(&mut self, line: &TokenLine) -> Result<()> {
        self.flush();

        let inner = &line.text[1..];
        let name = match inner.strip_suffix(']') {
            Some(name) => name.trim(),
            None => {
                self.warn(
                    Diagnostic::warning(
                        "bossc::parse::unterminated-header",
                        "section header not terminated",
                    )
                    .at_line(line.line)
                    .with_help("Close the header with `]`"),
                );
                inner.trim()
            }
        };

        if name.is_empty() {
            return Err(BossError::Parse {
                line: line.line,
                message: "section header empty".to_string(),
                help: Some("Name the boss between the brackets: `[name]`".to_string()),
            });
        }

        let span = Span::at(line.location(), line.text.chars().count());
        self.current = Some(BossRecord::new(
            Spanned::new(name.to_string(), span),
            self.allocator.sheet(),
        ));
        Ok(())
    }

    fn switch_sheet(&mut self, line: &TokenLine) {
        let sheet = match line.args() {
            [n] => parse_int(&n.value).and_then(|v| u32::try_from(v).ok()),
            _ => None,
        };

        match sheet {
            Some(sheet) => {
                self.allocator.switch_sheet(sheet);
                self.diagnostics.push(
                    Diagnostic::info("bossc::parse::sheet", format!("switched to sheet {}", sheet))
                        .at_line(line.line),
                );
            }
            None => self.warn(
                Diagnostic::warning(
                    "bossc::parse::bad-pragma",
                    format!("malformed sheet pragma `{}`", line.text),
                )
                .at_line(line.line)
                .with_help("Write `>>>sheet N` with a non-negative sheet index"),
            ),
        }
    }

    fn global_directive(&mut self, line: &TokenLine) {
        if line.token_count() != 3 {
            self.warn(
                Diagnostic::warning(
                    "bossc::parse::arity",
                    format!("expecting 3 literals, found {}: {}", line.token_count(), line.text),
                )
                .at_line(line.line),
            );
            return;
        }

        let name = &line.tokens[1].value;
        let value = &line.tokens[2].value;

        match line.head() {
            "private" => match parse_int(value) {
                Some(v) => {
                    self.constants.push(clean_name(name), v);
                }
                None => self.warn(
                    Diagnostic::warning(
                        "bossc::parse::bad-integer",
                        format!("private constant `{}` has non-integer value `{}`", name, value),
                    )
                    .at_line(line.line),
                ),
            },
            "define" => self.defines.push(Define {
                name: name.to_uppercase(),
                value: value.clone(),
            }),
            other => self.warn(
                Diagnostic::warning(
                    "bossc::parse::unknown-operator",
                    format!("unknown operator `{}`", other),
                )
                .at_line(line.line)
                .with_help("Global lines are `private NAME VALUE` or `define NAME VALUE`"),
            ),
        }
    }

    fn apply_attribute(&mut self, record: &mut BossRecord, line: &TokenLine) -> Result<()> {
        let args = line.args();

        match attributes::classify(line.head()) {
            LineKind::Composite(group) => {
                if args.is_empty() {
                    self.warn(
                        Diagnostic::warning(
                            "bossc::parse::arity",
                            format!("`{}` has no values", group),
                        )
                        .at_line(line.line),
                    );
                    return Ok(());
                }
                let (fields, problems) = attributes::parse_composite(group, args);
                for problem in problems {
                    self.warn(problem);
                }
                for (field, value) in fields {
                    self.set_field(record, &field, value);
                }
            }
            LineKind::Hitbox => match attributes::parse_hitbox(line.line, args) {
                Ok(hitbox) => {
                    let span = Span::at(line.location(), line.text.chars().count());
                    if let Some(previous) = record.set_hitbox(Spanned::new(hitbox, span)) {
                        self.duplicate(record, "hitbox", line.line, previous.line());
                    }
                }
                Err(problem) => self.warn(problem),
            },
            LineKind::Sequence(seq) => {
                match attributes::parse_sequence(seq, line.line, args) {
                    Ok(spec) => self.apply_sequence(record, seq, spec, line)?,
                    Err(problem) => self.warn(problem),
                }
            }
            LineKind::Flags => match attributes::parse_flags(args) {
                Some(expr) => {
                    let span = args
                        .iter()
                        .map(|t| t.span)
                        .reduce(Span::merge)
                        .unwrap_or_default();
                    self.set_field(record, Attribute::Flags.name(), Spanned::new(expr, span));
                }
                None => self.warn(
                    Diagnostic::warning("bossc::parse::arity", "`flags` has no values")
                        .at_line(line.line)
                        .with_help("Use `flags 0` for no flags"),
                ),
            },
            LineKind::Scalar(attr) => match args {
                [value] => self.set_field(record, attr.name(), value.clone()),
                _ => self.warn(
                    Diagnostic::warning(
                        "bossc::parse::arity",
                        format!("missing qualifier on line {}: {}", line.line, line.text),
                    )
                    .at_line(line.line)
                    .with_help(format!("`{}` takes exactly one value", attr)),
                ),
            },
            LineKind::Reserved(name) => self.warn(
                Diagnostic::warning(
                    "bossc::parse::reserved-attribute",
                    format!("`{}` is set implicitly and cannot be assigned", name),
                )
                .at_line(line.line),
            ),
            LineKind::Unknown(name) => self.warn(
                Diagnostic::warning(
                    "bossc::parse::unknown-attribute",
                    format!("item name `{}` is unknown", name),
                )
                .at_line(line.line),
            ),
        }

        Ok(())
    }

    /// Store a field by name, routing names outside the schema to the side table.
    fn set_field(&mut self, record: &mut BossRecord, field: &str, value: Spanned<String>) {
        let line = value.line();
        let previous = match Attribute::from_name(field) {
            Some(attr) => record.set(attr, value),
            None => record.set_unknown(field.to_string(), value),
        };
        if let Some(previous) = previous {
            self.duplicate(record, field, line, previous.line());
        }
    }

    fn duplicate(&mut self, record: &BossRecord, field: &str, line: u32, previous: u32) {
        self.warn(
            Diagnostic::warning(
                "bossc::parse::duplicate-field",
                format!(
                    "`{}` of `{}` overrides the value from line {}",
                    field, record.name.value, previous
                ),
            )
            .at_line(line),
        );
    }

    fn apply_sequence(
        &mut self,
        record: &mut BossRecord,
        seq: Sequence,
        spec: SequenceSpec,
        line: &TokenLine,
    ) -> Result<()> {
        let span = Span::at(line.location(), line.text.chars().count());

        let value = match spec {
            SequenceSpec::Alias { target, atlas } => {
                if let Some(atlas) = atlas {
                    self.diagnostics.push(
                        Diagnostic::info(
                            "bossc::parse::alias-atlas",
                            format!("atlas `{}` ignored for alias `@{}`", atlas.value, target.value),
                        )
                        .at_line(line.line),
                    );
                }

                let source = Sequence::from_name(&target.value)
                    .and_then(|s| record.sequence(s))
                    .cloned();
                match source {
                    Some(source) => source,
                    None => {
                        self.warn(
                            Diagnostic::warning(
                                "bossc::parse::bad-alias",
                                format!(
                                    "`{}` aliases `@{}`, which is not a sequence set earlier in `{}`",
                                    seq, target.value, record.name.value
                                ),
                            )
                            .at_line(line.line),
                        );
                        return Ok(());
                    }
                }
            }
            SequenceSpec::Frames { count, atlas } => {
                let aims = aims_of(record, line.line)?;

                if let Some(atlas) = atlas {
                    self.bind_atlas(&atlas);
                }

                self.allocator
                    .allocate(&record.name.value, seq, count, aims, &mut self.constants)
            }
        };

        if let Some(previous) = record.set_sequence(seq, Spanned::new(value, span)) {
            self.duplicate(record, seq.name(), line.line, previous.line());
        }
        Ok(())
    }

    /// Load an atlas and bind it at the current cursor. Failures only warn.
    fn bind_atlas(&mut self, atlas_name: &Spanned<String>) {
        let atlas = match self.atlases.load(&atlas_name.value) {
            Ok(atlas) => atlas,
            Err(e) => {
                self.warn(
                    Diagnostic::warning("bossc::atlas::unreadable", e.to_string())
                        .at_line(atlas_name.line())
                        .with_help("The sequence is kept without hitboxes"),
                );
                return;
            }
        };

        let report = self.binder.bind(
            &atlas,
            self.allocator.sheet(),
            self.allocator.cursor(),
            &mut self.frames,
        );

        let line = atlas_name.line();
        if report.overflowed > 0 {
            self.warn(
                Diagnostic::warning(
                    "bossc::atlas::overflow",
                    format!(
                        "{} box(es) in `{}` dropped: frames hold at most {} hitboxes",
                        report.overflowed,
                        atlas_name.value,
                        self.frames.max_boxes()
                    ),
                )
                .at_line(line),
            );
        }
        if report.rejected > 0 {
            self.warn(
                Diagnostic::warning(
                    "bossc::atlas::rejected",
                    format!(
                        "{} box(es) in `{}` lie outside the sheet columns or have an unknown type",
                        report.rejected, atlas_name.value
                    ),
                )
                .at_line(line),
            );
        }
        if report.placeholders > 0 {
            self.diagnostics.push(
                Diagnostic::info(
                    "bossc::atlas::placeholder",
                    format!(
                        "{} placeholder box(es) in `{}` skipped",
                        report.placeholders, atlas_name.value
                    ),
                )
                .at_line(line),
            );
        }
    }
}

/// The aim multiplier of a record; required before any frames are allocated.
fn aims_of(record: &BossRecord, line: u32) -> Result<u32> {
    let Some(aims) = record.get_spanned(Attribute::Aims) else {
        return Err(BossError::Parse {
            line,
            message: format!(
                "`aims` must be set before the first animation sequence of `{}`",
                record.name.value
            ),
            help: Some("Add an `aims N` line above the sequence lines".to_string()),
        });
    };

    parse_int(&aims.value)
        .and_then(|v| u32::try_from(v).ok())
        .filter(|&v| v > 0)
        .ok_or_else(|| BossError::Parse {
            line: aims.line(),
            message: format!("`aims` must be a positive integer, found `{}`", aims.value),
            help: None,
        })
}

/// Tokenize and accumulate a whole definition text.
pub fn parse_definitions<S: AtlasSource>(
    source: &str,
    atlases: S,
    options: ParseOptions,
) -> Result<ParseOutput> {
    let mut accumulator = SectionAccumulator::new(atlases, options);
    for line in tokenize(source) {
        accumulator.feed(&line)?;
    }
    Ok(accumulator.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory atlases keyed by file name.
    #[derive(Default)]
    struct MemoryAtlases(HashMap<String, String>);

    impl MemoryAtlases {
        fn with(mut self, name: &str, json: &str) -> Self {
            self.0.insert(name.to_string(), json.to_string());
            self
        }
    }

    impl AtlasSource for MemoryAtlases {
        fn load(&self, name: &str) -> Result<Atlas> {
            let content = self.0.get(name).ok_or_else(|| BossError::Io {
                path: PathBuf::from(name),
                message: "not found".to_string(),
            })?;
            Atlas::from_json(content).map_err(|message| BossError::Atlas {
                path: PathBuf::from(name),
                message,
            })
        }
    }

    fn parse(source: &str) -> ParseOutput {
        parse_definitions(source, MemoryAtlases::default(), ParseOptions::default()).unwrap()
    }

    fn codes(output: &ParseOutput) -> Vec<&str> {
        output.diagnostics.iter().map(|d| d.code.as_str()).collect()
    }

    #[test]
    fn test_slug_scenario() {
        let output = parse("[slug]\naims 1\nspeed 4\nhp 50\ntype 2\nmoving 4\nattack 2\n");

        assert_eq!(output.records.len(), 1);
        let slug = &output.records[0];
        assert_eq!(slug.name.value, "slug");
        assert_eq!(slug.get(Attribute::Speed), Some("4"));

        let moving = slug.sequence(Sequence::Moving).unwrap();
        let attack = slug.sequence(Sequence::Attack).unwrap();
        assert_eq!((moving.base.value, moving.length.value), (0, 4));
        assert_eq!((attack.base.value, attack.length.value), (4, 2));
        assert_eq!(output.cursor, 6);
        assert_eq!(output.constants.get("SLUG_MOVING_BASE"), Some(0));
    }

    #[test]
    fn test_records_flush_on_header() {
        let output = parse("[a]\nhp 1\n[b]\nhp 2\n");

        let names: Vec<&str> = output.records.iter().map(|r| r.name.value.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(output.records[0].get(Attribute::Hp), Some("1"));
        assert_eq!(output.records[1].get(Attribute::Hp), Some("2"));
    }

    #[test]
    fn test_header_with_spaces_and_comment() {
        let output = parse("[ big boss ]  # the final one\n");
        assert_eq!(output.records[0].name.value, "big boss");
    }

    #[test]
    fn test_empty_header_is_fatal() {
        let err = parse_definitions("[ ]\n", MemoryAtlases::default(), ParseOptions::default())
            .unwrap_err();
        assert!(matches!(err, BossError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_unterminated_header_is_lenient() {
        let output = parse("[worm\nhp 3\n");

        assert_eq!(output.records[0].name.value, "worm");
        assert_eq!(codes(&output), vec!["bossc::parse::unterminated-header"]);
    }

    #[test]
    fn test_unterminated_empty_header_is_fatal() {
        assert!(parse_definitions("[\n", MemoryAtlases::default(), ParseOptions::default()).is_err());
    }

    #[test]
    fn test_sequence_before_aims_is_fatal() {
        let err = parse_definitions(
            "[slug]\nmoving 4\naims 1\n",
            MemoryAtlases::default(),
            ParseOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, BossError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_zero_aims_is_fatal() {
        let result = parse_definitions(
            "[slug]\naims 0\nmoving 4\n",
            MemoryAtlases::default(),
            ParseOptions::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_sheet_pragma_resets_cursor() {
        let output = parse("[a]\naims 1\nmoving 5\n>>>sheet 1\n[b]\naims 1\nmoving 3\n");

        let b = &output.records[1];
        assert_eq!(output.records[0].sheet, 0);
        assert_eq!(b.sheet, 1);
        assert_eq!(b.sequence(Sequence::Moving).unwrap().base.value, 0);
        assert_eq!(output.cursor, 3);
        assert_eq!(output.sheet, 1);
        assert_eq!(output.diagnostics.with_code("bossc::parse::sheet").count(), 1);
    }

    #[test]
    fn test_malformed_sheet_pragma_warns() {
        let output = parse(">>>sheet\n>>>sheet x\n");
        assert_eq!(
            codes(&output),
            vec!["bossc::parse::bad-pragma", "bossc::parse::bad-pragma"]
        );
        assert_eq!(output.sheet, 0);
    }

    #[test]
    fn test_alias_copies_without_advancing() {
        let output = parse("[a]\naims 2\nmoving 3\nidle @moving\nattack 1\n");

        let a = &output.records[0];
        assert_eq!(a.sequence(Sequence::Idle), a.sequence(Sequence::Moving));
        assert_eq!(a.sequence(Sequence::Attack).unwrap().base.value, 6);
        assert_eq!(output.cursor, 8);
    }

    #[test]
    fn test_alias_is_a_value_copy() {
        let output = parse("[a]\naims 1\nmoving 3\nidle @moving\nmoving 2\n");

        let a = &output.records[0];
        let idle = a.sequence(Sequence::Idle).unwrap();
        let moving = a.sequence(Sequence::Moving).unwrap();
        assert_eq!(idle.length.value, 3);
        assert_eq!(moving.length.value, 2);
        assert_eq!(moving.base.value, 3);
    }

    #[test]
    fn test_alias_to_unset_sequence_warns() {
        let output = parse("[a]\naims 1\nidle @death\n");

        assert!(output.records[0].sequence(Sequence::Idle).is_none());
        assert_eq!(codes(&output), vec!["bossc::parse::bad-alias"]);
    }

    #[test]
    fn test_alias_with_atlas_is_informational() {
        let output = parse("[a]\naims 1\nmoving 2\nidle @moving walk.json\n");
        assert_eq!(codes(&output), vec!["bossc::parse::alias-atlas"]);
        assert!(output.diagnostics.is_ok());
    }

    #[test]
    fn test_alias_does_not_cross_records() {
        let output = parse("[a]\naims 1\nmoving 2\n[b]\naims 1\nidle @moving\n");
        assert!(output.records[1].sequence(Sequence::Idle).is_none());
    }

    #[test]
    fn test_global_directives() {
        let output = parse("private max_hp 100\ndefine boss_flag_x 0x4\nfrobnicate a b\n");

        assert_eq!(output.constants.get("MAX_HP"), Some(100));
        assert_eq!(
            output.defines,
            vec![Define {
                name: "BOSS_FLAG_X".to_string(),
                value: "0x4".to_string(),
            }]
        );
        assert_eq!(codes(&output), vec!["bossc::parse::unknown-operator"]);
    }

    #[test]
    fn test_global_wrong_arity_warns() {
        let output = parse("private X\n");
        assert_eq!(codes(&output), vec!["bossc::parse::arity"]);
        assert!(output.constants.is_empty());
    }

    #[test]
    fn test_composite_line_fields() {
        let output = parse("[a]\nbullet type=3 speed=2 9\n");

        let a = &output.records[0];
        assert_eq!(a.field("bullet_type"), Some("3"));
        assert_eq!(a.get(Attribute::BulletSpeed), Some("2"));
        assert_eq!(a.get(Attribute::Bullet), Some("9"));
    }

    #[test]
    fn test_flags_expression() {
        let output = parse("[a]\nflags FLAG_A,FLAG_B\n");
        assert_eq!(output.records[0].get(Attribute::Flags), Some("FLAG_A | FLAG_B"));
    }

    #[test]
    fn test_duplicate_field_last_write_wins() {
        let output = parse("[a]\nhp 1\nhp 2\n");

        assert_eq!(output.records[0].get(Attribute::Hp), Some("2"));
        let dup: Vec<&Diagnostic> = output
            .diagnostics
            .with_code("bossc::parse::duplicate-field")
            .collect();
        assert_eq!(dup.len(), 1);
        assert_eq!(dup[0].line, Some(3));
        assert!(dup[0].message.contains("line 2"));
    }

    #[test]
    fn test_unknown_and_reserved_attributes() {
        let output = parse("[a]\nhpp 3\nsheet 2\nscore\n");

        assert_eq!(
            codes(&output),
            vec![
                "bossc::parse::unknown-attribute",
                "bossc::parse::reserved-attribute",
                "bossc::parse::arity",
            ]
        );
        assert_eq!(output.records[0].sheet, 0);
    }

    #[test]
    fn test_hitbox_line() {
        let output = parse("[a]\nhitbox 0 0 32\nhitbox 4 8 24 24\n");

        let hitbox = output.records[0].hitbox().unwrap();
        assert_eq!(hitbox.to_string(), "{4, 8, 24, 24, 0}");
        assert_eq!(codes(&output), vec!["bossc::parse::arity"]);
    }

    #[test]
    fn test_atlas_binds_at_sequence_base() {
        let atlases = MemoryAtlases::default().with(
            "attack.json",
            r#"{ "frame": { "width": 32, "height": 32, "cols": 4 },
                 "hitboxes": [ { "x": 40, "y": 0, "w": 8, "h": 8, "type": 1 } ] }"#,
        );
        let output = parse_definitions(
            ">>>sheet 2\n[a]\naims 1\nmoving 4\nattack 2 attack.json\n",
            atlases,
            ParseOptions::default(),
        )
        .unwrap();

        // sheet 2, attack base 4, sprite 1
        let boxes = output.frames.get(2 * 1024 + 4 + 1).unwrap();
        assert_eq!(boxes.len(), 1);
        assert_eq!((boxes[0].x, boxes[0].y, boxes[0].width, boxes[0].height), (1, 0, 1, 1));
    }

    #[test]
    fn test_missing_atlas_is_not_fatal() {
        let output = parse("[a]\naims 1\nmoving 4 nowhere.json\n");

        assert!(output.frames.is_empty());
        assert!(output.records[0].sequence(Sequence::Moving).is_some());
        assert_eq!(codes(&output), vec!["bossc::atlas::unreadable"]);
    }

    #[test]
    fn test_atlas_overflow_warns() {
        let boxes: Vec<String> = (0..5)
            .map(|i| format!(r#"{{ "x": {}, "y": 0, "w": 8, "h": 8, "type": 1 }}"#, i))
            .collect();
        let json = format!(
            r#"{{ "frame": {{ "width": 32, "height": 32, "cols": 1 }}, "hitboxes": [{}] }}"#,
            boxes.join(",")
        );
        let atlases = MemoryAtlases::default().with("crowded.json", &json);

        let output = parse_definitions(
            "[a]\naims 1\nmoving 1 crowded.json\n",
            atlases,
            ParseOptions::default(),
        )
        .unwrap();

        assert_eq!(output.frames.get(0).map(|b| b.len()), Some(4));
        assert_eq!(codes(&output), vec!["bossc::atlas::overflow"]);
    }
}
