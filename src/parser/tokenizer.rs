//! Line tokenizer for boss definition files.
//!
//! Each physical line has its `#` comment stripped (`\#` yields a literal
//! `#`), is trimmed, and is split on whitespace runs. Blank lines are
//! skipped but line numbers keep counting so diagnostics point at the
//! original source.

use std::iter::Enumerate;
use std::str::Lines;

use super::span::{Location, Span, Spanned};

/// Comment marker.
pub const COMMENT: char = '#';

/// A non-blank, comment-stripped source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLine {
    /// Line number (1-indexed)
    pub line: u32,
    /// Stripped and trimmed line content
    pub text: String,
    /// Whitespace separated tokens, each with its source span
    pub tokens: Vec<Spanned<String>>,
}

impl TokenLine {
    /// The first token (never absent: blank lines are not produced).
    pub fn head(&self) -> &str {
        self.tokens.first().map(|t| t.value.as_str()).unwrap_or("")
    }

    /// Every token after the first.
    pub fn args(&self) -> &[Spanned<String>] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    /// Number of tokens, head included.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Location of the start of the line content.
    pub fn location(&self) -> Location {
        self.tokens
            .first()
            .map(|t| t.span.start)
            .unwrap_or_else(|| Location::line(self.line))
    }
}

/// Lazy iterator over the tokenized lines of a source text.
///
/// Cloning the iterator restarts from the clone point.
#[derive(Debug, Clone)]
pub struct TokenLines<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl Iterator for TokenLines<'_> {
    type Item = TokenLine;

    fn next(&mut self) -> Option<TokenLine> {
        for (index, raw) in self.lines.by_ref() {
            let line = index as u32 + 1;
            if let Some(tokenized) = tokenize_line(line, raw) {
                return Some(tokenized);
            }
        }
        None
    }
}

/// Tokenize a whole source text.
pub fn tokenize(source: &str) -> TokenLines<'_> {
    TokenLines {
        lines: source.lines().enumerate(),
    }
}

/// Tokenize a single physical line. Returns `None` for blank lines.
pub fn tokenize_line(line: u32, raw: &str) -> Option<TokenLine> {
    let content = strip_comment(raw);

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut start = 0;

    for &(column, c) in &content {
        if c.is_whitespace() {
            if !current.is_empty() {
                tokens.push(make_token(line, start, std::mem::take(&mut current)));
            }
            continue;
        }
        if current.is_empty() {
            start = column;
        }
        current.push(c);
    }
    if !current.is_empty() {
        tokens.push(make_token(line, start, current));
    }

    if tokens.is_empty() {
        return None;
    }

    let text: String = content.iter().map(|&(_, c)| c).collect();
    Some(TokenLine {
        line,
        text: text.trim().to_string(),
        tokens,
    })
}

fn make_token(line: u32, column: u32, text: String) -> Spanned<String> {
    let span = Span::at(Location::new(line, column), text.chars().count());
    Spanned::new(text, span)
}

/// Drop everything from the first unescaped comment marker onward.
///
/// Returns the surviving characters paired with their 1-based source column.
fn strip_comment(raw: &str) -> Vec<(u32, char)> {
    let mut out = Vec::with_capacity(raw.len());
    let mut chars = raw.chars().enumerate().peekable();

    while let Some((index, c)) = chars.next() {
        let column = index as u32 + 1;
        match c {
            '\\' if matches!(chars.peek(), Some(&(_, COMMENT))) => {
                chars.next();
                out.push((column, COMMENT));
            }
            COMMENT => break,
            _ => out.push((column, c)),
        }
    }

    out
}
