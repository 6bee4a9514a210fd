// src/core/formatter/rules.rs
//! Single normalization steps shared by the built-in formatters.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})[ \t]+").expect("valid heading regex"));
static OPEN_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w)(?: {2,})?\u{201C}").expect("valid quote regex"));
static CLOSE_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\u{201D}(?: {2,})?(\w)").expect("valid quote regex"));
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid newline regex"));

/// `\r\n` and lone `\r` become `\n`.
#[must_use]
pub fn normalize_newlines(raw: &str) -> Cow<'_, str> {
    if raw.contains('\r') {
        Cow::Owned(raw.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Trims the document and ends it with a single newline. Blank input stays empty.
#[must_use]
pub fn finish_document(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(trimmed.len().saturating_add(1));
    out.push_str(trimmed);
    out.push('\n');
    out
}

/// Exactly one space between an ATX heading marker and its text.
#[must_use]
pub fn normalize_heading(line: &str) -> Cow<'_, str> {
    HEADING.replace(line, "$1 ")
}

/// One space between a word and an adjacent curly quote.
#[must_use]
pub fn space_quotes(line: &str) -> Cow<'_, str> {
    match OPEN_QUOTE.replace_all(line, "$1 \u{201C}") {
        Cow::Borrowed(_) => CLOSE_QUOTE.replace_all(line, "\u{201D} $1"),
        Cow::Owned(spaced) => Cow::Owned(
            CLOSE_QUOTE
                .replace_all(&spaced, "\u{201D} $1")
                .into_owned(),
        ),
    }
}

/// Line endings normalized, trailing whitespace stripped from every line,
/// document trimmed.
#[must_use]
pub fn strip_whitespace(raw: &str) -> String {
    let text = normalize_newlines(raw);
    let stripped: Vec<&str> = text.split('\n').map(str::trim_end).collect();
    finish_document(&stripped.join("\n"))
}

/// Three or more consecutive newlines become two. Nothing else changes
/// apart from line endings.
#[must_use]
pub fn collapse_newlines(raw: &str) -> String {
    let text = normalize_newlines(raw);
    BLANK_RUN.replace_all(&text, "\n\n").into_owned()
}

/// Inline code (two backticks on one line) or a backtick or tilde fence.
#[must_use]
pub fn has_code(raw: &str) -> bool {
    raw.lines()
        .any(|line| line.matches('`').count() >= 2 || line.trim_start().starts_with("~~~"))
}
