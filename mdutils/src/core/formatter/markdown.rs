// src/core/formatter/markdown.rs
use super::rules::{finish_document, has_code, normalize_heading, normalize_newlines, space_quotes};
use super::{Formatted, Formatter};

/// The default formatter.
///
/// Rules, in order:
///
/// 1. Line endings become `\n`.
/// 2. The document is trimmed and ends with exactly one newline (blank stays empty).
/// 3. Trailing whitespace is removed from every line.
/// 4. Heading markers get exactly one following space.
/// 5. Words and adjacent curly quotes are separated by one space.
/// 6. Runs of blank lines collapse to one.
///
/// Rules 4 and 5 skip fenced code blocks and a leading YAML frontmatter
/// block; rule 6 skips fenced code. Applying the formatter twice gives the
/// same result as applying it once.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Body,
    Frontmatter,
    /// Fence character and the length of the opening run.
    Fence(char, usize),
}

impl Formatter for MarkdownFormatter {
    fn format(&self, raw: &str) -> Formatted {
        Formatted {
            output: format_markdown(raw),
            questionable: has_code(raw),
        }
    }
}

#[must_use]
pub fn format_markdown(raw: &str) -> String {
    let text = normalize_newlines(raw);
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut block = Block::Body;
    let mut previous_blank = false;

    for (index, line) in text.split('\n').enumerate() {
        let line = line.trim_end();

        match block {
            Block::Frontmatter => {
                if line.is_empty() {
                    if !previous_blank {
                        lines.push(String::new());
                    }
                    previous_blank = true;
                    continue;
                }
                previous_blank = false;
                if line == "---" || line == "..." {
                    block = Block::Body;
                }
                lines.push(line.to_owned());
            }
            Block::Fence(marker, length) => {
                if closes_fence(line, marker, length) {
                    block = Block::Body;
                }
                lines.push(line.to_owned());
            }
            Block::Body => {
                if index == 0 && line == "---" {
                    block = Block::Frontmatter;
                    lines.push(line.to_owned());
                    continue;
                }
                if let Some((marker, length)) = fence_run(line) {
                    block = Block::Fence(marker, length);
                    previous_blank = false;
                    lines.push(line.to_owned());
                    continue;
                }
                if line.is_empty() {
                    if !previous_blank {
                        lines.push(String::new());
                    }
                    previous_blank = true;
                    continue;
                }
                previous_blank = false;
                let line = normalize_heading(line);
                lines.push(space_quotes(&line).into_owned());
            }
        }
    }

    finish_document(&lines.join("\n"))
}

/// An opening fence: up to three spaces, then three or more backticks or
/// tildes. A backtick fence cannot have a backtick in its info string.
fn fence_run(line: &str) -> Option<(char, usize)> {
    let trimmed = fence_indent(line)?;
    let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let length = trimmed.chars().take_while(|c| *c == marker).count();
    let info = trimmed.get(length..).unwrap_or_default();
    if length < 3 || (marker == '`' && info.contains('`')) {
        return None;
    }
    Some((marker, length))
}

fn closes_fence(line: &str, marker: char, length: usize) -> bool {
    fence_indent(line).map(str::trim_end).is_some_and(|run| {
        run.chars().all(|c| c == marker) && run.chars().count() >= length
    })
}

/// The line without its indentation, or `None` when indented as a code block.
fn fence_indent(line: &str) -> Option<&str> {
    let trimmed = line.trim_start_matches(' ');
    (line.len().saturating_sub(trimmed.len()) <= 3).then_some(trimmed)
}
