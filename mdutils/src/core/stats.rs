// src/core/stats.rs
use crate::error::Result;
use crate::models::{FileFailure, StatsReport, TextStats};
use crate::utils::{parse_frontmatter, read_text};
use log::debug;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct StatsOptions {
    /// Leave a valid YAML frontmatter block out of the counts.
    pub body_only: bool,
    /// Skip files whose frontmatter tags include this tag.
    pub filter_out: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Cjk,
    Hiragana,
    Katakana,
    Other,
}

const fn script(ch: char) -> Script {
    match ch {
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{20000}'..='\u{2A6DF}'
        | '\u{2A700}'..='\u{2EBEF}'
        | '\u{30000}'..='\u{3134F}' => Script::Cjk,
        '\u{3040}'..='\u{309F}' => Script::Hiragana,
        '\u{30A0}'..='\u{30FF}' => Script::Katakana,
        _ => Script::Other,
    }
}

/// Counts words, lines and character classes in `text`.
///
/// A word is a maximal run of non-whitespace characters, so markup such as a
/// heading `#` counts. `prose_words` only counts words with at least one
/// alphanumeric character. A paragraph is a maximal run of non-blank lines.
#[must_use]
pub fn count_text(text: &str) -> TextStats {
    let mut stats = TextStats::new();

    for word in text.split_whitespace() {
        stats.words = stats.words.saturating_add(1);
        if word.chars().any(char::is_alphanumeric) {
            stats.prose_words = stats.prose_words.saturating_add(1);
        }
    }

    for ch in text.chars() {
        stats.chars_with_spaces = stats.chars_with_spaces.saturating_add(1);
        if ch.is_whitespace() {
            stats.whitespace = stats.whitespace.saturating_add(1);
            continue;
        }
        stats.chars_no_spaces = stats.chars_no_spaces.saturating_add(1);
        match script(ch) {
            Script::Cjk => stats.cjk = stats.cjk.saturating_add(1),
            Script::Hiragana => stats.hiragana = stats.hiragana.saturating_add(1),
            Script::Katakana => stats.katakana = stats.katakana.saturating_add(1),
            Script::Other => {}
        }
        if !(ch.is_alphanumeric() || ch == '_') {
            stats.punctuation = stats.punctuation.saturating_add(1);
        }
    }

    let mut in_paragraph = false;
    for line in text.lines() {
        stats.lines = stats.lines.saturating_add(1);
        if line.trim().is_empty() {
            in_paragraph = false;
            continue;
        }
        stats.non_blank_lines = stats.non_blank_lines.saturating_add(1);
        if !in_paragraph {
            stats.paragraphs = stats.paragraphs.saturating_add(1);
            in_paragraph = true;
        }
    }

    stats
}

/// Reads `path` and counts it.
///
/// # Errors
///
/// * [`crate::Error::PathNotFound`] if `path` does not exist
/// * [`crate::Error::UnreadableFile`] if it cannot be read as UTF-8 text
pub fn stats_file(path: &Path) -> Result<TextStats> {
    Ok(count_text(&read_text(path)?))
}

/// Counts every file in `paths`, keeping per-file results in input order
/// alongside their total. Unreadable files are recorded and skipped.
pub fn stats_files<P: AsRef<Path>>(paths: &[P], options: &StatsOptions) -> StatsReport {
    let mut report = StatsReport::new();

    for path in paths {
        let path = path.as_ref();
        let content = match read_text(path) {
            Ok(content) => content,
            Err(error) => {
                debug!("{}: {error}", path.display());
                report.failures.push(FileFailure {
                    path: path.to_path_buf(),
                    error,
                });
                continue;
            }
        };

        let frontmatter = parse_frontmatter(&content);

        if let Some(tag) = options.filter_out.as_deref() {
            if frontmatter.as_ref().is_some_and(|(fm, _)| fm.has_tag(tag)) {
                debug!("skipping {} (tagged '{tag}')", path.display());
                continue;
            }
        }

        let text = match frontmatter {
            Some((_, body)) if options.body_only => body,
            _ => content.as_str(),
        };
        report.push(path.to_path_buf(), count_text(text));
    }

    report
}
