// src/utils.rs
use crate::error::{Error, Result};
use crate::models::{Frontmatter, StatsReport, TextStats};
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

/// Separator between report sections.
pub const SEP: &str = "\n----------------------------------------\n";

const LABEL_WIDTH: usize = 32;

/// Reads a whole file as UTF-8.
///
/// # Errors
///
/// [`Error::PathNotFound`] when the file is missing, otherwise
/// [`Error::UnreadableFile`].
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            Error::PathNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::UnreadableFile {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Writes `text` to `path`, creating missing parent directories.
///
/// # Errors
///
/// [`Error::UnwritableFile`] if a directory or the file cannot be written.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    let unwritable = |source| Error::UnwritableFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(unwritable)?;
    }
    fs::write(path, text).map_err(unwritable)
}

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

/// Splits a leading `---` delimited block from the rest of the document.
///
/// Returns `(yaml, body)`, or `None` if the document does not open with a
/// delimiter line or the block is never closed.
#[must_use]
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;

    let mut offset: usize = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let body_start = offset.saturating_add(line.len());
            return Some((rest.get(..offset)?, rest.get(body_start..)?));
        }
        offset = offset.saturating_add(line.len());
    }
    None
}

/// Parses the frontmatter block, returning it with the body that follows.
///
/// A block that is not valid YAML for [`Frontmatter`] is treated as absent.
#[must_use]
pub fn parse_frontmatter(content: &str) -> Option<(Frontmatter, &str)> {
    let (yaml, body) = split_frontmatter(content)?;
    if yaml.trim().is_empty() {
        return Some((Frontmatter::default(), body));
    }
    serde_yaml_ng::from_str(yaml)
        .ok()
        .map(|frontmatter| (frontmatter, body))
}

/// One `label value` line per counter, labels padded to a fixed column.
#[must_use]
pub fn render_stats(stats: &TextStats) -> String {
    let mut out = String::new();
    for row in stats.rows() {
        match row {
            Some((label, value)) => {
                let _ = writeln!(out, "{label:<LABEL_WIDTH$}{value}");
            }
            None => out.push('\n'),
        }
    }
    out.truncate(out.trim_end().len());
    out
}

/// The full statistics report: file count and totals, then optionally each file.
#[must_use]
pub fn render_report(report: &StatsReport, details: bool) -> String {
    let mut message = format!(
        "STATISTICS{SEP}{:<LABEL_WIDTH$}{}\n\n{}\n",
        "Files:",
        report.files.len(),
        render_stats(&report.total)
    );

    if details && !report.files.is_empty() {
        let sections: Vec<String> = report
            .files
            .iter()
            .map(|file| format!("File Name: {}\n\n{}", file.path.display(), render_stats(&file.stats)))
            .collect();
        let _ = write!(message, "\n\nDETAILS{SEP}{}\n", sections.join(SEP));
    }

    message
}

/// The `top` largest files by word count, one per line.
#[must_use]
pub fn render_top_files(report: &StatsReport, top: usize) -> String {
    let mut out = String::new();
    for file in report.largest(top) {
        let _ = writeln!(out, "{:8} words  {}", file.stats.words, file.path.display());
    }
    out
}
