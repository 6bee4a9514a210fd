// src/core/formatting.rs
use crate::core::formatter::Formatter;
use crate::error::Result;
use crate::models::{FileFailure, FileOutcome, FormatReport};
use crate::utils::{read_text, write_text};
use log::{debug, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Where formatted text goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Output {
    /// Overwrite each source file. Files that need no change are not touched.
    #[default]
    InPlace,
    /// Write every file to `dest`, keeping its path relative to `base`.
    Into { base: PathBuf, dest: PathBuf },
    /// Write nothing; only report which files would change.
    Check,
}

#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    pub output: Output,
    /// Save the original text of a changed, questionable file as `<stem>_raw<suffix>`.
    pub keep_raw: bool,
}

/// Result of formatting one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattedFile {
    pub outcome: FileOutcome,
    pub questionable: bool,
}

enum Target<'a> {
    InPlace,
    File(&'a Path),
    DryRun,
}

/// Formats one file, in place when `destination` is `None`.
///
/// A file whose formatted text equals its current text is not rewritten in
/// place. With a destination the output is always written there.
///
/// # Errors
///
/// * [`crate::Error::UnreadableFile`] if `path` cannot be read as UTF-8 text
/// * [`crate::Error::UnwritableFile`] if the output cannot be written
pub fn format_file<F: Formatter + ?Sized>(
    path: &Path,
    formatter: &F,
    destination: Option<&Path>,
) -> Result<FormattedFile> {
    let target = destination.map_or(Target::InPlace, Target::File);
    apply(path, formatter, &target, false)
}

/// Formats every file in `paths`.
///
/// A file that fails is recorded in the report and the rest are still
/// processed. A path that is the raw copy of another path in `paths`
/// (see [`raw_copy_path`]) is left alone.
pub fn format_files<P: AsRef<Path>, F: Formatter + ?Sized>(
    paths: &[P],
    formatter: &F,
    options: &FormatOptions,
) -> FormatReport {
    let mut report = FormatReport::new();
    let raw_copies: HashSet<PathBuf> = paths.iter().map(|p| raw_copy_path(p.as_ref())).collect();

    for path in paths {
        let path = path.as_ref();
        if raw_copies.contains(path) {
            debug!("skipping raw copy {}", path.display());
            continue;
        }
        let destination;
        let target = match &options.output {
            Output::InPlace => Target::InPlace,
            Output::Check => Target::DryRun,
            Output::Into { base, dest } => {
                destination = relocate(path, base, dest);
                Target::File(&destination)
            }
        };

        match apply(path, formatter, &target, options.keep_raw) {
            Ok(formatted) => {
                if formatted.questionable {
                    warn!("ambiguity warning in file '{}'", path.display());
                    report.questionable.push(path.to_path_buf());
                }
                match formatted.outcome {
                    FileOutcome::Changed => report.changed.push(path.to_path_buf()),
                    FileOutcome::Unchanged => {
                        report.unchanged = report.unchanged.saturating_add(1);
                    }
                }
            }
            Err(error) => {
                debug!("{}: {error}", path.display());
                report.failures.push(FileFailure {
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }

    report
}

fn apply<F: Formatter + ?Sized>(
    path: &Path,
    formatter: &F,
    target: &Target<'_>,
    keep_raw: bool,
) -> Result<FormattedFile> {
    let raw = read_text(path)?;
    let formatted = formatter.format(&raw);
    let outcome = if formatted.output == raw {
        FileOutcome::Unchanged
    } else {
        FileOutcome::Changed
    };

    let written = match target {
        Target::DryRun => None,
        Target::InPlace if outcome == FileOutcome::Unchanged => None,
        Target::InPlace => Some(path),
        Target::File(dest) => Some(*dest),
    };

    if let Some(written) = written {
        if keep_raw && formatted.questionable && outcome == FileOutcome::Changed {
            write_text(&raw_copy_path(written), &raw)?;
        }
        write_text(written, &formatted.output)?;
        debug!("formatted {} -> {}", path.display(), written.display());
    }

    Ok(FormattedFile {
        outcome,
        questionable: formatted.questionable,
    })
}

/// `notes/a.md` becomes `notes/a_raw.md`.
#[must_use]
pub fn raw_copy_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = path.extension().map_or_else(
        || format!("{stem}_raw"),
        |ext| format!("{stem}_raw.{}", ext.to_string_lossy()),
    );
    path.with_file_name(name)
}

fn relocate(path: &Path, base: &Path, dest: &Path) -> PathBuf {
    path.strip_prefix(base).map_or_else(
        |_| dest.join(path.file_name().unwrap_or(path.as_os_str())),
        |relative| dest.join(relative),
    )
}
