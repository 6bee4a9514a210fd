// src/core/scanner.rs
pub mod utils;


use crate::core::exclude::ExcludePatterns;
use crate::core::scanner::utils::should_exclude;
use crate::error::{Error, Result};
use log::{debug, warn};
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffix used when the caller gives none.
pub const DEFAULT_SUFFIX: &str = ".md";

/// How a directory walk is shaped.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Descend into subdirectories. When false only direct children are seen.
    pub recursive: bool,
    /// Skip dot-files and dot-directories below the root.
    pub skip_hidden: bool,
    pub exclude: ExcludePatterns,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            skip_hidden: false,
            exclude: ExcludePatterns::new(),
        }
    }
}

/// Files named on the command line, or found under one directory argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetGroup {
    /// Directory that relative output paths are computed from.
    pub base: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Normalizes a suffix list to a set of `.ext` strings.
///
/// `md` and `.md` are equivalent. An empty list yields [`DEFAULT_SUFFIX`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for a blank suffix or a bare `.`.
pub fn normalize_suffixes<S: AsRef<str>>(suffixes: &[S]) -> Result<BTreeSet<String>> {
    let mut normalized = BTreeSet::new();
    for suffix in suffixes {
        let suffix = suffix.as_ref().trim();
        let bare = suffix.strip_prefix('.').unwrap_or(suffix);
        if bare.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "suffix '{suffix}' has no extension"
            )));
        }
        normalized.insert(format!(".{bare}"));
    }
    if normalized.is_empty() {
        normalized.insert(DEFAULT_SUFFIX.to_owned());
    }
    Ok(normalized)
}

/// Whether the extension of `path` (with its leading dot) is in `suffixes`.
#[must_use]
pub fn has_suffix(path: &Path, suffixes: &BTreeSet<String>) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            suffixes
                .iter()
                .any(|s| s.strip_prefix('.') == Some(ext))
        })
}

/// Recursively collects every file under `root` whose extension is in `suffixes`.
///
/// The result is sorted and free of duplicates.
///
/// # Errors
///
/// * [`Error::PathNotFound`] if `root` does not exist
/// * [`Error::NotADirectory`] if `root` is not a directory
/// * [`Error::InvalidArgument`] for a malformed suffix
/// * [`Error::Walk`] if a directory below the root cannot be read
pub fn iterdir<S: AsRef<str>>(root: &Path, suffixes: &[S]) -> Result<Vec<PathBuf>> {
    iterdir_with(root, suffixes, &WalkOptions::default())
}

/// [`iterdir`] with explicit recursion, hidden-file and exclusion settings.
///
/// Symlinks are followed. A link that leads back into one of its own ancestors
/// is reported at `warn` and skipped, as is a dangling link.
///
/// # Errors
///
/// Same as [`iterdir`].
pub fn iterdir_with<S: AsRef<str>>(
    root: &Path,
    suffixes: &[S],
    options: &WalkOptions,
) -> Result<Vec<PathBuf>> {
    ensure_directory(root)?;
    let suffixes = normalize_suffixes(suffixes)?;

    let mut walker = WalkDir::new(root).follow_links(true).min_depth(1);
    if !options.recursive {
        walker = walker.max_depth(1);
    }

    let mut files = BTreeSet::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| !should_exclude(e, root, options))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if let Some(ancestor) = err.loop_ancestor() {
                    warn!(
                        "skipping symlink cycle at {} (points back to {})",
                        err.path().map_or_else(|| root.display(), Path::display),
                        ancestor.display()
                    );
                    continue;
                }
                if err
                    .io_error()
                    .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
                {
                    warn!(
                        "skipping dangling entry {}",
                        err.path().map_or_else(|| root.display(), Path::display)
                    );
                    continue;
                }
                let path = err.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                return Err(Error::Walk { path, source: err });
            }
        };

        if entry.file_type().is_file() && has_suffix(entry.path(), &suffixes) {
            files.insert(entry.into_path());
        }
    }

    debug!("found {} file(s) under {}", files.len(), root.display());
    Ok(files.into_iter().collect())
}

/// Resolves command-line arguments into files.
///
/// A directory is expanded with [`iterdir_with`]. A file is taken as given
/// whatever its suffix, so naming a file always processes it. A path listed
/// twice, or reachable from two arguments, is kept only in its first group.
///
/// # Errors
///
/// * [`Error::PathNotFound`] if an argument does not exist
/// * any error from [`iterdir_with`]
pub fn collect_targets<P: AsRef<Path>, S: AsRef<str>>(
    paths: &[P],
    suffixes: &[S],
    options: &WalkOptions,
) -> Result<Vec<TargetGroup>> {
    let mut seen = HashSet::new();
    let mut groups = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let metadata = metadata(path)?;

        let (base, files) = if metadata.is_dir() {
            (path.to_path_buf(), iterdir_with(path, suffixes, options)?)
        } else {
            let base = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            (base, vec![path.to_path_buf()])
        };

        let files: Vec<PathBuf> = files
            .into_iter()
            .filter(|f| seen.insert(f.clone()))
            .collect();
        groups.push(TargetGroup { base, files });
    }

    Ok(groups)
}

fn metadata(path: &Path) -> Result<fs::Metadata> {
    fs::metadata(path).map_err(|source| {
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

fn ensure_directory(root: &Path) -> Result<()> {
    if metadata(root)?.is_dir() {
        Ok(())
    } else {
        Err(Error::NotADirectory {
            path: root.to_path_buf(),
        })
    }
}
