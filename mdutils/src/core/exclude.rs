// src/core/exclude.rs
use crate::error::{Error, Result};
use glob::{MatchOptions, Pattern};
use std::path::Path;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Glob patterns that remove entries from a walk.
///
/// A pattern is tried against the path relative to the walk root and against
/// the bare file name, so `*.tmp.md` works at any depth. A trailing `/`
/// restricts the pattern to directories, which are pruned along with
/// everything below them.
#[derive(Debug, Default, Clone)]
pub struct ExcludePatterns {
    /// (compiled pattern, directories only)
    patterns: Vec<(Pattern, bool)>,
}

impl ExcludePatterns {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Compiles every pattern in `patterns`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for the first pattern with invalid glob syntax.
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut compiled = Self::new();
        for pattern in patterns {
            compiled.add_pattern(pattern.as_ref())?;
        }
        Ok(compiled)
    }

    /// Adds one pattern. Blank lines and `#` comments are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the glob does not compile.
    pub fn add_pattern(&mut self, pattern: &str) -> Result<()> {
        let pattern = pattern.trim();
        if pattern.is_empty() || pattern.starts_with('#') {
            return Ok(());
        }

        let (pattern, dir_only) = pattern
            .strip_suffix('/')
            .map_or((pattern, false), |stripped| (stripped, true));
        let pattern = pattern.strip_prefix("./").unwrap_or(pattern);

        let compiled = Pattern::new(pattern).map_err(|e| {
            Error::InvalidArgument(format!("invalid exclude pattern '{pattern}': {}", e.msg))
        })?;
        self.patterns.push((compiled, dir_only));
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether `relative` (a path below the walk root) is excluded.
    pub fn matches(&self, relative: impl AsRef<Path>, is_dir: bool) -> bool {
        let relative = relative.as_ref();
        let file_name = relative
            .file_name()
            .map(|f| f.to_string_lossy())
            .unwrap_or_default();

        self.patterns.iter().any(|(pattern, dir_only)| {
            if *dir_only && !is_dir {
                return false;
            }
            pattern.matches_path_with(relative, MATCH_OPTIONS)
                || pattern.matches_with(&file_name, MATCH_OPTIONS)
        })
    }
}
