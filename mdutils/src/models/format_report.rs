// src/models/format_report.rs
use crate::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Output differed from the input (and was written unless checking).
    Changed,
    Unchanged,
}

/// A file that failed and the reason, kept so a batch can carry on.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: Error,
}

#[derive(Debug, Default)]
pub struct FormatReport {
    pub changed: Vec<PathBuf>,
    pub unchanged: usize,
    pub questionable: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

impl FormatReport {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            changed: Vec::new(),
            unchanged: 0,
            questionable: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn merge(&mut self, other: Self) {
        self.changed.extend(other.changed);
        self.unchanged = self.unchanged.saturating_add(other.unchanged);
        self.questionable.extend(other.questionable);
        self.failures.extend(other.failures);
    }

    #[must_use]
    pub fn processed(&self) -> usize {
        self.changed.len().saturating_add(self.unchanged)
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
