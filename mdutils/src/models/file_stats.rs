// src/models/file_stats.rs
use super::{FileFailure, TextStats};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStats {
    pub path: PathBuf,
    pub stats: TextStats,
}

/// Per-file counts in input order, their sum, and the files that could not be read.
#[derive(Debug, Default)]
pub struct StatsReport {
    pub files: Vec<FileStats>,
    pub total: TextStats,
    pub failures: Vec<FileFailure>,
}

impl StatsReport {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files: Vec::new(),
            total: TextStats::new(),
            failures: Vec::new(),
        }
    }

    pub fn push(&mut self, path: PathBuf, stats: TextStats) {
        self.total += stats;
        self.files.push(FileStats { path, stats });
    }

    /// Looks up the counts recorded for `path`.
    #[must_use]
    pub fn get(&self, path: &std::path::Path) -> Option<&TextStats> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| &f.stats)
    }

    /// Files ordered by word count, largest first.
    #[must_use]
    pub fn largest(&self, top: usize) -> Vec<&FileStats> {
        let mut files: Vec<&FileStats> = self.files.iter().collect();
        files.sort_by(|a, b| b.stats.words.cmp(&a.stats.words));
        files.truncate(top);
        files
    }
}
