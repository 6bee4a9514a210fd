// src/models.rs
mod file_stats;
mod format_report;
mod frontmatter;
mod text_stats;

pub use file_stats::{FileStats, StatsReport};
pub use format_report::{FileFailure, FileOutcome, FormatReport};
pub use frontmatter::Frontmatter;
pub use text_stats::TextStats;
