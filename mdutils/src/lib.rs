//! Markdown housekeeping: find files by suffix, normalize their formatting
//! and report text statistics.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, Command, Selection, init_logging, run};
pub use crate::config::{Config, load_config};
pub use crate::core::exclude::ExcludePatterns;
pub use crate::core::formatter::markdown::format_markdown;
pub use crate::core::formatter::{BuiltinFormatter, Formatted, Formatter};
pub use crate::core::formatting::{FormatOptions, FormattedFile, Output, format_file, format_files};
pub use crate::core::scanner::{TargetGroup, WalkOptions, collect_targets, iterdir, iterdir_with};
pub use crate::core::stats::{StatsOptions, count_text, stats_file, stats_files};
pub use crate::error::{Error, Result};
pub use crate::models::{FileOutcome, FormatReport, StatsReport, TextStats};
