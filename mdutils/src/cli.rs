// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use log::debug;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{Config, load_config};
use crate::core::exclude::ExcludePatterns;
use crate::core::formatter::BuiltinFormatter;
use crate::core::formatting::{FormatOptions, Output, format_files};
use crate::core::scanner::{TargetGroup, WalkOptions, collect_targets};
use crate::core::stats::{StatsOptions, stats_files};
use crate::models::{FileFailure, FormatReport};
use crate::utils::{render_report, render_top_files};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of searching for .mdutils.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List files matching the suffixes
    List {
        #[command(flatten)]
        selection: Selection,

        /// Print only the number of files
        #[arg(short = 'c', long)]
        count: bool,
    },

    /// Rewrite files with a formatter (in place unless --out-dir or --check)
    Format {
        #[command(flatten)]
        selection: Selection,

        /// Formatter to apply [default: markdown]
        #[arg(short = 'F', long, value_enum)]
        formatter: Option<BuiltinFormatter>,

        /// Write formatted copies under this directory instead
        #[arg(long, value_name = "DIR", conflicts_with = "check")]
        out_dir: Option<PathBuf>,

        /// Report files that would change without writing; exits 1 if any would
        #[arg(long)]
        check: bool,

        /// Keep the original of changed files that contain code as <name>_raw.<ext>
        #[arg(long)]
        keep_raw: bool,
    },

    /// Show word counts and text statistics
    Stats {
        #[command(flatten)]
        selection: Selection,

        /// Also print statistics for every file
        #[arg(short, long)]
        details: bool,

        /// Also list the N largest files by word count
        #[arg(short, long, value_name = "N")]
        top: Option<usize>,

        /// Leave YAML frontmatter out of the counts
        #[arg(long)]
        body_only: bool,

        /// Skip files whose frontmatter tags contain this tag (e.g. "draft")
        #[arg(short = 'f', long, value_name = "TAG")]
        filter_out: Option<String>,

        /// Write the report to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Append to the --output file instead of replacing it
        #[arg(long, requires = "output")]
        append: bool,
    },
}

/// Which files a command works on.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct Selection {
    /// Files or directories (defaults to the current directory)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Suffix to include, `.md` or `md` (repeatable or comma-separated) [default: .md]
    #[arg(short, long = "suffix", value_name = "SUFFIX", value_delimiter = ',')]
    pub suffixes: Vec<String>,

    /// Only look at the top level of each directory
    #[arg(long)]
    pub no_recursive: bool,

    /// Skip dot-files and dot-directories
    #[arg(long)]
    pub skip_hidden: bool,

    /// Glob to exclude, relative to the directory or a file name (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,
}

impl Selection {
    fn paths(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.paths.clone()
        }
    }

    fn suffixes<'a>(&'a self, config: &'a Config) -> &'a [String] {
        if self.suffixes.is_empty() {
            &config.suffixes
        } else {
            &self.suffixes
        }
    }

    fn walk_options(&self, config: &Config) -> Result<WalkOptions> {
        let patterns: Vec<&String> = config.exclude.iter().chain(&self.exclude).collect();
        Ok(WalkOptions {
            recursive: config.recursive && !self.no_recursive,
            skip_hidden: config.skip_hidden || self.skip_hidden,
            exclude: ExcludePatterns::from_patterns(&patterns)?,
        })
    }

    fn targets(&self, config: &Config) -> Result<Vec<TargetGroup>> {
        let paths = self.paths();
        let options = self.walk_options(config)?;
        collect_targets(&paths, self.suffixes(config), &options).with_context(|| {
            let shown: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
            format!("Failed to collect files from {}", shown.join(", "))
        })
    }
}

/// Sets up `env_logger`. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

/// Runs one command.
///
/// Returns [`ExitCode::FAILURE`] when any file failed or `format --check`
/// found work to do.
///
/// # Errors
///
/// Fatal problems: a missing path, a bad config file or pattern, or a
/// report file that cannot be written.
pub fn run(args: Args) -> Result<ExitCode> {
    let start = first_path(&args.command);
    let config = load_config(args.config.as_deref(), &start)
        .context("Failed to load configuration")?;
    debug!("configuration: {config:?}");

    match args.command {
        Command::List { selection, count } => list(&selection, &config, count),
        Command::Format {
            selection,
            formatter,
            out_dir,
            check,
            keep_raw,
        } => {
            let formatter = formatter.or(config.formatter).unwrap_or_default();
            format(&selection, &config, formatter, out_dir.as_deref(), check, keep_raw)
        }
        Command::Stats {
            selection,
            details,
            top,
            body_only,
            filter_out,
            output,
            append,
        } => {
            let options = StatsOptions {
                body_only,
                filter_out,
            };
            stats(&selection, &config, &options, details, top, output.as_deref(), append)
        }
    }
}

fn first_path(command: &Command) -> PathBuf {
    let selection = match command {
        Command::List { selection, .. }
        | Command::Format { selection, .. }
        | Command::Stats { selection, .. } => selection,
    };
    selection
        .paths
        .first()
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."))
}

fn list(selection: &Selection, config: &Config, count: bool) -> Result<ExitCode> {
    let files: Vec<PathBuf> = selection
        .targets(config)?
        .into_iter()
        .flat_map(|group| group.files)
        .collect();

    if count {
        println!("{}", files.len());
    } else {
        for file in &files {
            println!("{}", file.display());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn format(
    selection: &Selection,
    config: &Config,
    formatter: BuiltinFormatter,
    out_dir: Option<&Path>,
    check: bool,
    keep_raw: bool,
) -> Result<ExitCode> {
    debug!("formatting with '{}'", formatter.name());
    let mut report = FormatReport::new();

    for group in selection.targets(config)? {
        let output = match out_dir {
            _ if check => Output::Check,
            Some(dest) => Output::Into {
                base: group.base.clone(),
                dest: dest.to_path_buf(),
            },
            None => Output::InPlace,
        };
        let options = FormatOptions { output, keep_raw };
        report.merge(format_files(&group.files, &formatter, &options));
    }

    debug!(
        "{} file(s) processed, {} failed",
        report.processed(),
        report.failures.len()
    );
    let would_change = check && !report.changed.is_empty();
    if check {
        for path in &report.changed {
            println!("would reformat {}", path.display());
        }
        println!(
            "{} file(s) would be reformatted, {} already formatted",
            report.changed.len(),
            report.unchanged
        );
    } else {
        println!(
            "Formatted {} file(s), {} unchanged",
            report.changed.len(),
            report.unchanged
        );
    }

    let failed = report_failures(report.failures);
    Ok(if failed || would_change {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn stats(
    selection: &Selection,
    config: &Config,
    options: &StatsOptions,
    details: bool,
    top: Option<usize>,
    output: Option<&Path>,
    append: bool,
) -> Result<ExitCode> {
    let files: Vec<PathBuf> = selection
        .targets(config)?
        .into_iter()
        .flat_map(|group| group.files)
        .collect();
    let mut report = stats_files(&files, options);

    let mut message = render_report(&report, details);
    if let Some(top) = top {
        message.push_str("\nLARGEST FILES\n");
        message.push_str(&render_top_files(&report, top));
    }

    match output {
        Some(path) => {
            let mut file = OpenOptions::new()
                .create(true)
                .write(true)
                .append(append)
                .truncate(!append)
                .open(path)
                .with_context(|| format!("Failed to open report file {}", path.display()))?;
            file.write_all(message.as_bytes())
                .with_context(|| format!("Failed to write report file {}", path.display()))?;
        }
        None => print!("{message}"),
    }

    let failures = std::mem::take(&mut report.failures);
    Ok(if report_failures(failures) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Prints each failure to stderr. Returns whether there were any.
fn report_failures(failures: Vec<FileFailure>) -> bool {
    if failures.is_empty() {
        return false;
    }
    let count = failures.len();
    for failure in failures {
        eprintln!("error: {:#}", anyhow::Error::new(failure.error));
    }
    eprintln!("{count} file(s) failed");
    true
}
