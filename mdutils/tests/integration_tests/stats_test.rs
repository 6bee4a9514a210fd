// tests/integration_tests/stats_test.rs
use super::common::{relative_names, setup_test_directory};
use anyhow::Result;
use mdutils::utils::{render_report, render_top_files};
use mdutils::{ExcludePatterns, StatsOptions, WalkOptions, iterdir, iterdir_with, stats_files};
use std::path::PathBuf;

#[test]
fn test_stats_for_whole_tree() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let files = iterdir(temp_dir.path(), &[".md"])?;

    let report = stats_files(&files, &StatsOptions::default());

    assert_eq!(report.files.len(), 7);
    assert_eq!(report.total.words, 30);
    assert_eq!(report.get(&temp_dir.path().join("intro.md")).map(|s| s.words), Some(6));
    assert_eq!(
        report.get(&temp_dir.path().join("tagged.md")).map(|s| s.words),
        Some(8)
    );
    Ok(())
}

#[test]
fn test_total_is_sum_of_files() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let files = iterdir(temp_dir.path(), &["md", "txt"])?;

    let report = stats_files(&files, &StatsOptions::default());

    let words: u64 = report.files.iter().map(|f| f.stats.words).sum();
    let lines: u64 = report.files.iter().map(|f| f.stats.lines).sum();
    assert_eq!(report.total.words, words);
    assert_eq!(report.total.lines, lines);
    Ok(())
}

#[test]
fn test_filter_out_and_body_only() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let options = WalkOptions {
        skip_hidden: true,
        exclude: ExcludePatterns::from_patterns(&["drafts/"])?,
        ..WalkOptions::default()
    };
    let files = iterdir_with(temp_dir.path(), &[".md"], &options)?;

    let everything = stats_files(&files, &StatsOptions::default());
    assert_eq!(everything.total.words, 26);

    let body_only = stats_files(
        &files,
        &StatsOptions {
            body_only: true,
            ..StatsOptions::default()
        },
    );
    assert_eq!(body_only.total.words, 22);

    let without_drafts = stats_files(
        &files,
        &StatsOptions {
            filter_out: Some(String::from("draft")),
            ..StatsOptions::default()
        },
    );
    assert_eq!(without_drafts.total.words, 18);
    let counted: Vec<PathBuf> = without_drafts.files.iter().map(|f| f.path.clone()).collect();
    assert!(!relative_names(temp_dir.path(), &counted).contains(&String::from("tagged.md")));
    Ok(())
}

#[test]
fn test_report_rendering() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let files = iterdir(temp_dir.path(), &[".md"])?;
    let report = stats_files(&files, &StatsOptions::default());

    let summary = render_report(&report, false);
    assert!(summary.contains(&format!("{:<32}{}", "Files:", 7)));
    assert!(summary.contains(&format!("{:<32}{}", "Words:", 30)));

    let detailed = render_report(&report, true);
    assert_eq!(detailed.matches("File Name: ").count(), 7);

    let top = render_top_files(&report, 2);
    let lines: Vec<&str> = top.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("tagged.md"));
    assert!(lines[1].ends_with("intro.md"));
    Ok(())
}
