// tests/integration_tests/formatting_test.rs
use super::common::{create_test_file, relative_names, setup_test_directory};
use anyhow::Result;
use mdutils::{
    BuiltinFormatter, ExcludePatterns, FileOutcome, FormatOptions, Output, WalkOptions,
    collect_targets, format_file, format_files, format_markdown, iterdir_with,
};
use std::fs;
use tempfile::TempDir;

fn visible_notes() -> Result<WalkOptions> {
    Ok(WalkOptions {
        skip_hidden: true,
        exclude: ExcludePatterns::from_patterns(&["drafts/"])?,
        ..WalkOptions::default()
    })
}

#[test]
fn test_format_tree_in_place() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let root = temp_dir.path();
    let files = iterdir_with(root, &[".md"], &visible_notes()?)?;

    let report = format_files(&files, &BuiltinFormatter::Markdown, &FormatOptions::default());

    assert!(report.failures.is_empty());
    assert_eq!(
        relative_names(root, &report.changed),
        vec!["guides/code.md", "guides/setup.md", "intro.md"]
    );
    assert_eq!(report.unchanged, 2);
    assert_eq!(relative_names(root, &report.questionable), vec!["guides/code.md"]);

    assert_eq!(
        fs::read_to_string(root.join("intro.md"))?,
        "# Intro\n\nWelcome to the notes.\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("guides/setup.md"))?,
        "##Setup\nSay “hello” to everyone.\n"
    );
    assert_eq!(fs::read_to_string(root.join("drafts/idea.md"))?, "Half an idea");
    Ok(())
}

#[test]
fn test_second_pass_changes_nothing() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let files = iterdir_with(temp_dir.path(), &[".md"], &visible_notes()?)?;
    let options = FormatOptions::default();

    format_files(&files, &BuiltinFormatter::Markdown, &options);
    let second = format_files(&files, &BuiltinFormatter::Markdown, &options);

    assert!(second.changed.is_empty());
    assert_eq!(second.unchanged, files.len());
    Ok(())
}

#[test]
fn test_format_into_output_directory() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let root = temp_dir.path();
    let out = TempDir::new()?;

    let groups = collect_targets(&[root.join("guides")], &[".md"], &WalkOptions::default())?;
    for group in groups {
        let options = FormatOptions {
            output: Output::Into {
                base: group.base.clone(),
                dest: out.path().to_path_buf(),
            },
            keep_raw: false,
        };
        let report = format_files(&group.files, &BuiltinFormatter::Markdown, &options);
        assert!(report.is_clean());
    }

    assert_eq!(fs::read_to_string(out.path().join("code.md"))?, "Run `make` first.\n");
    assert_eq!(
        fs::read_to_string(root.join("guides/code.md"))?,
        "Run `make` first.   \n",
        "Sources are untouched"
    );
    Ok(())
}

#[test]
fn test_keep_raw_copy_next_to_output() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let root = temp_dir.path();

    let options = FormatOptions {
        keep_raw: true,
        ..FormatOptions::default()
    };
    format_files(
        &[root.join("guides/code.md"), root.join("intro.md")],
        &BuiltinFormatter::Markdown,
        &options,
    );

    assert_eq!(
        fs::read_to_string(root.join("guides/code_raw.md"))?,
        "Run `make` first.   \n"
    );
    assert!(
        !root.join("intro_raw.md").exists(),
        "Files without code get no raw copy"
    );
    Ok(())
}

#[test]
fn test_builtin_formatters_differ() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let raw = "# Title  \n\n\n\nbody   ";
    let whitespace = create_test_file(temp_dir.path(), "w.md", raw)?;
    let blank_lines = create_test_file(temp_dir.path(), "b.md", raw)?;

    format_file(&whitespace, &BuiltinFormatter::Whitespace, None)?;
    format_file(&blank_lines, &BuiltinFormatter::BlankLines, None)?;

    assert_eq!(fs::read_to_string(&whitespace)?, "# Title\n\n\n\nbody\n");
    assert_eq!(fs::read_to_string(&blank_lines)?, "# Title  \n\nbody   ");
    Ok(())
}

#[test]
fn test_custom_formatter_closure() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(temp_dir.path(), "a.md", "hello\n")?;
    let shout = |raw: &str| format_markdown(raw).to_uppercase();

    let formatted = format_file(&path, &shout, None)?;

    assert_eq!(formatted.outcome, FileOutcome::Changed);
    assert_eq!(fs::read_to_string(&path)?, "HELLO\n");
    Ok(())
}
