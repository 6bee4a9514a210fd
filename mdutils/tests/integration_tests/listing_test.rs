// tests/integration_tests/listing_test.rs
use super::common::{create_test_file, relative_names, setup_test_directory};
use anyhow::Result;
use mdutils::{Error, ExcludePatterns, WalkOptions, collect_targets, iterdir, iterdir_with};

#[test]
fn test_iterdir_finds_markdown_recursively() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let files = iterdir(temp_dir.path(), &[".md"])?;

    assert_eq!(
        relative_names(temp_dir.path(), &files),
        vec![
            ".obsidian/cache.md",
            "clean.md",
            "drafts/idea.md",
            "guides/code.md",
            "guides/setup.md",
            "intro.md",
            "tagged.md",
        ]
    );
    Ok(())
}

#[test]
fn test_empty_suffix_list_means_markdown() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let none: [&str; 0] = [];
    assert_eq!(
        iterdir(temp_dir.path(), &none)?,
        iterdir(temp_dir.path(), &[".md"])?
    );
    Ok(())
}

#[test]
fn test_suffix_without_dot_and_multiple_suffixes() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let text = iterdir(temp_dir.path(), &["txt"])?;
    assert_eq!(relative_names(temp_dir.path(), &text), vec!["readme.txt"]);

    let both = iterdir(temp_dir.path(), &["md", ".txt"])?;
    assert_eq!(both.len(), 8);
    Ok(())
}

#[test]
fn test_iterdir_result_is_sorted_and_unique() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let files = iterdir(temp_dir.path(), &["md", ".md"])?;

    let mut sorted = files.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(files, sorted);
    Ok(())
}

#[test]
fn test_walk_options_shape_the_walk() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let top_level = WalkOptions {
        recursive: false,
        skip_hidden: true,
        exclude: ExcludePatterns::new(),
    };
    let files = iterdir_with(temp_dir.path(), &[".md"], &top_level)?;
    assert_eq!(
        relative_names(temp_dir.path(), &files),
        vec!["clean.md", "intro.md", "tagged.md"]
    );

    let pruned = WalkOptions {
        skip_hidden: true,
        exclude: ExcludePatterns::from_patterns(&["drafts/", "guides/code.md"])?,
        ..WalkOptions::default()
    };
    let files = iterdir_with(temp_dir.path(), &[".md"], &pruned)?;
    assert_eq!(
        relative_names(temp_dir.path(), &files),
        vec!["clean.md", "guides/setup.md", "intro.md", "tagged.md"]
    );
    Ok(())
}

#[test]
fn test_missing_directory_is_an_error() {
    let err = iterdir(std::path::Path::new("/no/such/notes"), &[".md"]).unwrap_err();
    assert!(matches!(err, Error::PathNotFound { .. }));
    assert!(err.to_string().contains("/no/such/notes"));
}

#[test]
fn test_collect_targets_mixes_files_and_directories() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let root = temp_dir.path();
    let extra = create_test_file(root, "notes.markdown", "kept because it was named")?;

    let groups = collect_targets(
        &[root.join("guides"), extra.clone(), root.join("guides/setup.md")],
        &[".md"],
        &WalkOptions::default(),
    )?;

    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].base, root.join("guides"));
    assert_eq!(
        relative_names(root, &groups[0].files),
        vec!["guides/code.md", "guides/setup.md"]
    );
    assert_eq!(groups[1].files, vec![extra]);
    assert!(groups[2].files.is_empty(), "Duplicates are only kept once");
    Ok(())
}
