// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

/// A small notes tree with markdown, other text, hidden files and drafts.
pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    create_test_file(root, "intro.md", "# Intro  \n\n\n\nWelcome to the notes.")?;
    create_test_file(
        root,
        "tagged.md",
        "---\ntags: [draft]\n---\n#Draft\nNot finished yet.\n",
    )?;
    create_test_file(root, "clean.md", "# Clean\n\nAlready formatted.\n")?;
    create_test_file(root, "readme.txt", "Plain text, not markdown")?;
    create_test_file(root, "guides/setup.md", "##Setup\nSay “hello”  to everyone.   \n")?;
    create_test_file(root, "guides/code.md", "Run `make` first.   \n")?;
    create_test_file(root, "drafts/idea.md", "Half an idea")?;
    create_test_file(root, ".obsidian/cache.md", "internal")?;

    Ok(temp_dir)
}

/// Paths below `root`, with `/` separators, for readable assertions.
pub fn relative_names(root: &Path, files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|f| {
            f.strip_prefix(root)
                .unwrap_or(f)
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect()
}
