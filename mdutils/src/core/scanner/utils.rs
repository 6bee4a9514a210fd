// src/core/scanner/utils.rs
use crate::core::scanner::WalkOptions;
use crate::utils::is_hidden;
use std::path::Path;

/// Decides whether a walk entry is pruned: hidden entries when
/// `skip_hidden` is set, and anything matching an exclude pattern.
/// The root itself is never excluded.
pub fn should_exclude(entry: &walkdir::DirEntry, root: &Path, options: &WalkOptions) -> bool {
    if entry.depth() == 0 {
        return false;
    }

    if options.skip_hidden && is_hidden(entry) {
        return true;
    }

    if options.exclude.is_empty() {
        return false;
    }
    let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
    options.exclude.matches(relative, entry.file_type().is_dir())
}
