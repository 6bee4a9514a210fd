// src/config.rs
use crate::core::formatter::BuiltinFormatter;
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{self, Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".mdutils.toml";

/// Settings read from `.mdutils.toml`. Command-line flags take precedence.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub suffixes: Vec<String>,
    pub exclude: Vec<String>,
    pub skip_hidden: bool,
    pub recursive: bool,
    pub formatter: Option<BuiltinFormatter>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suffixes: Vec::new(),
            exclude: Vec::new(),
            skip_hidden: false,
            recursive: true,
            formatter: None,
        }
    }
}

impl Config {
    /// Parses config text. `path` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for invalid TOML or unknown keys.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.message().to_owned(),
        })
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&content, path)
    }
}

/// Looks for [`CONFIG_FILE_NAME`] in `start` (or its directory, for a file)
/// and then in each parent directory. The nearest file wins.
///
/// # Errors
///
/// Returns [`Error::UnreadableFile`] if `start` cannot be made absolute.
pub fn find_config(start: &Path) -> Result<Option<PathBuf>> {
    let absolute = path::absolute(start).map_err(|source| Error::UnreadableFile {
        path: start.to_path_buf(),
        source,
    })?;
    let mut current_dir = if absolute.is_file() {
        absolute
            .parent()
            .map_or_else(|| absolute.clone(), Path::to_path_buf)
    } else {
        absolute
    };

    let mut visited = HashSet::new();
    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Ok(Some(candidate));
        }

        if let Some(parent) = current_dir.parent() {
            current_dir = parent.to_path_buf();
        } else {
            break;
        }
    }

    Ok(None)
}

/// Loads `explicit` if given, otherwise the nearest config above `start`.
/// No config file at all yields the defaults.
///
/// # Errors
///
/// Returns [`Error::Config`] if a config file exists but is invalid.
pub fn load_config(explicit: Option<&Path>, start: &Path) -> Result<Config> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config(start)?,
    };

    match path {
        Some(path) => {
            debug!("using config {}", path.display());
            Config::load(&path)
        }
        None => Ok(Config::default()),
    }
}
