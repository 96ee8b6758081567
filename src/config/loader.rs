use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::ConfigFile;

pub const CONFIG_FILE_NAME: &str = "ziglint.json";
pub const IGNORE_FILE_NAME: &str = ".ziglintignore";

/// Walk upward from `start` (a file argument starts at its directory)
/// looking for a file named `name`. The nearest match wins.
#[must_use]
pub fn discover_upward(start: &Path, name: &str) -> Option<PathBuf> {
    let mut dir = if start.is_dir() {
        start
    } else {
        start.parent()?
    };

    loop {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Read and parse a `ziglint.json` file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid JSON matching
/// the config schema. The serde message lists valid field names and severity
/// values, so callers can surface it directly.
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)?;
    let config: ConfigFile = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
