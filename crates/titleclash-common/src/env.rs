//! Environment variable access and `.env` file loading.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::ConfigError;

/// Treat an empty or whitespace-only setting as unset.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse `KEY=VALUE` lines. Blank lines and `#` comments are skipped, an
/// optional `export ` prefix is accepted and surrounding quotes are removed.
pub fn parse_env_file(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let value = value.trim().trim_matches('"').trim_matches('\'');
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Apply the variables in `path` to the process environment.
///
/// Variables already present in the environment are left untouched.
/// Returns how many variables were set.
pub fn load_env_file(path: &Path) -> Result<usize, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|_| ConfigError::EnvFile(path.to_path_buf()))?;

    let mut applied = 0;
    for (key, value) in parse_env_file(&contents) {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(&key, value);
            applied += 1;
        }
    }
    Ok(applied)
}

/// Locations searched for a `.env` file, in priority order.
pub fn dotenv_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("titleclash").join(".env"));
    }
    candidates
}

/// Load the first `.env` file found among [`dotenv_candidates`].
///
/// Returns the path that was loaded, if any.
pub fn load_dotenv() -> Option<PathBuf> {
    for path in dotenv_candidates() {
        if !path.is_file() {
            continue;
        }
        match load_env_file(&path) {
            Ok(count) => {
                debug!(path = %path.display(), count, "loaded env file");
                return Some(path);
            }
            Err(e) => warn!("{e}"),
        }
    }
    None
}
