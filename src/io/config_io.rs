//! Persisted configuration: the user-chosen root directory and knobs.
//!
//! Stored as `config.toml` under the platform config directory
//! (`~/.config/weekdo/` on Linux), overridable via `WEEKDO_CONFIG` for
//! tests. Edits go through `toml_edit` so hand-added comments and formatting
//! in the file survive a root-directory change.

use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Error type for configuration handling.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no configuration found at {}; run `wk init <dir>` first", path.display())]
    NotInitialized { path: PathBuf },
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,
    #[error("could not determine the home directory")]
    NoHomeDir,
    #[error("chosen directory {} is outside your home directory", path.display())]
    OutsideHome { path: PathBuf },
    #[error("could not read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Resolve the config file path.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os("WEEKDO_CONFIG") {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("weekdo").join("config.toml"))
}

/// Read the persisted config.
pub fn read_config() -> Result<Config, ConfigError> {
    let path = config_path()?;
    read_config_from(&path)
}

pub fn read_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotInitialized {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}

/// Set the root directory and persist, preserving existing file formatting.
///
/// The directory must resolve to a path under the user's home directory;
/// anything else is rejected without touching persisted state.
pub fn set_root_dir(root: &Path) -> Result<Config, ConfigError> {
    let path = config_path()?;
    set_root_dir_at(&path, root)
}

pub fn set_root_dir_at(config_file: &Path, root: &Path) -> Result<Config, ConfigError> {
    let root = validate_root(root)?;

    let mut doc = if config_file.exists() {
        let text = fs::read_to_string(config_file).map_err(|e| ConfigError::ReadError {
            path: config_file.to_path_buf(),
            source: e,
        })?;
        // Validate the existing content before editing it.
        let _: Config = toml::from_str(&text)?;
        text.parse::<toml_edit::DocumentMut>()
            .unwrap_or_else(|_| toml_edit::DocumentMut::new())
    } else {
        toml_edit::DocumentMut::new()
    };

    doc["root_dir"] = toml_edit::value(root.to_string_lossy().as_ref());

    if let Some(parent) = config_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(config_file, doc.to_string())?;

    read_config_from(config_file)
}

/// Folder-selection policy: the chosen root must live under the user's home
/// directory. Returns the absolute form of the path.
pub fn validate_root(root: &Path) -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    let abs = std::path::absolute(root).map_err(ConfigError::IoError)?;
    if !abs.starts_with(&home) {
        return Err(ConfigError::OutsideHome { path: abs });
    }
    Ok(abs)
}
