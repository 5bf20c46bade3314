use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Configuration from `config.toml`: the chosen root directory plus a
/// handful of knobs with sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the day files. User-chosen, must live under the
    /// user's home directory.
    pub root_dir: PathBuf,
    /// Day file extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Change watcher poll interval in seconds.
    #[serde(default = "default_poll_secs")]
    pub poll_secs: u64,
}

fn default_extension() -> String {
    "md".to_string()
}

fn default_poll_secs() -> u64 {
    2
}

impl Config {
    pub fn new(root_dir: PathBuf) -> Self {
        Config {
            root_dir,
            extension: default_extension(),
            poll_secs: default_poll_secs(),
        }
    }

    /// File name for a given date, e.g. `2025-06-09.md`.
    pub fn day_file_name(&self, date: NaiveDate) -> String {
        format!("{}.{}", date.format("%Y-%m-%d"), self.extension)
    }

    /// Full path of a day file under the root directory.
    pub fn day_path(&self, date: NaiveDate) -> PathBuf {
        self.root_dir.join(self.day_file_name(date))
    }
}
