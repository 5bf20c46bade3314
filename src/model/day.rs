use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::task::Task;

/// One calendar day: one file, one ordered list of tasks.
///
/// A `Day` is materialized on every load and never cached across loads; the
/// file on disk is the source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Day {
    /// Local calendar date; the file is named `YYYY-MM-DD.<ext>`.
    pub date: NaiveDate,
    /// Full path of the backing file.
    pub path: PathBuf,
    /// Tasks in order of appearance in the file.
    pub tasks: Vec<Task>,
    /// True when the backing file does not exist yet.
    pub missing: bool,
    /// Content hash of the file as loaded (post-migration), used by the
    /// change watcher. `None` for missing days.
    #[serde(skip)]
    pub hash: Option<String>,
}

impl Day {
    /// A day whose file does not exist yet.
    pub fn missing(date: NaiveDate, path: PathBuf) -> Self {
        Day {
            date,
            path,
            tasks: Vec::new(),
            missing: true,
            hash: None,
        }
    }
}
