//! Filesystem access for day files.
//!
//! Deliberately thin: `exists`, whole-file `read`, whole-file `write`, plus
//! the content hash the change watcher compares. Durability beyond a direct
//! text write is out of scope.

use std::fs;
use std::path::{Path, PathBuf};

/// Error type for day file I/O.
#[derive(Debug, thiserror::Error)]
pub enum DayIoError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub fn exists(path: &Path) -> bool {
    path.exists()
}

pub fn read(path: &Path) -> Result<String, DayIoError> {
    fs::read_to_string(path).map_err(|e| DayIoError::Read {
        path: path.to_path_buf(),
        source: e,
    })
}

pub fn write(path: &Path, text: &str) -> Result<(), DayIoError> {
    fs::write(path, text).map_err(|e| DayIoError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Content hash used for external-change detection.
pub fn content_hash(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}

/// Split file content into lines for line-oriented patching.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(|l| l.to_string()).collect()
}

/// Rejoin patched lines, normalizing to a single trailing newline.
pub fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
