// Mon Oct 19 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Invalid map file path: {}", .0.display())]
    InvalidPath(PathBuf),
    #[error("Malformed map entry at line {line}: {reason}")]
    MalformedEntry { line: usize, reason: String },
    #[error("Not all layout matrices were found after line {line} (missing: {})", .missing.join(", "))]
    IncompleteLayoutSet { line: usize, missing: Vec<String> },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MapError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        MapError::MalformedEntry {
            line,
            reason: reason.into(),
        }
    }
}
