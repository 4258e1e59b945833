// Mon Oct 19 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Invalid source directory path: {}", .0.display())]
    InvalidPath(PathBuf),
    #[error("{}:{line}: comment is never closed", .path.display())]
    UnterminatedComment { path: PathBuf, line: usize },
    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
