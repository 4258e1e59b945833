// Mon Oct 19 2026 - Alex

use crate::config::ConfigError;
use crate::mapfile::MapError;
use crate::source::SourceError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("{}: {source}", .path.display())]
    MapFile {
        path: PathBuf,
        #[source]
        source: MapError,
    },
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("Cannot compute {field}: no length recorded for layout matrix '{matrix}'")]
    MissingDerivedInput {
        field: &'static str,
        matrix: &'static str,
    },
}
