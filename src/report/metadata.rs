// Mon Oct 19 2026 - Alex

use super::error::ReportError;
use crate::mapfile::{LAYOUT, LAYOUT_MATRICES};
use crate::tree::Node;

pub const META_DATA: &str = ".meta-data";
pub const MISCELLANEOUS: &str = "miscellaneous";
pub const NUMBER_OF_LAYERS: &str = "number-of-layers";

/// Version of the generated document layout.
pub const FORMAT_VERSION: u64 = 0;

pub const KB_ROWS: u64 = 6;
pub const KB_COLUMNS: u64 = 14;
/// `_kb_layout` holds one byte per key.
pub const BYTES_PER_LAYER: u64 = KB_ROWS * KB_COLUMNS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMetadata {
    pub date_generated: Option<String>,
    pub git_commit_date: String,
    pub git_commit_id: String,
}

impl StaticMetadata {
    pub fn new(git_commit_date: impl Into<String>, git_commit_id: impl Into<String>) -> Self {
        Self {
            date_generated: None,
            git_commit_date: git_commit_date.into(),
            git_commit_id: git_commit_id.into(),
        }
    }

    pub fn with_date_generated(mut self, date: Option<String>) -> Self {
        self.date_generated = date;
        self
    }

    pub fn to_node(&self) -> Node {
        Node::map()
            .with_entry(
                META_DATA,
                Node::map()
                    .with_entry("version", FORMAT_VERSION)
                    .with_entry("date-generated", self.date_generated.clone()),
            )
            .with_entry(
                MISCELLANEOUS,
                Node::map()
                    .with_entry("git-commit-date", self.git_commit_date.as_str())
                    .with_entry("git-commit-id", self.git_commit_id.as_str()),
            )
    }
}

/// Local time as `YYYY-MM-DD hh:mm:ss+zz:zz`.
pub fn generation_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%:z").to_string()
}

pub fn number_of_layers(layout_length: u64) -> u64 {
    layout_length / BYTES_PER_LAYER
}

/// Fields computed from an already merged report. Must run after the map file
/// has been merged in.
pub fn derived_fields(report: &Node) -> Result<Node, ReportError> {
    let layout_length = report
        .get_path(&[LAYOUT_MATRICES, LAYOUT, "length"])
        .and_then(Node::as_u64)
        .ok_or(ReportError::MissingDerivedInput {
            field: NUMBER_OF_LAYERS,
            matrix: LAYOUT,
        })?;

    Ok(Node::map().with_entry(
        MISCELLANEOUS,
        Node::map().with_entry(NUMBER_OF_LAYERS, number_of_layers(layout_length)),
    ))
}
