// Mon Oct 19 2026 - Alex

use crate::tree::Node;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes report trees as JSON. Keys come out sorted because every map in the
/// tree is ordered.
pub struct JsonSerializer {
    pretty_print: bool,
    indent_size: usize,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self {
            pretty_print: true,
            indent_size: 4,
        }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.indent_size = size;
        self
    }

    pub fn serialize(&self, report: &Node) -> Result<String, JsonError> {
        let mut buffer = Vec::new();

        if self.pretty_print {
            let indent = " ".repeat(self.indent_size);
            let mut serializer =
                Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent.as_bytes()));
            report.serialize(&mut serializer)?;
        } else {
            serde_json::to_writer(&mut buffer, report)?;
        }

        let mut json = String::from_utf8(buffer)?;
        json.push('\n');
        Ok(json)
    }

    pub fn write_to<W: Write>(&self, report: &Node, mut writer: W) -> Result<(), JsonError> {
        let json = self.serialize(report)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub fn serialize_to_file<P: AsRef<Path>>(&self, report: &Node, path: P) -> Result<(), JsonError> {
        let file = File::create(path.as_ref())?;
        self.write_to(report, BufWriter::new(file))
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Node {
        Node::map()
            .with_entry("miscellaneous", Node::map().with_entry("number-of-layers", 3u64))
            .with_entry(".meta-data", Node::map().with_entry("date-generated", Node::null()))
    }

    #[test]
    fn test_pretty_output_is_sorted_and_indented() {
        let json = JsonSerializer::new().serialize(&sample()).unwrap();
        let expected = "{\n    \".meta-data\": {\n        \"date-generated\": null\n    },\n    \"miscellaneous\": {\n        \"number-of-layers\": 3\n    }\n}\n";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_compact_output() {
        let json = JsonSerializer::new().with_pretty_print(false).serialize(&sample()).unwrap();
        assert_eq!(json, "{\".meta-data\":{\"date-generated\":null},\"miscellaneous\":{\"number-of-layers\":3}}\n");
    }

    #[test]
    fn test_empty_map() {
        let json = JsonSerializer::new().serialize(&Node::map()).unwrap();
        assert_eq!(json, "{}\n");
    }

    #[test]
    fn test_serialize_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ui-info.json");
        JsonSerializer::new().with_indent_size(2).serialize_to_file(&sample(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["miscellaneous"]["number-of-layers"], 3);
        assert!(written.starts_with("{\n  \".meta-data\""));
    }
}
