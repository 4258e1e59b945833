// Mon Oct 19 2026 - Alex

use super::error::ReportError;
use super::metadata::{derived_fields, generation_timestamp, StaticMetadata};
use crate::config::Config;
use crate::mapfile::{MapFileParser, KEYBOARD_FUNCTIONS};
use crate::source::SourceScanner;
use crate::tree::{merge, Node};
use crate::utils::scoped_timer;

/// Runs both parsers and merges their output into the final report tree.
pub struct ReportAssembler {
    config: Config,
    map_parser: MapFileParser,
    scanner: SourceScanner,
}

impl ReportAssembler {
    pub fn new(config: Config) -> Self {
        let scanner = SourceScanner::new().with_extension(&config.source_extension);
        Self {
            config,
            map_parser: MapFileParser::new(),
            scanner,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn assemble(&self) -> Result<Node, ReportError> {
        self.config.validate()?;

        let date_generated = self.config.include_timestamp.then(generation_timestamp);
        let metadata = StaticMetadata::new(
            self.config.git_commit_date.as_str(),
            self.config.git_commit_id.as_str(),
        )
        .with_date_generated(date_generated);

        let map_tree = {
            let _timer = scoped_timer("map file");
            self.map_parser
                .parse_file(&self.config.map_file)
                .map_err(|source| ReportError::MapFile {
                    path: self.config.map_file.clone(),
                    source,
                })?
        };

        let source_tree = {
            let _timer = scoped_timer("source scan");
            self.scanner.scan_tree(&self.config.source_dir)?
        };

        combine(&metadata, map_tree, source_tree)
    }
}

/// Merges static metadata, map-file output and source-scan output in that
/// order, then merges in the derived fields.
pub fn combine(
    metadata: &StaticMetadata,
    map_tree: Node,
    source_tree: Node,
) -> Result<Node, ReportError> {
    let report = merge(metadata.to_node(), map_tree);
    let report = merge(report, source_tree);

    warn_on_functions_without_extent(&report);

    let derived = derived_fields(&report)?;
    Ok(merge(report, derived))
}

fn warn_on_functions_without_extent(report: &Node) {
    let functions = match report.get(KEYBOARD_FUNCTIONS).and_then(Node::as_map) {
        Some(functions) => functions,
        None => return,
    };

    for (name, record) in functions {
        if !record.contains_key("position") {
            log::warn!("{} is documented in the sources but missing from the map file", name);
        }
    }
}
