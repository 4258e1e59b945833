// Mon Oct 19 2026 - Alex

pub mod config;
pub mod mapfile;
pub mod output;
pub mod report;
pub mod source;
pub mod tree;
pub mod utils;

pub use config::Config;
pub use mapfile::MapFileParser;
pub use output::JsonSerializer;
pub use report::ReportAssembler;
pub use source::{CommentFieldParser, SourceScanner};
pub use tree::{merge, Node};
