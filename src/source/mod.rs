// Mon Oct 19 2026 - Alex

pub mod comments;
pub mod error;
pub mod scanner;

pub use comments::{CommentBlock, CommentFieldParser};
pub use error::SourceError;
pub use scanner::{DocumentedFunction, SourceScanner};
