// Mon Oct 19 2026 - Alex

pub mod merge;
pub mod node;

pub use merge::merge;
pub use node::{Node, Scalar};
