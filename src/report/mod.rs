// Mon Oct 19 2026 - Alex

pub mod assembler;
pub mod error;
pub mod metadata;

pub use assembler::{combine, ReportAssembler};
pub use error::ReportError;
pub use metadata::{derived_fields, generation_timestamp, number_of_layers, StaticMetadata};
