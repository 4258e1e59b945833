// Mon Oct 19 2026 - Alex

pub mod error;
pub mod parser;
pub mod records;

pub use error::MapError;
pub use parser::MapFileParser;
pub use records::{
    KeyboardFunction, LayoutMatrices, SymbolExtent, KEYBOARD_FUNCTIONS, LAYOUT, LAYOUT_MATRICES,
    LAYOUT_MATRIX_NAMES, LAYOUT_PRESS, LAYOUT_RELEASE,
};
