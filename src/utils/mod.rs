// Mon Oct 19 2026 - Alex

pub mod cursor;
pub mod hex;
pub mod logging;

pub use cursor::LineCursor;
pub use hex::parse_hex;
pub use logging::{scoped_timer, LoggingUtils, ScopedTimer};
