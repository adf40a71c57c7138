//! Core logger types

pub mod error;
pub mod flags;
pub mod header;
pub mod logger;
pub mod message;
pub mod severity;
pub mod sink;

pub use error::{LoggerError, Result};
pub use flags::Flags;
pub use logger::{Logger, LoggerBuilder, DEFAULT_NAME, FATAL_EXIT_CODE};
pub use severity::{parse_level, Severity};
pub use sink::Sink;
