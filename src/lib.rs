//! # Jagger
//!
//! A minimal leveled logger.
//!
//! Messages are tagged with a [`Severity`], dropped when below the logger's
//! threshold, prefixed with a date/time/caller header plus `[name] TAG`, and
//! written synchronously to a configurable destination (stderr by default).
//!
//! ## Features
//!
//! - **Leveled**: `Debug < Info < Warning < Error < Fatal`; `fatal*` calls exit the process
//! - **Four forms per level**: plain, `ln`, `f` (formatted) and `j` (JSON payload)
//! - **Thread Safe**: one lock covers the gate, the configuration and the write
//! - **Default instance**: free functions and macros log through a process-wide logger
//!
//! ```
//! use jagger::prelude::*;
//!
//! let logger = Logger::new("Test");
//! logger.set_level(parse_level("warning"));
//! logger.set_output(std::io::sink());
//!
//! logger.info("info log"); // below threshold
//! logger.warning("warning log");
//! ```
//!
//! Line layout:
//!
//! ```text
//! 2025/01/08 10:30:45.123456 main.rs:12: [Test] WARN : warning log
//! ```

pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        parse_level, Flags, Logger, LoggerBuilder, LoggerError, Result, Severity,
        DEFAULT_NAME,
    };
}

pub use crate::core::{
    parse_level, Flags, Logger, LoggerBuilder, LoggerError, Result, Severity, Sink,
    DEFAULT_NAME, FATAL_EXIT_CODE,
};
pub use global::{
    debug, debugf, debugj, debugln, error, errorf, errorj, errorln, fatal, fatalf, fatalj,
    fatalln, flags, info, infof, infoj, infoln, is_enabled, level, log, set_flags, set_level,
    set_output, warning, warningf, warningj, warningln,
};
