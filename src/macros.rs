//! Logging macros for variadic call sites.
//!
//! Each severity has three macros, matching the three text forms:
//!
//! - `info!(a, b, ...)` writes the arguments back to back, adding a space
//!   between two neighbours only when neither is a string
//! - `infoln!(a, b, ...)` joins them with single spaces and ends the line
//! - `infof!("fmt", args...)` formats like `format!`
//!
//! Prefix the arguments with `logger =>` to target a specific [`Logger`];
//! without it the default logger is used.
//!
//! # Examples
//!
//! ```
//! use jagger::prelude::*;
//! use jagger::{info, infof, infoln};
//!
//! let logger = Logger::new("api");
//! logger.set_output(std::io::sink());
//!
//! let port = 8080;
//! info!(logger => "listening on :", port);
//! infoln!(logger => "accepted", 3, "connections");
//! infof!(logger => "shutdown in {}s", 5);
//!
//! // Default logger
//! infof!("{} workers started", 4);
//! ```
//!
//! [`Logger`]: crate::Logger

#[doc(hidden)]
#[macro_export]
macro_rules! __concat {
    ($($arg:expr),+ $(,)?) => {
        $crate::core::message::Concat(&[$(
            $crate::core::message::TextArg($crate::core::message::AnyArg(&$arg)).operand()
        ),+])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __spaced {
    ($($arg:expr),+ $(,)?) => {
        $crate::core::message::Spaced(&[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

/// Log a debug-level message, arguments concatenated.
///
/// ```
/// # use jagger::prelude::*;
/// # let logger = Logger::new("api");
/// # logger.set_output(std::io::sink());
/// use jagger::debug;
/// debug!(logger => "cache size=", 128);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr => $($arg:expr),+ $(,)?) => {
        $logger.debug($crate::__concat!($($arg),+))
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::debug($crate::__concat!($($arg),+))
    };
}

/// Log a debug-level line, arguments separated by spaces.
#[macro_export]
macro_rules! debugln {
    ($logger:expr => $($arg:expr),+ $(,)?) => {
        $logger.debugln($crate::__spaced!($($arg),+))
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::debugln($crate::__spaced!($($arg),+))
    };
}

/// Log a formatted debug-level message.
#[macro_export]
macro_rules! debugf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::debugf(::std::format_args!($($arg)+))
    };
}

/// Log an info-level message, arguments concatenated.
///
/// ```
/// # use jagger::prelude::*;
/// # let logger = Logger::new("api");
/// # logger.set_output(std::io::sink());
/// use jagger::info;
/// info!(logger => "Application started");
/// info!(logger => "Processing ", 100, " items");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr => $($arg:expr),+ $(,)?) => {
        $logger.info($crate::__concat!($($arg),+))
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::info($crate::__concat!($($arg),+))
    };
}

/// Log an info-level line, arguments separated by spaces.
///
/// ```
/// # use jagger::prelude::*;
/// # let logger = Logger::new("api");
/// # logger.set_output(std::io::sink());
/// use jagger::infoln;
/// infoln!(logger => "Processing", 100, "items");
/// ```
#[macro_export]
macro_rules! infoln {
    ($logger:expr => $($arg:expr),+ $(,)?) => {
        $logger.infoln($crate::__spaced!($($arg),+))
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::infoln($crate::__spaced!($($arg),+))
    };
}

/// Log a formatted info-level message.
///
/// ```
/// # use jagger::prelude::*;
/// # let logger = Logger::new("api");
/// # logger.set_output(std::io::sink());
/// use jagger::infof;
/// infof!(logger => "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! infof {
    ($logger:expr => $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::infof(::std::format_args!($($arg)+))
    };
}

/// Log a warning-level message, arguments concatenated.
#[macro_export]
macro_rules! warning {
    ($logger:expr => $($arg:expr),+ $(,)?) => {
        $logger.warning($crate::__concat!($($arg),+))
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::warning($crate::__concat!($($arg),+))
    };
}

/// Log a warning-level line, arguments separated by spaces.
#[macro_export]
macro_rules! warningln {
    ($logger:expr => $($arg:expr),+ $(,)?) => {
        $logger.warningln($crate::__spaced!($($arg),+))
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::warningln($crate::__spaced!($($arg),+))
    };
}

/// Log a formatted warning-level message.
///
/// ```
/// # use jagger::prelude::*;
/// # let logger = Logger::new("api");
/// # logger.set_output(std::io::sink());
/// use jagger::warningf;
/// warningf!(logger => "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warningf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.warningf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::warningf(::std::format_args!($($arg)+))
    };
}

/// Log an error-level message, arguments concatenated.
#[macro_export]
macro_rules! error {
    ($logger:expr => $($arg:expr),+ $(,)?) => {
        $logger.error($crate::__concat!($($arg),+))
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::error($crate::__concat!($($arg),+))
    };
}

/// Log an error-level line, arguments separated by spaces.
#[macro_export]
macro_rules! errorln {
    ($logger:expr => $($arg:expr),+ $(,)?) => {
        $logger.errorln($crate::__spaced!($($arg),+))
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::errorln($crate::__spaced!($($arg),+))
    };
}

/// Log a formatted error-level message.
///
/// ```
/// # use jagger::prelude::*;
/// # let logger = Logger::new("api");
/// # logger.set_output(std::io::sink());
/// use jagger::errorf;
/// errorf!(logger => "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! errorf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::errorf(::std::format_args!($($arg)+))
    };
}

/// Log a fatal-level message, arguments concatenated, then exit with status 1.
#[macro_export]
macro_rules! fatal {
    ($logger:expr => $($arg:expr),+ $(,)?) => {
        $logger.fatal($crate::__concat!($($arg),+))
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::fatal($crate::__concat!($($arg),+))
    };
}

/// Log a fatal-level line, arguments separated by spaces, then exit with status 1.
#[macro_export]
macro_rules! fatalln {
    ($logger:expr => $($arg:expr),+ $(,)?) => {
        $logger.fatalln($crate::__spaced!($($arg),+))
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::fatalln($crate::__spaced!($($arg),+))
    };
}

/// Log a formatted fatal-level message, then exit with status 1.
///
/// ```no_run
/// use jagger::fatalf;
/// fatalf!("Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatalf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::fatalf(::std::format_args!($($arg)+))
    };
}
