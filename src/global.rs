//! Process-wide default logger.
//!
//! The default instance is named [`DEFAULT_NAME`], starts at
//! [`Severity::Info`], writes to stderr, and is created once on first use.
//! Every function here delegates to the method of the same name on it.
//!
//! ```
//! jagger::set_level(jagger::Severity::Warning);
//! jagger::info("not written");
//! jagger::warningf(format_args!("{} retries left", 2));
//! ```

use crate::core::{Flags, Logger, Severity, DEFAULT_NAME};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt::{self, Display};
use std::io::Write;

static DEFAULT_LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new(DEFAULT_NAME));

pub fn level() -> Severity {
    DEFAULT_LOGGER.level()
}

pub fn flags() -> Flags {
    DEFAULT_LOGGER.flags()
}

pub fn is_enabled(severity: Severity) -> bool {
    DEFAULT_LOGGER.is_enabled(severity)
}

pub fn set_level(level: Severity) {
    DEFAULT_LOGGER.set_level(level);
}

pub fn set_flags(flags: Flags) {
    DEFAULT_LOGGER.set_flags(flags);
}

/// Redirect all five severities of the default logger
pub fn set_output<W: Write + Send + 'static>(output: W) {
    DEFAULT_LOGGER.set_output(output);
}

#[track_caller]
pub fn log(severity: Severity, message: impl Display) {
    DEFAULT_LOGGER.log(severity, message);
}

#[track_caller]
pub fn debug(message: impl Display) {
    DEFAULT_LOGGER.debug(message);
}

#[track_caller]
pub fn debugln(message: impl Display) {
    DEFAULT_LOGGER.debugln(message);
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.debugf(args);
}

#[track_caller]
pub fn debugj<T: Serialize + ?Sized>(value: &T) {
    DEFAULT_LOGGER.debugj(value);
}

#[track_caller]
pub fn info(message: impl Display) {
    DEFAULT_LOGGER.info(message);
}

#[track_caller]
pub fn infoln(message: impl Display) {
    DEFAULT_LOGGER.infoln(message);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.infof(args);
}

#[track_caller]
pub fn infoj<T: Serialize + ?Sized>(value: &T) {
    DEFAULT_LOGGER.infoj(value);
}

#[track_caller]
pub fn warning(message: impl Display) {
    DEFAULT_LOGGER.warning(message);
}

#[track_caller]
pub fn warningln(message: impl Display) {
    DEFAULT_LOGGER.warningln(message);
}

#[track_caller]
pub fn warningf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.warningf(args);
}

#[track_caller]
pub fn warningj<T: Serialize + ?Sized>(value: &T) {
    DEFAULT_LOGGER.warningj(value);
}

#[track_caller]
pub fn error(message: impl Display) {
    DEFAULT_LOGGER.error(message);
}

#[track_caller]
pub fn errorln(message: impl Display) {
    DEFAULT_LOGGER.errorln(message);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.errorf(args);
}

#[track_caller]
pub fn errorj<T: Serialize + ?Sized>(value: &T) {
    DEFAULT_LOGGER.errorj(value);
}

#[track_caller]
pub fn fatal(message: impl Display) -> ! {
    DEFAULT_LOGGER.fatal(message)
}

#[track_caller]
pub fn fatalln(message: impl Display) -> ! {
    DEFAULT_LOGGER.fatalln(message)
}

#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    DEFAULT_LOGGER.fatalf(args)
}

#[track_caller]
pub fn fatalj<T: Serialize + ?Sized>(value: &T) -> ! {
    DEFAULT_LOGGER.fatalj(value)
}
