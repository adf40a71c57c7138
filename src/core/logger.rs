//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    flags::Flags,
    header,
    message::{self, Line},
    severity::{parse_level, Severity},
    sink::Sink,
};
use parking_lot::Mutex;
use serde::Serialize;
use std::fmt::{self, Display};
use std::io::{self, Write};
use std::panic::Location;

/// Name of the logger created by [`Logger::default`] and the default instance
pub const DEFAULT_NAME: &str = "Jagger";

/// Exit status used by every `fatal*` call
pub const FATAL_EXIT_CODE: i32 = 1;

/// Mutable configuration, always accessed under the logger's lock
struct LoggerState {
    level: Severity,
    flags: Flags,
    output: Box<dyn Write + Send>,
}

impl LoggerState {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.output.write_all(line.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}

/// A named, leveled logger writing to one shared destination.
///
/// All emission and configuration calls take `&self`; the logger can be
/// shared between threads behind an `Arc` or a `static`. Each emitted line
/// is written with a single `write_all` while the lock is held, so lines from
/// concurrent callers never interleave.
///
/// # Example
///
/// ```
/// use jagger::{Flags, Logger, Severity};
///
/// let logger = Logger::new("Test");
/// logger.set_level(Severity::Warning);
/// logger.set_flags(Flags::DATE);
/// logger.set_output(std::io::sink());
///
/// logger.info("info log"); // gated out
/// logger.warning("warning log");
/// logger.errorf(format_args!("code {}", 500));
/// ```
pub struct Logger {
    name: String,
    sinks: [Sink; 5],
    state: Mutex<LoggerState>,
}

impl Logger {
    /// Create a logger writing to stderr at [`Severity::Info`] with
    /// [`Flags::DEFAULT`] annotations
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            sinks: Sink::for_all(&name),
            name,
            state: Mutex::new(LoggerState {
                level: Severity::Info,
                flags: Flags::DEFAULT,
                output: Box::new(io::stderr()),
            }),
        }
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `[name] TAG` prefix written for `severity`
    pub fn prefix(&self, severity: Severity) -> &str {
        self.sink(severity).prefix()
    }

    pub fn level(&self) -> Severity {
        self.state.lock().level
    }

    pub fn flags(&self) -> Flags {
        self.state.lock().flags
    }

    /// Whether a call at `severity` would currently be written
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.state.lock().level
    }

    pub fn set_level(&self, level: Severity) {
        self.state.lock().level = level;
    }

    /// Set the level from text, see [`parse_level`]
    pub fn set_level_str(&self, level: &str) {
        self.set_level(parse_level(level));
    }

    /// Replace the header flags for every severity
    pub fn set_flags(&self, flags: Flags) {
        self.state.lock().flags = flags;
    }

    /// Replace the destination for every severity
    pub fn set_output<W: Write + Send + 'static>(&self, output: W) {
        self.state.lock().output = Box::new(output);
    }

    fn sink(&self, severity: Severity) -> &Sink {
        match self.sinks.get(severity.index()) {
            Some(sink) => sink,
            None => panic!("{}", LoggerError::UnrecognizedSeverity(severity as u8)),
        }
    }

    /// Gate, render and write one line.
    ///
    /// The message is rendered outside the lock so a `Display` impl that logs
    /// cannot deadlock; the gate is checked again under the lock together
    /// with the header and the write.
    fn output(&self, severity: Severity, location: &Location<'_>, message: &dyn Display) {
        if !self.is_enabled(severity) {
            return;
        }

        let message = message.to_string();
        let sink = self.sink(severity);

        let mut state = self.state.lock();
        if severity < state.level {
            return;
        }

        let mut line = String::with_capacity(64 + sink.prefix().len() + message.len());
        header::write_header(&mut line, state.flags, location);
        line.push_str(sink.prefix());
        line.push_str(&message);
        if !line.ends_with('\n') {
            line.push('\n');
        }

        if let Err(e) = state.write_line(&line) {
            eprintln!("[LOGGER ERROR] Failed to write log line: {}", e);
        }
    }

    fn exit_if_fatal(severity: Severity) {
        if severity == Severity::Fatal {
            exit_fatal();
        }
    }

    /// Write `message` at `severity`; exits the process for [`Severity::Fatal`]
    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl Display) {
        self.output(severity, Location::caller(), &message);
        Self::exit_if_fatal(severity);
    }

    /// Like [`Logger::log`] with a trailing newline
    #[track_caller]
    pub fn logln(&self, severity: Severity, message: impl Display) {
        self.output(severity, Location::caller(), &Line(message));
        Self::exit_if_fatal(severity);
    }

    /// Write pre-formatted arguments, usually from `format_args!`
    #[track_caller]
    pub fn logf(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.output(severity, Location::caller(), &args);
        Self::exit_if_fatal(severity);
    }

    /// Serialize `value` to JSON and write it as the message.
    ///
    /// Nothing is serialized when `severity` is gated out. Serialization
    /// errors are returned and nothing is written.
    #[track_caller]
    pub fn try_log_json<T: Serialize + ?Sized>(
        &self,
        severity: Severity,
        value: &T,
    ) -> Result<()> {
        let location = Location::caller();
        if self.is_enabled(severity) {
            let json = message::to_json(value)?;
            self.output(severity, location, &json);
        }
        Ok(())
    }

    /// Serialize `value` to JSON and write it as the message.
    ///
    /// # Aborts
    ///
    /// If `value` cannot be serialized, the error is reported on stderr and
    /// the whole process is aborted, whichever thread made the call. Use
    /// [`Logger::try_log_json`] to handle the error instead.
    #[track_caller]
    pub fn log_json<T: Serialize + ?Sized>(&self, severity: Severity, value: &T) {
        if let Err(e) = self.try_log_json(severity, value) {
            eprintln!("[LOGGER ERROR] Failed to serialize log payload: {}", e);
            std::process::abort();
        }
        Self::exit_if_fatal(severity);
    }

    // Debug

    #[track_caller]
    pub fn debug(&self, message: impl Display) {
        self.log(Severity::Debug, message);
    }

    #[track_caller]
    pub fn debugln(&self, message: impl Display) {
        self.logln(Severity::Debug, message);
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Debug, args);
    }

    #[track_caller]
    pub fn debugj<T: Serialize + ?Sized>(&self, value: &T) {
        self.log_json(Severity::Debug, value);
    }

    // Info

    #[track_caller]
    pub fn info(&self, message: impl Display) {
        self.log(Severity::Info, message);
    }

    #[track_caller]
    pub fn infoln(&self, message: impl Display) {
        self.logln(Severity::Info, message);
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Info, args);
    }

    #[track_caller]
    pub fn infoj<T: Serialize + ?Sized>(&self, value: &T) {
        self.log_json(Severity::Info, value);
    }

    // Warning

    #[track_caller]
    pub fn warning(&self, message: impl Display) {
        self.log(Severity::Warning, message);
    }

    #[track_caller]
    pub fn warningln(&self, message: impl Display) {
        self.logln(Severity::Warning, message);
    }

    #[track_caller]
    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Warning, args);
    }

    #[track_caller]
    pub fn warningj<T: Serialize + ?Sized>(&self, value: &T) {
        self.log_json(Severity::Warning, value);
    }

    // Error

    #[track_caller]
    pub fn error(&self, message: impl Display) {
        self.log(Severity::Error, message);
    }

    #[track_caller]
    pub fn errorln(&self, message: impl Display) {
        self.logln(Severity::Error, message);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Error, args);
    }

    #[track_caller]
    pub fn errorj<T: Serialize + ?Sized>(&self, value: &T) {
        self.log_json(Severity::Error, value);
    }

    // Fatal: write, then exit with FATAL_EXIT_CODE

    #[track_caller]
    pub fn fatal(&self, message: impl Display) -> ! {
        self.output(Severity::Fatal, Location::caller(), &message);
        exit_fatal()
    }

    #[track_caller]
    pub fn fatalln(&self, message: impl Display) -> ! {
        self.output(Severity::Fatal, Location::caller(), &Line(message));
        exit_fatal()
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.output(Severity::Fatal, Location::caller(), &args);
        exit_fatal()
    }

    #[track_caller]
    pub fn fatalj<T: Serialize + ?Sized>(&self, value: &T) -> ! {
        self.log_json(Severity::Fatal, value);
        exit_fatal()
    }
}

fn exit_fatal() -> ! {
    std::process::exit(FATAL_EXIT_CODE)
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &state.level)
            .field("flags", &state.flags)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use jagger::prelude::*;
///
/// let logger = Logger::builder()
///     .name("api")
///     .level_str("debug")
///     .flags(Flags::STD | Flags::UTC)
///     .output(std::io::sink())
///     .build();
///
/// assert_eq!(logger.level(), Severity::Debug);
/// ```
pub struct LoggerBuilder {
    name: String,
    level: Severity,
    flags: Flags,
    output: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            level: Severity::Info,
            flags: Flags::DEFAULT,
            output: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set minimum severity
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Set minimum severity from text, unknown text meaning `Info`
    #[must_use = "builder methods return a new value"]
    pub fn level_str(mut self, level: &str) -> Self {
        self.level = parse_level(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the destination; stderr when not called
    #[must_use = "builder methods return a new value"]
    pub fn output<W: Write + Send + 'static>(mut self, output: W) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    pub fn build(self) -> Logger {
        let logger = Logger::new(self.name);
        {
            let mut state = logger.state.lock();
            state.level = self.level;
            state.flags = self.flags;
            if let Some(output) = self.output {
                state.output = output;
            }
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn bare_logger(name: &str) -> (Logger, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let logger = Logger::builder()
            .name(name)
            .flags(Flags::empty())
            .output(buffer.clone())
            .build();
        (logger, buffer)
    }

    #[test]
    fn test_new_defaults() {
        let logger = Logger::new("Test");
        assert_eq!(logger.name(), "Test");
        assert_eq!(logger.level(), Severity::Info);
        assert_eq!(logger.flags(), Flags::DEFAULT);
        assert_eq!(logger.prefix(Severity::Debug), "[Test] DEBUG : ");
        assert_eq!(logger.prefix(Severity::Fatal), "[Test] FATAL : ");
    }

    #[test]
    fn test_default_name() {
        let logger = Logger::default();
        assert_eq!(logger.name(), DEFAULT_NAME);
        assert_eq!(logger.prefix(Severity::Info), "[Jagger] INFO : ");
    }

    #[test]
    fn test_plain_line_format() {
        let (logger, buffer) = bare_logger("Test");
        logger.info("hello");
        logger.warning(42);
        assert_eq!(buffer.contents(), "[Test] INFO : hello\n[Test] WARN : 42\n");
    }

    #[test]
    fn test_ln_form_does_not_double_newline() {
        let (logger, buffer) = bare_logger("Test");
        logger.errorln("disk full");
        logger.errorln("");
        assert_eq!(buffer.contents(), "[Test] ERROR : disk full\n[Test] ERROR : \n");
    }

    #[test]
    fn test_f_form() {
        let (logger, buffer) = bare_logger("Test");
        logger.infof(format_args!("{} items in {:.1}s", 3, 1.5));
        assert_eq!(buffer.contents(), "[Test] INFO : 3 items in 1.5s\n");
    }

    #[test]
    fn test_gate() {
        let (logger, buffer) = bare_logger("Test");
        logger.set_level(Severity::Warning);

        logger.debug("debug log");
        logger.info("info log");
        assert!(buffer.contents().is_empty());
        assert!(!logger.is_enabled(Severity::Info));
        assert!(logger.is_enabled(Severity::Error));

        logger.warning("warning log");
        logger.error("error log");
        assert_eq!(
            buffer.contents(),
            "[Test] WARN : warning log\n[Test] ERROR : error log\n"
        );
    }

    #[test]
    fn test_gated_message_is_not_rendered() {
        struct Explodes;

        impl Display for Explodes {
            fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
                panic!("rendered a gated-out message");
            }
        }

        let (logger, buffer) = bare_logger("Test");
        logger.debug(Explodes);
        logger.debugln(Explodes);
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_set_level_str() {
        let logger = Logger::new("Test");
        logger.set_level_str("ERROR");
        assert_eq!(logger.level(), Severity::Error);
        logger.set_level_str("nonsense");
        assert_eq!(logger.level(), Severity::Info);
    }

    #[test]
    fn test_set_output_redirects_every_severity() {
        let (logger, old) = bare_logger("Test");
        logger.set_level(Severity::Debug);

        let new = SharedBuffer::default();
        logger.set_output(new.clone());

        logger.debug("d");
        logger.info("i");
        logger.warning("w");
        logger.error("e");

        assert!(old.contents().is_empty());
        assert_eq!(
            new.contents(),
            "[Test] DEBUG : d\n[Test] INFO : i\n[Test] WARN : w\n[Test] ERROR : e\n"
        );
    }

    #[test]
    fn test_set_flags_applies_to_every_severity() {
        let (logger, buffer) = bare_logger("Test");
        logger.set_level(Severity::Debug);
        logger.set_flags(Flags::SHORT_FILE);

        logger.debug("d");
        let debug_line = line!() - 1;
        logger.error("e");
        let error_line = line!() - 1;

        assert_eq!(
            buffer.contents(),
            format!(
                "logger.rs:{}: [Test] DEBUG : d\nlogger.rs:{}: [Test] ERROR : e\n",
                debug_line, error_line
            )
        );
    }

    #[test]
    fn test_json_form() {
        #[derive(Serialize)]
        struct Payload<'a> {
            title: &'a str,
        }

        let (logger, buffer) = bare_logger("Test");
        logger.infoj(&Payload { title: "Struct Log" });
        assert_eq!(buffer.contents(), "[Test] INFO : {\"title\":\"Struct Log\"}\n");
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _s: S) -> std::result::Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refusing to serialize"))
        }
    }

    #[test]
    fn test_try_log_json_reports_error() {
        let (logger, buffer) = bare_logger("Test");
        let err = logger
            .try_log_json(Severity::Error, &Unserializable)
            .unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_try_log_json_gated_skips_serialization() {
        let (logger, _buffer) = bare_logger("Test");
        assert!(logger.try_log_json(Severity::Debug, &Unserializable).is_ok());
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let logger = Logger::builder()
            .flags(Flags::empty())
            .output(FailingWriter)
            .build();
        logger.error("goes nowhere");
    }

    #[test]
    fn test_write_line_reports_io_error() {
        let mut state = LoggerState {
            level: Severity::Info,
            flags: Flags::empty(),
            output: Box::new(FailingWriter),
        };
        let err = state.write_line("lost\n").unwrap_err();
        assert!(matches!(err, LoggerError::IoError(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(err.to_string(), "IO error: closed");

        let buffer = SharedBuffer::default();
        state.output = Box::new(buffer.clone());
        state.write_line("kept\n").unwrap();
        assert_eq!(buffer.contents(), "kept\n");
    }

    #[test]
    fn test_logging_from_display_does_not_deadlock() {
        struct Nested<'a>(&'a Logger);

        impl Display for Nested<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.info("inner");
                f.write_str("outer")
            }
        }

        let (logger, buffer) = bare_logger("Test");
        logger.info(Nested(&logger));
        assert_eq!(buffer.contents(), "[Test] INFO : inner\n[Test] INFO : outer\n");
    }

    #[test]
    fn test_builder_defaults() {
        let logger = LoggerBuilder::default().build();
        assert_eq!(logger.name(), DEFAULT_NAME);
        assert_eq!(logger.level(), Severity::Info);
        assert_eq!(logger.flags(), Flags::DEFAULT);
    }

    #[test]
    fn test_debug_impl() {
        let logger = Logger::new("Test");
        let rendered = format!("{:?}", logger);
        assert!(rendered.contains("\"Test\""));
        assert!(rendered.contains("Info"));
    }
}
