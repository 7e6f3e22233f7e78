//! # Leveled Loggers
//!
//! [`Logger`] is the emitting surface shared by every logger in the process. The only
//! required method is [`Logger::emit`], which writes unconditionally; the twelve
//! per-level helpers check the global threshold first and then delegate to it.
//!
//! Each level comes in two forms:
//!
//! - the concatenating form (`info(&[&"user ", &id])`), which renders every argument
//!   with `Display` and joins them with no separator, and
//! - the format form (`infof(format_args!(...))`, usually through the `infof!` macro).
//!
//! `Fatal` and `Panic` are only labels. No emit method panics or exits the process.
//!
//! [`SentinelLogger`] binds a [`Sink`], a namespace and a set of [`LineFlags`], and
//! writes each accepted message as `[<namespace>] [<LABEL>] <message>`.

use crate::console::report_error;
use crate::error::{LogError, Result};
use crate::level::Level;
use crate::log_dir::log_base_dir;
use crate::sink::{LineFlags, Sink};
use std::fmt;
use std::io::Write;
use std::path::Path;

/// Renders a list of arguments back to back.
struct Concat<'a>(&'a [&'a dyn fmt::Display]);

impl fmt::Display for Concat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for arg in self.0 {
            fmt::Display::fmt(arg, f)?;
        }
        Ok(())
    }
}

fn emit_concat<L: Logger + ?Sized>(logger: &L, level: Level, args: &[&dyn fmt::Display]) {
    if level.enabled() {
        logger.emit(level, format_args!("{}", Concat(args)));
    }
}

/// Reports `err` on the diagnostic stream and terminates with status 1.
pub(crate) fn exit_on_open_failure(err: &LogError) -> ! {
    report_error(err);
    std::process::exit(1);
}

/// Leveled logging interface.
///
/// Must be `Send + Sync` so one logger can be shared between threads.
pub trait Logger: Send + Sync {
    /// Write one message at `level`, without consulting the threshold.
    fn emit(&self, level: Level, message: fmt::Arguments<'_>);

    /// Write `message` at `level` if the global threshold lets it through.
    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        if level.enabled() {
            self.emit(level, message);
        }
    }

    /// Calling this with no arguments writes nothing, even when debug is enabled.
    fn debug(&self, args: &[&dyn fmt::Display]) {
        if args.is_empty() {
            return;
        }
        emit_concat(self, Level::Debug, args);
    }
    fn debugf(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Debug, message);
    }

    fn info(&self, args: &[&dyn fmt::Display]) {
        emit_concat(self, Level::Info, args);
    }
    fn infof(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Info, message);
    }

    fn warn(&self, args: &[&dyn fmt::Display]) {
        emit_concat(self, Level::Warn, args);
    }
    fn warnf(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Warn, message);
    }

    fn error(&self, args: &[&dyn fmt::Display]) {
        emit_concat(self, Level::Error, args);
    }
    fn errorf(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Error, message);
    }

    fn fatal(&self, args: &[&dyn fmt::Display]) {
        emit_concat(self, Level::Fatal, args);
    }
    fn fatalf(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Fatal, message);
    }

    fn panic(&self, args: &[&dyn fmt::Display]) {
        emit_concat(self, Level::Panic, args);
    }
    fn panicf(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Panic, message);
    }
}

/// The general purpose logger: a sink, a namespace and line flags.
///
/// Built once and never re-pointed. There is no close; the sink lives until the
/// logger is dropped (for the default logger, until the process exits).
#[derive(Debug)]
pub struct SentinelLogger {
    sink: Sink,
    namespace: String,
    flags: LineFlags,
}

impl SentinelLogger {
    /// Binds an already-built sink.
    pub fn new(sink: Sink, namespace: impl Into<String>, flags: LineFlags) -> Self {
        Self {
            sink,
            namespace: namespace.into(),
            flags,
        }
    }

    /// Opens `file_name` under the log base directory in append mode.
    ///
    /// The directory is created if it is missing. A file that cannot be opened is
    /// returned as an error; see [`SentinelLogger::new_file_logger_or_exit`] for the
    /// terminate-on-failure variant.
    pub fn new_file_logger(
        file_name: &str,
        namespace: impl Into<String>,
        flags: LineFlags,
    ) -> Result<Self> {
        Self::open_in(&log_base_dir(), file_name, namespace, flags)
    }

    /// Like [`SentinelLogger::new_file_logger`] but with an explicit directory.
    pub fn open_in(
        dir: &Path,
        file_name: &str,
        namespace: impl Into<String>,
        flags: LineFlags,
    ) -> Result<Self> {
        let sink = Sink::open_append(dir, file_name)?;
        Ok(Self::new(sink, namespace, flags))
    }

    /// Opens a file logger or terminates the process with status 1.
    ///
    /// For callers that treat a logger which cannot persist as unrecoverable.
    pub fn new_file_logger_or_exit(
        file_name: &str,
        namespace: impl Into<String>,
        flags: LineFlags,
    ) -> Self {
        match Self::new_file_logger(file_name, namespace, flags) {
            Ok(logger) => logger,
            Err(e) => exit_on_open_failure(&e),
        }
    }

    pub fn stdout(namespace: impl Into<String>, flags: LineFlags) -> Self {
        Self::new(Sink::stdout(), namespace, flags)
    }

    pub fn stderr(namespace: impl Into<String>, flags: LineFlags) -> Self {
        Self::new(Sink::stderr(), namespace, flags)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        namespace: impl Into<String>,
        flags: LineFlags,
    ) -> Self {
        Self::new(Sink::from_writer(writer), namespace, flags)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn flags(&self) -> LineFlags {
        self.flags
    }

    /// Backing file for file loggers.
    pub fn path(&self) -> Option<&Path> {
        self.sink.path()
    }
}

impl Logger for SentinelLogger {
    fn emit(&self, level: Level, message: fmt::Arguments<'_>) {
        let body = format!("[{}] [{}] {}", self.namespace, level.label(), message);
        self.sink.write_line(self.flags, &body);
    }
}
