//! The process-wide default logger.
//!
//! Built on first use and never rebuilt. Concurrent first callers all wait on the
//! same construction and observe one logger and one open file. It writes to
//! [`RECORD_LOG_FILE_NAME`] under the log base directory with date/time prefixes.
//!
//! [`default_logger`] treats an unopenable record file as fatal: the error goes to
//! the diagnostic stream and the process exits with status 1. Applications that
//! want to handle that case themselves call [`try_init_default_logger`] first.

use crate::error::Result;
use crate::log_dir::log_base_dir;
use crate::logger::{SentinelLogger, exit_on_open_failure};
use crate::sink::LineFlags;
use std::sync::{Mutex, OnceLock};

/// File the default logger appends to.
pub const RECORD_LOG_FILE_NAME: &str = "sentinel-record.log";

/// Namespace of the default logger.
pub const DEFAULT_NAMESPACE: &str = "default";

static DEFAULT_LOGGER: OnceLock<SentinelLogger> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Returns the default logger, building it on the first call.
///
/// Exits the process if the record file cannot be opened.
pub fn default_logger() -> &'static SentinelLogger {
    match try_init_default_logger() {
        Ok(logger) => logger,
        Err(e) => exit_on_open_failure(&e),
    }
}

/// Builds the default logger if needed and returns it, or the open error.
///
/// A failed attempt leaves the singleton unset; nothing is opened twice once a
/// call has succeeded.
pub fn try_init_default_logger() -> Result<&'static SentinelLogger> {
    if let Some(logger) = DEFAULT_LOGGER.get() {
        return Ok(logger);
    }

    let _guard = INIT_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(logger) = DEFAULT_LOGGER.get() {
        return Ok(logger);
    }

    let logger = SentinelLogger::open_in(
        &log_base_dir(),
        RECORD_LOG_FILE_NAME,
        DEFAULT_NAMESPACE,
        LineFlags::STD,
    )?;
    Ok(DEFAULT_LOGGER.get_or_init(|| logger))
}

/// Returns the default logger only if some earlier call already built it.
pub fn try_default_logger() -> Option<&'static SentinelLogger> {
    DEFAULT_LOGGER.get()
}
