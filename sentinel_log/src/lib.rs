//! # Sentinel Log
//!
//! A process-wide leveled logger. Components emit messages tagged with a [`Level`] and
//! a namespace; every message is checked against one global minimum severity and, when
//! accepted, written as a single line to the logger's sink (console or an append-only
//! file under the log base directory).
//!
//! ## Modules
//!
//! - **`cli`**: The `sentinel-log` command that appends one line from the shell.
//!
//! - **`level`**: The ordered `Level` enumeration and the global threshold
//!   (`set_global_level` / `global_level`).
//!
//! - **`sink`**: Line flags (timestamp metadata) and the synchronized `Sink` writer,
//!   including the create/append file opener.
//!
//! - **`logger`**: The `Logger` trait with its per-level emit methods and the concrete
//!   `SentinelLogger`.
//!
//! - **`default_logger`**: The lazily built process-wide logger bound to
//!   `sentinel-record.log` in the `default` namespace.
//!
//! - **`log_dir`**: Resolution of the log base directory.
//!
//! - **`console`**: One-time setup of the `tracing` diagnostic stream on stderr.
//!
//! - **`config`**: TOML / environment configuration applied at startup.
//!
//! ```rust,no_run
//! use sentinel_log::{Level, LineFlags, Logger, SentinelLogger, default_logger, set_global_level};
//!
//! set_global_level(Level::Info);
//! default_logger().info(&[&"service started"]);
//!
//! let logger = SentinelLogger::new_file_logger("flow.log", "flow", LineFlags::STD)?;
//! sentinel_log::warnf!(logger, "qps {} over limit {}", 120, 100);
//! # Ok::<(), sentinel_log::LogError>(())
//! ```

pub mod cli;
pub mod config;
pub mod console;
pub mod default_logger;
pub mod error;
pub mod level;
pub mod log_dir;
pub mod logger;
mod macros;
pub mod sink;

pub use config::LogConfig;
pub use console::init_console_logging;
pub use default_logger::{
    DEFAULT_NAMESPACE, RECORD_LOG_FILE_NAME, default_logger, try_init_default_logger,
};
pub use error::{LogError, Result};
pub use level::{Level, global_level, set_global_level};
pub use log_dir::{log_base_dir, set_log_base_dir};
pub use logger::{Logger, SentinelLogger};
pub use sink::{LineFlags, Sink};
