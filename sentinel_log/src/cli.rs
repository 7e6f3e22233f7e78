//! # sentinel-log CLI
//!
//! Appends one message to a log file from the shell, using the same line format,
//! directory lookup and threshold rules as the library:
//!
//! ```text
//! sentinel-log --namespace deploy warn "rollout paused at" 40%
//! ```

use crate::config::LogConfig;
use crate::console::init_console_logging;
use crate::default_logger::{DEFAULT_NAMESPACE, RECORD_LOG_FILE_NAME};
use crate::level::Level;
use crate::logger::{Logger, SentinelLogger};
use crate::sink::LineFlags;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Append a leveled, namespaced line to a sentinel log file.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Cli {
    /// TOML file with level, log_dir and timestamp settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log base directory (overrides config and SENTINEL_LOG_DIR)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Log file name inside the base directory
    #[arg(long, default_value = RECORD_LOG_FILE_NAME)]
    pub file: String,

    /// Namespace shown in brackets on every line
    #[arg(long, default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Minimum level to write (overrides config and SENTINEL_LOG_LEVEL)
    #[arg(long)]
    pub threshold: Option<Level>,

    /// Write lines without the date/time prefix
    #[arg(long)]
    pub no_timestamp: bool,

    /// Print diagnostics to stderr
    #[arg(long, short)]
    pub verbose: bool,

    /// Level of the message: debug, info, warn, error, fatal or panic
    pub level: Level,

    /// Message words, joined with single spaces
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}

impl Cli {
    /// Effective configuration: file, then environment, then command-line flags.
    pub fn resolve_config(&self) -> Result<LogConfig> {
        let config = match &self.config {
            Some(path) => LogConfig::load(path)?,
            None => LogConfig::default(),
        };
        let mut config = config.with_env()?;
        if let Some(dir) = &self.dir {
            config.log_dir = Some(dir.clone());
        }
        if let Some(threshold) = self.threshold {
            config.level = threshold;
        }
        Ok(config)
    }
}

/// Runs one invocation. Returns the logger so callers can inspect the target file.
pub fn run(cli: Cli) -> Result<SentinelLogger> {
    if cli.verbose {
        init_console_logging();
    }

    let config = cli.resolve_config()?;
    config.apply();

    let flags = if cli.no_timestamp {
        LineFlags::NONE
    } else {
        config.flags()
    };
    let logger = SentinelLogger::new_file_logger(&cli.file, cli.namespace.as_str(), flags)
        .context("Cannot open log file")?;

    let message = cli.message.join(" ");
    logger.log(cli.level, format_args!("{message}"));
    Ok(logger)
}
