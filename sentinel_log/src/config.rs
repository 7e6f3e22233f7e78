//! # Logging Configuration
//!
//! Startup settings for the logging facility, read from a TOML file and/or the
//! environment and then applied once:
//!
//! ```toml
//! level = "info"
//! log_dir = "/var/log/sentinel"
//!
//! [timestamp]
//! date = true
//! time = true
//! microseconds = false
//! utc = false
//! ```
//!
//! Every field is optional. Environment variables override the file:
//!
//! - `SENTINEL_LOG_LEVEL`: global threshold (`debug` .. `panic`)
//! - `SENTINEL_LOG_DIR`: log base directory

use crate::level::{Level, set_global_level};
use crate::log_dir::{LOG_DIR_ENV, set_log_base_dir};
use crate::sink::LineFlags;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the global threshold.
pub const LOG_LEVEL_ENV: &str = "SENTINEL_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Global minimum severity.
    pub level: Level,
    /// Log base directory; when unset the usual lookup applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
    /// Metadata prefixed to file log lines.
    pub timestamp: TimestampConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimestampConfig {
    pub date: bool,
    pub time: bool,
    pub microseconds: bool,
    pub utc: bool,
}

impl Default for TimestampConfig {
    fn default() -> Self {
        Self {
            date: true,
            time: true,
            microseconds: false,
            utc: false,
        }
    }
}

impl TimestampConfig {
    pub fn flags(&self) -> LineFlags {
        let mut flags = LineFlags::NONE;
        if self.date {
            flags |= LineFlags::DATE;
        }
        if self.time {
            flags |= LineFlags::TIME;
        }
        if self.microseconds {
            flags |= LineFlags::MICROSECONDS;
        }
        if self.utc {
            flags |= LineFlags::UTC;
        }
        flags
    }
}

impl LogConfig {
    /// Reads a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read log config {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse log config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Overlays `SENTINEL_LOG_LEVEL` and `SENTINEL_LOG_DIR` from the process environment.
    pub fn with_env(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Overlays values from `lookup`, which maps variable names to values.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(level) = lookup(LOG_LEVEL_ENV).filter(|v| !v.trim().is_empty()) {
            self.level = level
                .parse::<Level>()
                .with_context(|| format!("Invalid {LOG_LEVEL_ENV}"))?;
        }
        if let Some(dir) = lookup(LOG_DIR_ENV).filter(|v| !v.is_empty()) {
            self.log_dir = Some(PathBuf::from(dir));
        }
        Ok(self)
    }

    /// Line flags for file loggers built from this config.
    pub fn flags(&self) -> LineFlags {
        self.timestamp.flags()
    }

    /// Sets the global threshold and, if configured, the log base directory.
    pub fn apply(&self) {
        set_global_level(self.level);
        if let Some(dir) = &self.log_dir {
            set_log_base_dir(dir);
        }
        tracing::debug!(level = %self.level, log_dir = ?self.log_dir, "applied log config");
    }
}
