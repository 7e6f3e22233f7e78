//! Severity levels and the process-wide threshold.
//!
//! Levels are ordered from least to most severe and filtering is a plain numeric
//! comparison against the global threshold. The discriminants are part of the
//! contract: the threshold is stored as a `u8`, so the order must never change.
//!
//! The threshold is an `AtomicU8`. Any thread may change it at any time and every
//! logger observes the new value on its next emit call.

use crate::error::LogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
#[repr(u8)]
pub enum Level {
    #[default]
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
    Panic = 5,
}

impl Level {
    /// Every level, least severe first.
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Panic,
    ];

    /// The label written into log lines. `Warn` is spelled out as `WARNING`.
    pub const fn label(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARNING",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Panic => "PANIC",
        }
    }

    /// Lowercase name, as accepted by [`FromStr`] and used in config files.
    pub const fn name(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::Panic => "panic",
        }
    }

    /// Inverse of `level as u8`. Out-of-range values saturate to `Panic`.
    pub const fn from_u8(value: u8) -> Level {
        match value {
            0 => Level::Debug,
            1 => Level::Info,
            2 => Level::Warn,
            3 => Level::Error,
            4 => Level::Fatal,
            _ => Level::Panic,
        }
    }

    /// Returns true if a message at this level passes the current global threshold.
    #[inline]
    pub fn enabled(self) -> bool {
        self >= global_level()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            "panic" => Ok(Level::Panic),
            _ => Err(LogError::UnknownLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = LogError;

    fn try_from(value: String) -> Result<Self, LogError> {
        value.parse()
    }
}

impl From<Level> for &'static str {
    fn from(level: Level) -> Self {
        level.name()
    }
}

static GLOBAL_LEVEL: AtomicU8 = AtomicU8::new(Level::Debug as u8);

/// Overwrites the process-wide minimum severity.
pub fn set_global_level(level: Level) {
    GLOBAL_LEVEL.store(level as u8, Ordering::Release);
}

/// Current process-wide minimum severity. Starts at [`Level::Debug`].
pub fn global_level() -> Level {
    Level::from_u8(GLOBAL_LEVEL.load(Ordering::Acquire))
}
