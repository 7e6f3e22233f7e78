//! Resolution of the directory that holds every file logger's output.
//!
//! Lookup order:
//!
//! 1. an override installed with [`set_log_base_dir`],
//! 2. the `SENTINEL_LOG_DIR` environment variable,
//! 3. `~/logs/csp` (home directory from the `directories` crate),
//! 4. `<temp>/logs/csp` when no home directory is known.
//!
//! The directory is resolved each time a file logger is constructed, so changing the
//! override only affects loggers built afterwards.

use crate::error::{LogError, Result};
use directories::BaseDirs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Environment variable naming the log base directory.
pub const LOG_DIR_ENV: &str = "SENTINEL_LOG_DIR";

static OVERRIDE: RwLock<Option<PathBuf>> = RwLock::new(None);

/// Installs a process-wide base directory, taking priority over the environment.
pub fn set_log_base_dir(dir: impl Into<PathBuf>) {
    let mut guard = OVERRIDE.write().unwrap_or_else(|e| e.into_inner());
    *guard = Some(dir.into());
}

/// Removes the override installed with [`set_log_base_dir`].
pub fn clear_log_base_dir() {
    let mut guard = OVERRIDE.write().unwrap_or_else(|e| e.into_inner());
    *guard = None;
}

/// Directory under which log files are created.
pub fn log_base_dir() -> PathBuf {
    if let Some(dir) = OVERRIDE
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .as_ref()
    {
        return dir.clone();
    }

    if let Some(dir) = std::env::var_os(LOG_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }

    default_log_dir()
}

fn default_log_dir() -> PathBuf {
    let root = BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(std::env::temp_dir);
    root.join("logs").join("csp")
}

/// Creates `dir` and all missing parents unless it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    match std::fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(LogError::NotADirectory(dir.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => std::fs::create_dir_all(dir)
            .map_err(|source| LogError::CreateDir {
                path: dir.to_path_buf(),
                source,
            }),
        Err(source) => Err(LogError::CreateDir {
            path: dir.to_path_buf(),
            source,
        }),
    }
}
