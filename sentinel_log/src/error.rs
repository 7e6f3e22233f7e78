use std::path::PathBuf;

/// Errors raised while setting up loggers.
///
/// Emitting never produces one of these; only construction and parsing do.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to create the log directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to operate the log file '{}': {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Log directory path '{}' exists but is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Unknown log level '{0}' (expected debug, info, warn, error, fatal or panic)")]
    UnknownLevel(String),
}

pub type Result<T, E = LogError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_file_message_names_path() {
        let err = LogError::OpenFile {
            path: PathBuf::from("/var/log/csp/x.log"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        let msg = err.to_string();
        assert!(msg.contains("/var/log/csp/x.log"));
        assert!(msg.starts_with("Failed to operate the log file"));
    }

    #[test]
    fn test_unknown_level_message() {
        let err = LogError::UnknownLevel("verbose".to_string());
        assert!(err.to_string().contains("'verbose'"));
    }
}
