//! The default logger when `sentinel-record.log` cannot be opened.
//!
//! Own test binary so the singleton starts unbuilt. The exiting path runs in a child
//! copy of this binary, selected through `DEFAULT_CHILD_DIR`.

use sentinel_log::default_logger::try_default_logger;
use sentinel_log::{
    LogError, RECORD_LOG_FILE_NAME, default_logger, set_log_base_dir, try_init_default_logger,
};
use serial_test::serial;
use std::process::Command;
use tempfile::tempdir;

const DEFAULT_CHILD_DIR: &str = "SENTINEL_LOG_DEFAULT_CHILD_DIR";

/// Base directory whose record file path is taken by a directory.
fn blocked_base_dir() -> tempfile::TempDir {
    let temp = tempdir().unwrap();
    std::fs::create_dir(temp.path().join(RECORD_LOG_FILE_NAME)).unwrap();
    temp
}

#[test]
#[serial]
fn test_try_init_reports_open_error_and_stays_unset() {
    if std::env::var_os(DEFAULT_CHILD_DIR).is_some() {
        return;
    }

    let temp = blocked_base_dir();
    set_log_base_dir(temp.path());

    let err = try_init_default_logger().unwrap_err();
    assert!(
        matches!(err, LogError::OpenFile { ref path, .. } if path.ends_with(RECORD_LOG_FILE_NAME))
    );
    assert!(try_default_logger().is_none());
}

#[test]
#[serial]
fn test_default_logger_exits_on_open_failure() {
    if let Some(dir) = std::env::var_os(DEFAULT_CHILD_DIR) {
        set_log_base_dir(dir);
        let logger = default_logger();
        panic!("default logger was built with path {:?}", logger.path());
    }

    let temp = blocked_base_dir();
    let output = Command::new(std::env::current_exe().unwrap())
        .args([
            "test_default_logger_exits_on_open_failure",
            "--exact",
            "--nocapture",
            "--test-threads=1",
        ])
        .env(DEFAULT_CHILD_DIR, temp.path())
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
    assert!(stderr.contains("Failed to operate the log file"), "{stderr}");
    assert!(stderr.contains(RECORD_LOG_FILE_NAME), "{stderr}");
}
