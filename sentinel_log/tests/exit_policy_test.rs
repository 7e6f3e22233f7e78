//! Terminate-on-failure construction.
//!
//! The exiting paths run in a child copy of this test binary, selected through
//! `EXIT_CHILD_DIR`, so the parent can check the exit status and stderr.

use sentinel_log::{LineFlags, SentinelLogger, set_log_base_dir};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const EXIT_CHILD_DIR: &str = "SENTINEL_LOG_EXIT_CHILD_DIR";

/// Re-runs the single test `name` of this binary with `EXIT_CHILD_DIR` set to `dir`.
fn run_child(name: &str, dir: &Path) -> Output {
    Command::new(std::env::current_exe().unwrap())
        .args([name, "--exact", "--nocapture", "--test-threads=1"])
        .env(EXIT_CHILD_DIR, dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_or_exit_terminates_on_unopenable_file() {
    if let Some(dir) = std::env::var_os(EXIT_CHILD_DIR) {
        set_log_base_dir(dir);
        let _ = SentinelLogger::new_file_logger_or_exit("taken.log", "svc", LineFlags::NONE);
        panic!("new_file_logger_or_exit returned for an unopenable file");
    }

    let temp = tempdir().unwrap();
    std::fs::create_dir(temp.path().join("taken.log")).unwrap();

    let output = run_child("test_or_exit_terminates_on_unopenable_file", temp.path());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
    assert!(stderr.contains("Failed to operate the log file"), "{stderr}");
    assert!(stderr.contains("taken.log"), "{stderr}");
}

#[test]
fn test_or_exit_returns_logger_when_file_opens() {
    if std::env::var_os(EXIT_CHILD_DIR).is_some() {
        return;
    }

    let temp = tempdir().unwrap();
    let output = run_child("test_or_exit_child_opens", temp.path());
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(temp.path().join("ok.log").is_file());
}

#[test]
fn test_or_exit_child_opens() {
    let Some(dir) = std::env::var_os(EXIT_CHILD_DIR) else {
        return;
    };
    set_log_base_dir(dir);
    let logger = SentinelLogger::new_file_logger_or_exit("ok.log", "svc", LineFlags::NONE);
    assert!(logger.path().is_some());
}

#[test]
fn test_cli_fails_on_unopenable_file() {
    if std::env::var_os(EXIT_CHILD_DIR).is_some() {
        return;
    }

    let temp = tempdir().unwrap();
    std::fs::create_dir(temp.path().join("taken.log")).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_sentinel-log"))
        .arg("--dir")
        .arg(temp.path())
        .args(["--file", "taken.log", "error", "boom"])
        .env_remove("SENTINEL_LOG_LEVEL")
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
    assert!(stderr.contains("Cannot open log file"), "{stderr}");
    assert!(stderr.contains("Failed to operate the log file"), "{stderr}");
}
