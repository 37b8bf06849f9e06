//! Tests for command-line handling of the binary.
//!
//! These only exercise paths that exit before the terminal UI starts.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn counter_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_advanced-counter"))
}

#[test]
fn test_help_lists_options() {
    let output = counter_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--config", "--storage", "--debounce-ms", "--log-file"] {
        assert!(stdout.contains(flag), "missing {flag} in help:\n{stdout}");
    }
}

#[test]
fn test_invalid_config_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[counter\n").unwrap();

    let output = counter_cmd()
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"));
}

#[test]
fn test_zero_debounce_flag_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let output = counter_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("absent.toml"))
        .arg("--debounce-ms")
        .arg("0")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid configuration"));
}
