//! Tests for CLI argument parsing.
//!
//! These run the built binary; every case here fails or exits before the
//! terminal UI starts.

use std::process::Command;

fn dexview_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dexview"));
    // Keep the user's real config out of the picture.
    cmd.arg("--config").arg("/nonexistent/dexview/config.toml");
    cmd
}

#[test]
fn test_help_lists_overrides() {
    let output = dexview_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("--page-size"));
    assert!(stdout.contains("--limit"));
    assert!(stdout.contains("Override the number of rows per page"));
}

#[test]
fn test_zero_page_size_exits_with_error() {
    let output = dexview_cmd()
        .args(["--page-size", "0"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed: view.page_size"));
}

#[test]
fn test_non_http_base_url_exits_with_error() {
    let output = dexview_cmd()
        .args(["--base-url", "file:///etc/passwd"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must start with http:// or https://"));
}

#[test]
fn test_unparseable_config_file_exits_with_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[view\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_dexview"))
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"));
}

#[test]
fn test_non_numeric_limit_is_rejected_by_parser() {
    let output = dexview_cmd()
        .args(["--limit", "lots"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--limit"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_location_is_read_without_flag() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_dir = dir.path().join("dexview");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[view]\npage_size = 0\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_dexview"))
        .env("XDG_CONFIG_HOME", dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("view.page_size must be greater than 0"));
}
