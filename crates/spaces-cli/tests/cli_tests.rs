//! Integration tests for the spaces-explorer binary.
//!
//! Only paths that stay off the network are exercised here.

use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_spaces-explorer"))
}

#[test]
fn test_options_lists_every_filter() {
    let output = bin().arg("options").output().expect("Failed to run binary");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for prefix in [
        "Library:",
        "License:",
        "Visibility:",
        "Hardware:",
        "Sort By:",
        "Direction:",
        "Max Results:",
    ] {
        assert!(stdout.contains(prefix), "missing {} in:\n{}", prefix, stdout);
    }
}

#[test]
fn test_invalid_filter_exits_with_validation_code() {
    let output = bin()
        .args(["search", "--direction", "Sideways"])
        .env("HF_ENDPOINT", "http://127.0.0.1:9")
        .output()
        .expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unreachable_endpoint_exits_with_remote_code() {
    let output = bin()
        .args(["search", "--endpoint", "http://127.0.0.1:9"])
        .output()
        .expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_limit_out_of_range_is_rejected() {
    let output = bin()
        .args(["search", "--limit", "500"])
        .output()
        .expect("Failed to run binary");
    assert!(!output.status.success());
}

#[test]
fn test_endpoint_flag_overrides_invalid_env_endpoint() {
    let output = bin()
        .args(["search", "--endpoint", "http://127.0.0.1:9"])
        .env("HF_ENDPOINT", "not a url")
        .output()
        .expect("Failed to run binary");

    // The flag wins, so the run reaches the (unreachable) endpoint instead of
    // failing on configuration.
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_invalid_env_endpoint_without_flag_is_config_error() {
    let output = bin()
        .arg("search")
        .env("HF_ENDPOINT", "not a url")
        .output()
        .expect("Failed to run binary");
    assert_eq!(output.status.code(), Some(2));
}
