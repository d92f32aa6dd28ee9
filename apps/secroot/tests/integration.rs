//! Integration tests for secroot CLI

use std::fs;
use std::process::Command;
use tempfile::tempdir;

const SECURITY_VARS: [&str; 4] = [
    "ROS_SECURITY_ENABLE",
    "ROS_SECURITY_STRATEGY",
    "ROS_SECURITY_DIRECTORY_OVERRIDE",
    "ROS_SECURITY_ROOT_DIRECTORY",
];

fn secroot() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_secroot"));
    for var in SECURITY_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let output = secroot().arg("--help").output().expect("Failed to execute secroot");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("root"));
    assert!(stdout.contains("options"));
    assert!(stdout.contains("env"));
}

#[test]
fn test_root_resolves_from_root_directory() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("robot").join("talker")).unwrap();

    let output = secroot()
        .env("ROS_SECURITY_ROOT_DIRECTORY", temp.path())
        .args(["root", "/robot/talker"])
        .output()
        .expect("Failed to execute secroot");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim_end().ends_with("talker"));
}

#[test]
fn test_root_fails_without_variables() {
    let output = secroot()
        .args(["root", "/robot/talker"])
        .output()
        .expect("Failed to execute secroot");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("security.root_not_found"));
}

#[test]
fn test_json_mode_failure_keeps_stderr_structured() {
    let output = secroot()
        .args(["--json", "root", "/robot/talker"])
        .output()
        .expect("Failed to execute secroot");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Error: "));
    assert!(stderr.contains("security.root_not_found"));
    for line in stderr.lines().filter(|line| !line.trim().is_empty()) {
        serde_json::from_str::<serde_json::Value>(line).unwrap();
    }
}

#[test]
fn test_options_json_with_override() {
    let temp = tempdir().unwrap();

    let output = secroot()
        .env("ROS_SECURITY_ENABLE", "true")
        .env("ROS_SECURITY_STRATEGY", "Enforce")
        .env("ROS_SECURITY_DIRECTORY_OVERRIDE", temp.path())
        .args(["--json", "options", "anything"])
        .output()
        .expect("Failed to execute secroot");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["enforce"], "enforce");
    assert_eq!(value["root_path"], temp.path().to_str().unwrap());
}

#[test]
fn test_options_disabled_is_permissive() {
    let output = secroot()
        .env("ROS_SECURITY_ENABLE", "false")
        .env("ROS_SECURITY_DIRECTORY_OVERRIDE", "/definitely/not/here")
        .args(["--json", "options", "anything"])
        .output()
        .expect("Failed to execute secroot");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["enforce"], "permissive");
    assert!(value["root_path"].is_null());
}

#[test]
fn test_env_lists_variables() {
    let output = secroot()
        .env("ROS_SECURITY_STRATEGY", "Enforce")
        .arg("env")
        .output()
        .expect("Failed to execute secroot");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ROS_SECURITY_STRATEGY=Enforce"));
    assert!(stdout.contains("ROS_SECURITY_ENABLE=<unset>"));
}
