//! Command-line contract tests against the built binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn cli(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_appicons-cli"))
        .arg("--root")
        .arg(root)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn cli_missing_input_exits_non_zero_and_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.png");

    let output = cli(dir.path(), &["--input", missing.to_str().unwrap()]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Input file does not exist"), "stderr: {stderr}");
    assert!(stderr.contains("nope.png"), "stderr: {stderr}");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn cli_default_run_exits_zero_and_writes_set() {
    let dir = tempfile::tempdir().unwrap();

    let output = cli(dir.path(), &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Generated iOS app icons in: "), "stdout: {stdout}");

    let catalog = dir.path().join("Resources").join("Assets.xcassets");
    let set = catalog.join("AppIcon.appiconset");
    // 18 icons, the master image and the icon-set manifest.
    assert_eq!(fs::read_dir(&set).unwrap().count(), 20);
    assert!(catalog.join("Contents.json").is_file());
}

#[test]
fn cli_json_report() {
    let dir = tempfile::tempdir().unwrap();

    let output = cli(dir.path(), &["--use-default", "--json"]);

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["source"]["origin"], "synthesized");
    assert_eq!(report["export"]["icons"].as_array().unwrap().len(), 18);
}

#[test]
fn cli_positional_argument_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    let output = cli(dir.path(), &["icon.png"]);

    assert!(!output.status.success());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
