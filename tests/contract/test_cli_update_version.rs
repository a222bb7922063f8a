use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Contract tests for `vercat update-version`

fn write_catalog(dir: &TempDir, version_line: &str) -> PathBuf {
    let path = dir.path().join("libs.versions.toml");
    fs::write(&path, format!("[versions]\n{}\nother = \"2.0.0\"\n", version_line)).unwrap();
    path
}

fn update(catalog: &PathBuf, current: &str) -> Command {
    let mut cmd = Command::cargo_bin("vercat").unwrap();
    cmd.args([
        "update-version",
        "--file",
        catalog.to_str().unwrap(),
        "--alias",
        "myGame",
        "--project-version",
        current,
    ]);
    cmd
}

#[test]
fn test_update_version_prints_next_and_rewrites() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(&temp_dir, "myGame = \"1.0.0\"");

    update(&catalog, "1.0.0")
        .assert()
        .success()
        .stdout(predicate::str::diff("1.0.1\n"));

    let content = fs::read_to_string(&catalog).unwrap();
    assert!(content.contains("myGame = \"1.0.1\""));
    assert!(content.contains("other = \"2.0.0\""));
}

#[test]
fn test_update_version_carries_past_999() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(&temp_dir, "myGame = \"1.999.999\"");

    update(&catalog, "1.999.999")
        .assert()
        .success()
        .stdout(predicate::str::diff("2.0.0\n"));
}

#[test]
fn test_update_version_release_becomes_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(&temp_dir, "myGame = \"1.0.0-RELEASE\"");

    update(&catalog, "1.0.0-RELEASE")
        .assert()
        .success()
        .stdout(predicate::str::diff("1.0.1-SNAPSHOT\n"));

    let content = fs::read_to_string(&catalog).unwrap();
    assert!(content.contains("myGame = \"1.0.1-SNAPSHOT\""));
}

#[test]
fn test_update_version_rejects_dev_marker() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(&temp_dir, "myGame = \"DEV\"");

    update(&catalog, "DEV")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid version"));
}

#[test]
fn test_update_version_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(&temp_dir, "myGame = \"0.0.0\"");

    let output = update(&catalog, "0.0.0")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let response: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(response["status"], "success");
    assert_eq!(response["previous_version"], "0.0.0");
    assert_eq!(response["next_version"], "1.0.0");
}
