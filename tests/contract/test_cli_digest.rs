use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Contract tests for `vercat digest`

#[test]
fn test_digest_single_file_line_format() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("artifact.jar");
    fs::write(&path, b"hello").unwrap();

    Command::cargo_bin("vercat")
        .unwrap()
        .args(["digest", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("artifact.jar"))
        .stdout(predicate::str::contains(
            "[SHA-1]: aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d",
        ))
        .stdout(predicate::str::contains(
            "[SHA-256]: 2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
        ));
}

#[test]
fn test_digest_prints_message_heading_first() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a.txt");
    fs::write(&path, b"x").unwrap();

    Command::cargo_bin("vercat")
        .unwrap()
        .args([
            "digest",
            path.to_str().unwrap(),
            "--message",
            "Artifact digests:",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Artifact digests:\n"));
}

#[test]
fn test_digest_walks_directories() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), b"a").unwrap();
    let sub = temp_dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("b.txt"), b"b").unwrap();

    Command::cargo_bin("vercat")
        .unwrap()
        .args(["digest", temp_dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("b.txt"));
}

#[test]
fn test_digest_depth_bound_skips_deeper_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("top.txt"), b"top").unwrap();
    let deep = temp_dir.path().join("one").join("two");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("deep.txt"), b"deep").unwrap();

    Command::cargo_bin("vercat")
        .unwrap()
        .args([
            "digest",
            temp_dir.path().to_str().unwrap(),
            "--max-depth",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("top.txt"))
        .stdout(predicate::str::contains("deep.txt").not());
}

#[test]
fn test_digest_missing_target_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("no-such-file");

    Command::cargo_bin("vercat")
        .unwrap()
        .args(["digest", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must exist"));
}
