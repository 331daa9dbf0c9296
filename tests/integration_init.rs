use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn countdown_tz() -> Command {
    assert_cmd::cargo_bin_cmd!("countdown-tz")
}

#[test]
fn test_init_non_interactive_writes_defaults() {
    let dir = TempDir::new().unwrap();

    countdown_tz()
        .args(["init", "-y", "--root", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Created .countdown-tz.toml"));

    let content = fs::read_to_string(dir.path().join(".countdown-tz.toml")).unwrap();
    assert!(content.contains("target = \"2026-01-01 00:00:00\""));
    assert!(!content.contains("zone ="));
}

#[test]
fn test_init_with_zone_and_target() {
    let dir = TempDir::new().unwrap();

    countdown_tz()
        .args([
            "init",
            "-y",
            "--zone",
            "Europe/Paris",
            "--target",
            "2027-01-01",
            "--root",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join(".countdown-tz.toml")).unwrap();
    assert!(content.contains("zone = \"Europe/Paris\""));
    assert!(content.contains("target = \"2027-01-01 00:00:00\""));

    // The generated file drives the countdown
    countdown_tz()
        .env("NO_COLOR", "1")
        .args([
            "countdown",
            "--now",
            "2026-12-31T22:00:00Z",
            "--root",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "0 days : 01 hrs : 00 mins : 00 seconds",
        ));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".countdown-tz.toml"), "zone = \"UTC\"\n").unwrap();

    countdown_tz()
        .args(["init", "-y", "--root", dir.path().to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_rejects_unknown_zone() {
    let dir = TempDir::new().unwrap();

    countdown_tz()
        .args([
            "init",
            "-y",
            "--zone",
            "Mars/Base",
            "--root",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown timezone 'Mars/Base'"));

    assert!(!dir.path().join(".countdown-tz.toml").exists());
}
