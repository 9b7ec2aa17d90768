// tests/integration/config_file.rs
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("parse.json");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn strict_policy_from_config_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, r#"{"brackets":"strict"}"#);
    Command::new(env!("CARGO_BIN_EXE_period_range"))
        .arg("--config")
        .arg(&path)
        .args(["--bounds", "text", "inspect", "a,b)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a lower bracket"));
}

#[test]
fn broken_config_file_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "{brackets:");
    Command::new(env!("CARGO_BIN_EXE_period_range"))
        .arg("--config")
        .arg(&path)
        .args(["inspect", "empty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid CLI value: --config"));
}
