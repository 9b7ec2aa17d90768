// tests/integration/cli_smoke.rs
use assert_cmd::Command;
use predicates::prelude::*;

fn period_range() -> Command {
    Command::new(env!("CARGO_BIN_EXE_period_range"))
}

#[test]
fn shows_help() {
    period_range()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("period_range"));
}

#[test]
fn inspects_a_shift() {
    period_range()
        .args(["inspect", "[2024-05-01T06:00:00Z,2024-05-01T14:00:00Z)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lower: 2024-05-01T06:00:00Z (inclusive)"))
        .stdout(predicate::str::contains("upper: 2024-05-01T14:00:00Z (exclusive)"));
}

#[test]
fn consecutive_shifts_do_not_overlap() {
    period_range()
        .args([
            "overlaps",
            "[2024-05-01T06:00:00Z,2024-05-01T14:00:00Z)",
            "[2024-05-01T14:00:00Z,2024-05-01T22:00:00Z)",
        ])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn intersects_text_ranges_as_json() {
    let output = period_range()
        .args(["--bounds", "text", "--format", "json", "intersect", "[a,k)", "(c,z]"])
        .output()
        .expect("runs");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["intersection"], "(c,k)");
    assert_eq!(value["empty"], false);
}

#[test]
fn lenient_brackets_warn_on_stderr() {
    period_range()
        .env("RUST_LOG", "warn")
        .args(["--bounds", "text", "inspect", "a,b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("range: [a,b]"))
        .stderr(predicate::str::contains("assuming inclusive"));
}

#[test]
fn strict_brackets_fail() {
    period_range()
        .args(["--bounds", "text", "--strict", "inspect", "a,b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: invalid range 'a,b'"));
}

#[test]
fn malformed_range_fails() {
    period_range()
        .args(["inspect", "[2024-05-01]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing ',' or ';' separator"));
}
