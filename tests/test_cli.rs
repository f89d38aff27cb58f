//! Runs the `sqlconform` binary and checks its exit status and console output.

use sqlconform::registry::CASES;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn sqlconform(fixture: &NamedTempFile, exec_env: Option<&str>, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sqlconform"));
    cmd.arg("--database").arg(fixture.path()).args(args);
    cmd.env_remove("RUST_LOG");
    match exec_env {
        Some(value) => cmd.env("SQLITE_EXEC", value),
        None => cmd.env_remove("SQLITE_EXEC"),
    };
    cmd.output().expect("Failed to run sqlconform")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_mismatch_exits_1_with_diagnostics() {
    let fixture = NamedTempFile::new().expect("Failed to create fixture");
    let output = sqlconform(&fixture, Some("echo"), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        format!(
            "Running test: select-const-1\n\
             Test FAILED: 'SELECT 1'\n\
             returned '{} SELECT 1'\n\
             expected '1'\n",
            fixture.path().display()
        )
    );
}

#[test]
fn test_exec_flag_takes_precedence_over_env() {
    let fixture = NamedTempFile::new().expect("Failed to create fixture");
    let output = sqlconform(&fixture, Some("sqlconform-missing-engine"), &["--exec", "echo"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Running test: select-const-1\nTest FAILED: 'SELECT 1'\n"));
}

#[test]
fn test_missing_engine_exits_2() {
    let fixture = NamedTempFile::new().expect("Failed to create fixture");
    let output = sqlconform(&fixture, Some("sqlconform-missing-engine"), &[]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "Running test: select-const-1\n");

    let err = stderr(&output);
    assert!(err.contains("Failed to start engine sqlconform-missing-engine"));
    assert_eq!(err.matches("os error").count(), 1, "cause repeated: {}", err);
}

#[test]
fn test_missing_fixture_exits_2_before_running() {
    let output = Command::new(env!("CARGO_BIN_EXE_sqlconform"))
        .args(["--exec", "echo", "--database", "no/such/fixture.db"])
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run sqlconform");

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("Fixture database no/such/fixture.db does not exist"));
}

#[test]
fn test_empty_env_falls_back_to_default_engine() {
    let fixture = NamedTempFile::new().expect("Failed to create fixture");
    let output = sqlconform(&fixture, Some(""), &[]);

    // sqlite3 may or may not be installed; either way it is what gets run.
    let err = stderr(&output);
    assert!(!err.contains("Failed to start engine :"), "spawned empty name: {}", err);
    match output.status.code() {
        Some(1) => assert!(stdout(&output).starts_with("Running test: select-const-1\n")),
        Some(2) => assert!(err.contains("Failed to start engine sqlite3")),
        other => panic!("unexpected status {:?}: {}", other, err),
    }
}

#[test]
fn test_list_exits_0_without_invoking_engine() {
    let fixture = NamedTempFile::new().expect("Failed to create fixture");
    let output = sqlconform(&fixture, Some("sqlconform-missing-engine"), &["--list"]);

    assert_eq!(output.status.code(), Some(0));
    let expected: String = CASES.iter().map(|c| format!("{}\n", c.name)).collect();
    assert_eq!(stdout(&output), expected);
}
