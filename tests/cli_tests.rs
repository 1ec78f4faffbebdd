//! Integration tests for the allocflow CLI
//!
//! These tests run the actual CLI binary and verify output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get the binary to test
fn allocflow_cmd() -> Command {
    Command::cargo_bin("allocflow").unwrap()
}

const SAMPLE_TREE: &str = r#"{
  "name": "Root",
  "value": 100.0,
  "leafs": [
    { "name": "A", "value": 60.0, "leafs": [] },
    { "name": "B", "value": 40.0, "leafs": [] }
  ]
}"#;

#[test]
fn test_help_flag() {
    allocflow_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "chart-data preparation for allocation dashboards",
        ));
}

// ============================================================================
// graph subcommand
// ============================================================================

#[test]
fn test_graph_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tree.json");
    fs::write(&path, SAMPLE_TREE).unwrap();

    allocflow_cmd()
        .args(["graph", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"name":"Root"}"#))
        .stdout(predicate::str::contains(
            r#"{"source":0,"target":1,"value":60.0}"#,
        ))
        .stdout(predicate::str::contains(
            r#"{"source":0,"target":2,"value":40.0}"#,
        ));
}

#[test]
fn test_graph_from_stdin() {
    allocflow_cmd()
        .args(["graph", "-"])
        .write_stdin(r#"{"name":"Solo","value":1.0,"leafs":[]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""links":[]"#));
}

#[test]
fn test_graph_pretty_output() {
    allocflow_cmd()
        .args(["graph", "-", "--pretty"])
        .write_stdin(SAMPLE_TREE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"nodes\": ["));
}

#[test]
fn test_graph_rejects_malformed_tree() {
    allocflow_cmd()
        .args(["graph", "-"])
        .write_stdin(r#"{"value": 1.0}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON parse error"))
        .stderr(predicate::str::contains("name/value/leafs"));
}

#[test]
fn test_graph_missing_file() {
    allocflow_cmd()
        .args(["graph", "no-such-file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"))
        .stderr(predicate::str::contains("Check file path"));
}

// ============================================================================
// scale subcommand
// ============================================================================

#[test]
fn test_scale_linear() {
    allocflow_cmd()
        .args(["scale", "linear", "-"])
        .write_stdin("[0.0, 2.5, 100.0]")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""kind":"linear""#))
        .stdout(predicate::str::contains("[0.0,2.5,100.0]"));
}

#[test]
fn test_scale_log_uses_series_threshold() {
    allocflow_cmd()
        .args(["scale", "log", "-"])
        .write_stdin("[0.0, 0.5, 1000.0]")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""kind":"symlog""#))
        .stdout(predicate::str::contains(r#""threshold":0.5"#));
}

#[test]
fn test_scale_unknown_mode_fails_with_suggestion() {
    allocflow_cmd()
        .args(["scale", "bogus", "-"])
        .write_stdin("[1.0]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown scale mode 'bogus'"))
        .stderr(predicate::str::contains("Use 'linear' or 'log'"));
}

#[test]
fn test_scale_log_rejects_all_zero_series() {
    allocflow_cmd()
        .args(["scale", "log", "-"])
        .write_stdin("[0.0, 0.0]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no non-zero magnitude"));
}
