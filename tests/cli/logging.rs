use crate::cli::support::munigraph;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_default_level_hides_debug_messages() {
    let dir = tempdir().unwrap();

    munigraph(dir.path())
        .arg("info")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    let dir = tempdir().unwrap();

    munigraph(dir.path())
        .args(["--verbose", "info"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("open_model"));
}

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();

    munigraph(dir.path())
        .args(["--log-level", "debug", "reset"])
        .assert()
        .success()
        .stderr(predicate::str::contains("save_model"));
}

#[test]
fn test_log_env_var_overrides_level() {
    let dir = tempdir().unwrap();

    munigraph(dir.path())
        .env("MUNIGRAPH_LOG", "munigraph=debug")
        .arg("info")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_json_emits_structured_lines() {
    let dir = tempdir().unwrap();

    let output = munigraph(dir.path())
        .args(["--verbose", "--log-json", "info"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let line: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(line.get("level").is_some());
}

#[test]
fn test_logs_stay_off_stdout() {
    let dir = tempdir().unwrap();

    munigraph(dir.path())
        .args(["--verbose", "info"])
        .assert()
        .success()
        .stdout("Municipalities: 9\nRoads: 10\n");
}

#[test]
fn test_clap_error_json_envelope() {
    let dir = tempdir().unwrap();

    let output = munigraph(dir.path())
        .args(["--format", "json", "add-edge", "Mixco"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}
