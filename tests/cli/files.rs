use crate::cli::support::{munigraph, seed_sample, stdout_json, write_config};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_validate_good_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("roads.csv"), "A,B,1\nB,C,2.5\n").unwrap();

    munigraph(dir.path())
        .args(["validate", "roads.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("roads.csv: 2 valid record(s)"));
}

#[test]
fn test_validate_reports_line() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("roads.csv"), "A,B,1\nB,C\n").unwrap();

    munigraph(dir.path())
        .args(["validate", "roads.csv"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 2: expected 3 fields, found 2"))
        .stderr(predicate::str::contains("hint: fix the line"));

    let output = munigraph(dir.path())
        .args(["--format", "json", "validate", "roads.csv"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "malformed_record");
    assert_eq!(json["error"]["line"], 2);
}

#[test]
fn test_validate_rejects_blank_line() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("roads.csv"), "A,B,1\n\nC,D,2\n").unwrap();

    munigraph(dir.path())
        .args(["validate", "roads.csv"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 2: expected 3 fields, found 0"));
}

#[test]
fn test_validate_missing_file() {
    let dir = tempdir().unwrap();

    munigraph(dir.path())
        .args(["validate", "absent.csv"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("edge list not found"));
}

#[test]
fn test_import_replaces_working_file() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());
    fs::write(dir.path().join("roads.csv"), "B,A,1\nB,C,2\n").unwrap();

    munigraph(dir.path())
        .args(["import", "roads.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(3 municipalities, 2 roads)"));

    assert_eq!(
        fs::read_to_string(dir.path().join("edges.csv")).unwrap(),
        "A,B,1\nB,C,2\n"
    );
}

#[test]
fn test_import_bad_file_keeps_working_file() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());
    let before = fs::read_to_string(dir.path().join("edges.csv")).unwrap();
    fs::write(dir.path().join("roads.csv"), "A,B,1\n,C,2\n").unwrap();

    munigraph(dir.path())
        .args(["import", "roads.csv"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 2: node labels must not be empty"));

    assert_eq!(
        fs::read_to_string(dir.path().join("edges.csv")).unwrap(),
        before
    );
}

#[test]
fn test_export_copies_graph() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    let output = munigraph(dir.path())
        .args(["--format", "json", "export", "copy.csv"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["edges"], 10);

    assert_eq!(
        fs::read_to_string(dir.path().join("copy.csv")).unwrap(),
        fs::read_to_string(dir.path().join("edges.csv")).unwrap()
    );
}

#[test]
fn test_file_flag_selects_working_file() {
    let dir = tempdir().unwrap();

    munigraph(dir.path())
        .args(["--file", "other.csv", "reset"])
        .assert()
        .success();

    assert!(dir.path().join("other.csv").exists());
    assert!(!dir.path().join("edges.csv").exists());
}

#[test]
fn test_configured_delimiter() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "data_file = \"roads.tsv\"\n\n[csv]\ndelimiter = \"\\t\"\n");
    fs::write(dir.path().join("roads.tsv"), "A\tB\t1\n").unwrap();

    munigraph(dir.path())
        .args(["add-edge", "B", "A", "-d", "3"])
        .assert()
        .code(3);

    munigraph(dir.path())
        .args(["add-node", "C", "--connect", "B", "-d", "2"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("roads.tsv")).unwrap(),
        "A\tB\t1\nB\tC\t2\n"
    );
}

#[test]
fn test_unreadable_working_file_falls_back_with_warning() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("edges.csv"), "A,B,far\n").unwrap();

    munigraph(dir.path())
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Municipalities: 9"))
        .stderr(predicate::str::contains("edge list unreadable"));
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = tempdir().unwrap();

    munigraph(dir.path())
        .args(["--config", "missing.toml", "info"])
        .assert()
        .code(3);
}

#[test]
fn test_invalid_config_is_a_failure() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "data_file = [\n");

    munigraph(dir.path())
        .arg("info")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
