use crate::cli::support::{munigraph, seed_sample, stdout_json};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_reset_writes_sample_file() {
    let dir = tempdir().unwrap();

    munigraph(dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored the sample dataset"));

    let content = fs::read_to_string(dir.path().join("edges.csv")).unwrap();
    assert_eq!(content.lines().count(), 10);
    assert!(content.contains("Guatemala City,Mixco,11\n"));
}

#[test]
fn test_add_edge_persists() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    munigraph(dir.path())
        .args(["add-edge", "Mixco", "Chinautla", "--distance", "14.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added road Mixco -- Chinautla (14.5 km)"));

    munigraph(dir.path())
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Roads: 11"));

    let content = fs::read_to_string(dir.path().join("edges.csv")).unwrap();
    assert!(content.contains("Chinautla,Mixco,14.5\n"));
}

#[test]
fn test_add_edge_trims_names() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    munigraph(dir.path())
        .args(["add-edge", "  Mixco ", " Amatitlan", "-d", "20"])
        .assert()
        .success();

    munigraph(dir.path())
        .args(["neighbors", "Amatitlan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mixco (20 km)"));
}

#[test]
fn test_add_edge_creates_missing_endpoint() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    munigraph(dir.path())
        .args(["add-edge", "Mixco", "Antigua", "--distance", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Added road Mixco -- Antigua (40 km); new municipality Antigua",
        ));

    munigraph(dir.path())
        .arg("info")
        .assert()
        .stdout(predicate::str::contains("Municipalities: 10"))
        .stdout(predicate::str::contains("Roads: 11"));
}

#[test]
fn test_rebuild_after_clear() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());
    munigraph(dir.path()).arg("clear").assert().success();

    munigraph(dir.path())
        .args(["add-edge", "A", "B", "-d", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new municipality A, B"));

    munigraph(dir.path())
        .args(["add-node", "C", "--connect", "B", "-d", "2"])
        .assert()
        .success();

    munigraph(dir.path())
        .arg("info")
        .assert()
        .success()
        .stdout("Municipalities: 3\nRoads: 2\n");
}

#[test]
fn test_add_edge_rejects_blank_endpoint() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());
    let before = fs::read_to_string(dir.path().join("edges.csv")).unwrap();

    munigraph(dir.path())
        .args(["add-edge", "Mixco", "  ", "--distance", "4"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must not be empty"));

    let after = fs::read_to_string(dir.path().join("edges.csv")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_remove_edge_unknown_endpoint() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    munigraph(dir.path())
        .args(["remove-edge", "Mixco", "Antigua"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node 'Antigua' does not exist"));
}

#[test]
fn test_add_edge_rejects_self_loop() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    munigraph(dir.path())
        .args(["add-edge", "Mixco", "Mixco", "--distance", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("two different municipalities"));
}

#[test]
fn test_add_edge_rejects_existing_road() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    munigraph(dir.path())
        .args(["add-edge", "Mixco", "Guatemala City", "--distance", "3"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("road already exists"));
}

#[test]
fn test_add_edge_rejects_bad_distance() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    for distance in ["--distance=0", "--distance=-3", "--distance=inf"] {
        munigraph(dir.path())
            .args(["add-edge", "Mixco", "Chinautla", distance])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("invalid distance"));
    }

    munigraph(dir.path())
        .args(["add-edge", "Mixco", "Chinautla", "--distance", "far"])
        .assert()
        .code(2);
}

#[test]
fn test_remove_edge() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    munigraph(dir.path())
        .args(["remove-edge", "Mixco", "Guatemala City"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed road Mixco -- Guatemala City"));

    munigraph(dir.path())
        .args(["remove-edge", "Mixco", "Guatemala City"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "no road between 'Mixco' and 'Guatemala City'",
        ));

    munigraph(dir.path())
        .arg("info")
        .assert()
        .stdout(predicate::str::contains("Municipalities: 9"))
        .stdout(predicate::str::contains("Roads: 9"));
}

#[test]
fn test_remove_edge_drops_isolated_endpoint() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    munigraph(dir.path())
        .args(["remove-edge", "Chinautla", "San Jose del Golfo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dropped San Jose del Golfo"));
}

#[test]
fn test_add_node_connects_to_existing() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    munigraph(dir.path())
        .args(["add-node", " Fraijanes ", "--connect", "Santa Catarina Pinula", "-d", "9.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Added Fraijanes (connected to Santa Catarina Pinula, 9.5 km)",
        ));

    munigraph(dir.path())
        .args(["neighbors", "Fraijanes"])
        .assert()
        .success()
        .stdout("Santa Catarina Pinula (9.5 km)\n");
}

#[test]
fn test_add_node_rejects_duplicates_and_blank_names() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    munigraph(dir.path())
        .args(["add-node", "Mixco", "--connect", "Chinautla", "-d", "5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("municipality already exists: Mixco"));

    munigraph(dir.path())
        .args(["add-node", "   ", "--connect", "Chinautla", "-d", "5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn test_add_node_requires_connection() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    munigraph(dir.path())
        .args(["add-node", "Fraijanes"])
        .assert()
        .code(2);
}

#[test]
fn test_remove_node_drops_stranded_neighbors() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    munigraph(dir.path())
        .args(["remove-node", "Chinautla"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Removed Chinautla and 2 road(s); dropped San Jose del Golfo (no roads left)",
        ));

    munigraph(dir.path())
        .arg("info")
        .assert()
        .stdout(predicate::str::contains("Municipalities: 7"))
        .stdout(predicate::str::contains("Roads: 8"));
}

#[test]
fn test_remove_node_json() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    let output = munigraph(dir.path())
        .args(["--format", "json", "remove-node", "Villa Nueva"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["action"], "remove_node");
    assert_eq!(json["nodes"], 8);
    assert_eq!(json["edges"], 6);
}

#[test]
fn test_clear_then_reset() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    munigraph(dir.path()).arg("clear").assert().success();
    assert_eq!(
        fs::read_to_string(dir.path().join("edges.csv")).unwrap(),
        ""
    );

    munigraph(dir.path())
        .arg("info")
        .assert()
        .stdout(predicate::str::contains("Municipalities: 0"));

    munigraph(dir.path()).arg("reset").assert().success();
    munigraph(dir.path())
        .arg("info")
        .assert()
        .stdout(predicate::str::contains("Municipalities: 9"));
}

#[test]
fn test_quiet_suppresses_confirmation() {
    let dir = tempdir().unwrap();

    munigraph(dir.path())
        .args(["--quiet", "reset"])
        .assert()
        .success()
        .stdout("");
}
