use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a Command for pathfinder
pub fn pathfinder() -> Command {
    let mut cmd = cargo_bin_cmd!("pathfinder");
    cmd.env_remove("PATHFINDER_GRAPH")
        .env_remove("PATHFINDER_CONFIG")
        .env_remove("PATHFINDER_LOG");
    cmd
}

/// Write `contents` to `name` inside `dir` and return the full path
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Directed weighted triangle: A->B (5), A->C (2), C->B (1)
#[allow(dead_code)]
pub const WEIGHTED_TRIANGLE: &str = r#"{
    "directed": true,
    "nodes": ["A", "B", "C"],
    "edges": [
        {"from": "A", "to": "B", "weight": 5},
        {"from": "A", "to": "C", "weight": 2},
        {"from": "C", "to": "B", "weight": 1}
    ]
}"#;

/// Undirected unit-weight line A - B - C
#[allow(dead_code)]
pub const UNIT_LINE: &str = r#"{
    "directed": false,
    "nodes": ["A", "B", "C"],
    "edges": [
        {"from": "A", "to": "B"},
        {"from": "B", "to": "C"}
    ]
}"#;

/// Two disconnected pairs: A - B and C - D
#[allow(dead_code)]
pub const TWO_PAIRS: &str = r#"{
    "directed": false,
    "nodes": ["A", "B", "C", "D"],
    "edges": [
        {"from": "A", "to": "B", "weight": 1},
        {"from": "C", "to": "D", "weight": 1}
    ]
}"#;

/// Temp dir holding `graph.json` with the given contents
pub fn setup_graph(json: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "graph.json", json);
    (dir, path)
}

/// Run pathfinder against `graph` and parse stdout as JSON
#[allow(dead_code)]
pub fn run_json(graph: &PathBuf, args: &[&str]) -> serde_json::Value {
    let output = pathfinder()
        .arg("--graph")
        .arg(graph)
        .args(["--format", "json"])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "pathfinder {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
