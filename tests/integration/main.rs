//! Integration tests for dsep
//!
//! These tests drive the library crates and the CLI binary together.

use dsep_core::{Graph, NodeId, example_graph, node_set};
use dsep_engine::{ColliderRule, DSeparation, EngineConfig, check_independence, enumerate_paths};
use std::io::Write;
use std::process::{Command, Output};

fn dsep(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dsep"))
        .args(args)
        .output()
        .expect("Failed to execute dsep")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_help() {
    let output = dsep(&["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("d-separation analysis of directed graphs"));
}

#[test]
fn test_cli_example() {
    let output = dsep(&["example"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("forks: {E}"));
    assert!(text.contains("colliders: {A}"));
    assert!(text.contains("[[B, A, E, R]]"));
    assert!(text.contains("Is A a collider for the path [B, A, E]? true"));
    assert!(text.contains("Is path [B, A, E] open? false"));
    assert!(text.contains("not blocked by {A, E}? false"));
    assert!(text.contains("independent given nodes {A, E}? true"));
}

#[test]
fn test_cli_paths_with_edges() {
    let output = dsep(&[
        "--edge", "A:B", "--edge", "A:C", "--edge", "B:D", "--edge", "C:D", "paths", "B", "C",
    ]);
    assert!(output.status.success());

    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines, vec!["B - A (fork) - C", "B - D (collider) - C"]);
}

#[test]
fn test_cli_check_json() {
    let output = dsep(&["check", "--x", "B", "--y", "R", "--given", "A", "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["independent"], false);
    assert_eq!(report["witness"], serde_json::json!(["B", "A", "E", "R"]));
    assert_eq!(report["given"], serde_json::json!(["A"]));
}

#[test]
fn test_cli_check_unknown_node_fails() {
    let output = dsep(&["check", "--x", "B", "--y", "Nowhere"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("graph does not contain a node named Nowhere"));
}

#[test]
fn test_cli_rejects_malformed_edge() {
    let output = dsep(&["--edge", "AB", "motifs"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_config_file() {
    // Under the all-children rule, conditioning on D alone leaves its child
    // E unobserved, so the collider stays closed.
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "collider_rule = \"all-children\"").unwrap();
    let config = file.path().to_str().unwrap();
    let edges = ["--edge", "B:D", "--edge", "C:D", "--edge", "D:E"];

    let mut args = vec!["--config", config];
    args.extend(edges);
    args.extend(["check", "--x", "B", "--y", "C", "--given", "D"]);
    let strict = dsep(&args);
    assert!(strict.status.success());
    assert!(stdout(&strict).contains("are independent"));

    let mut args = edges.to_vec();
    args.extend(["check", "--x", "B", "--y", "C", "--given", "D"]);
    let standard = dsep(&args);
    assert!(standard.status.success());
    assert!(stdout(&standard).contains("are dependent"));
}

/// Build a graph through the mutation API and query it end to end.
#[test]
fn test_graph_construction_and_queries() {
    let mut graph = Graph::new();
    for name in ["Rain", "Sprinkler", "Wet", "Slippery"] {
        graph.add_node(name).unwrap();
    }
    graph.add_edge("Rain", "Wet").unwrap();
    graph.add_edge("Sprinkler", "Wet").unwrap();
    graph.add_edge("Wet", "Slippery").unwrap();

    let paths = enumerate_paths(&graph, "Rain", "Sprinkler").unwrap();
    assert_eq!(paths.len(), 1);

    let nothing = node_set(Vec::<NodeId>::new());
    assert!(check_independence(&graph, &["Rain"], &["Sprinkler"], &nothing).unwrap());
    assert!(
        !check_independence(&graph, &["Rain"], &["Sprinkler"], &node_set(["Slippery"])).unwrap()
    );

    let strict = DSeparation::new(EngineConfig::new(ColliderRule::AllChildren));
    assert!(
        strict
            .check_independence(&graph, &["Rain"], &["Sprinkler"], &node_set(["Slippery"]))
            .unwrap()
    );

    graph.remove_edge("Sprinkler", "Wet").unwrap();
    assert!(enumerate_paths(&graph, "Rain", "Sprinkler").unwrap().is_empty());
}

#[test]
fn test_example_graph_is_independent_copy() {
    let mut graph = example_graph();
    graph.add_edge("A", "R").unwrap();

    // A -> R turns A into a chain on B - A - R, opening a second path.
    let paths = enumerate_paths(&graph, "B", "R").unwrap();
    assert_eq!(paths.len(), 2);
    assert_eq!(example_graph().edge_count(), 3);
}
