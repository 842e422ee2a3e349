//! Unit tests for dsep-core module

use crate::*;
use proptest::prelude::*;
use std::collections::HashSet;

fn names(ids: &[NodeId]) -> Vec<&str> {
    ids.iter().map(NodeId::as_str).collect()
}

#[test]
fn test_add_node_rejects_duplicates() {
    let mut graph = Graph::new();
    graph.add_node("A").unwrap();

    let err = graph.add_node("A").unwrap_err();
    assert_eq!(err, GraphError::DuplicateNode(NodeId::from("A")));
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_add_edge_registers_both_directions() {
    let mut graph = Graph::new();
    graph.add_node("A").unwrap();
    graph.add_node("B").unwrap();
    graph.add_edge("A", "B").unwrap();

    assert_eq!(names(&graph.get_children("A").unwrap()), vec!["B"]);
    assert_eq!(names(&graph.get_parents("B").unwrap()), vec!["A"]);
    assert!(graph.get_parents("A").unwrap().is_empty());
    assert!(graph.has_edge("A", "B"));
    assert!(!graph.has_edge("B", "A"));
}

#[test]
fn test_add_edge_is_idempotent() {
    let mut graph = example_graph();
    graph.add_edge("B", "A").unwrap();
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_missing_nodes_are_reported() {
    let mut graph = example_graph();

    assert_eq!(
        graph.add_edge("B", "X"),
        Err(GraphError::NodeNotFound(NodeId::from("X")))
    );
    assert_eq!(
        graph.remove_edge("X", "A"),
        Err(GraphError::NodeNotFound(NodeId::from("X")))
    );
    assert_eq!(
        graph.remove_node("X"),
        Err(GraphError::NodeNotFound(NodeId::from("X")))
    );
    assert!(graph.get_parents("X").is_err());
    assert!(graph.get_children("X").is_err());
    assert!(graph.get_descendants("X").is_err());
}

#[test]
fn test_remove_missing_edge_is_ignored() {
    let mut graph = example_graph();
    graph.remove_edge("R", "B").unwrap();
    assert_eq!(graph.edge_count(), 3);

    graph.remove_edge("E", "R").unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.get_children("R").unwrap().is_empty());
    assert_eq!(names(&graph.get_children("E").unwrap()), vec!["A"]);
}

#[test]
fn test_remove_node_drops_incident_edges() {
    let mut graph = example_graph();
    graph.remove_node("A").unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 1);
    assert!(!graph.contains("A"));
    assert!(graph.get_children("B").unwrap().is_empty());
    assert_eq!(names(&graph.get_children("E").unwrap()), vec!["R"]);

    // The name is free again.
    graph.add_node("A").unwrap();
    assert!(graph.get_parents("A").unwrap().is_empty());
}

#[test]
fn test_neighbors_are_sorted() {
    let graph = Graph::from_edges([("X", "C"), ("X", "A"), ("X", "B")]);
    assert_eq!(names(&graph.get_children("X").unwrap()), vec!["A", "B", "C"]);
    assert_eq!(names(&graph.nodes()), vec!["A", "B", "C", "X"]);
}

#[test]
fn test_ancestors_and_descendants() {
    let graph = diamond_graph();

    let ancestors = graph.get_ancestors("E").unwrap();
    let expected: HashSet<NodeId> = ["A", "B", "C", "D"].into_iter().map(NodeId::from).collect();
    assert_eq!(ancestors, expected);

    let descendants = graph.get_descendants("B").unwrap();
    let expected: HashSet<NodeId> = ["D", "E"].into_iter().map(NodeId::from).collect();
    assert_eq!(descendants, expected);

    assert!(graph.is_ancestor("A", "E").unwrap());
    assert!(!graph.is_ancestor("E", "A").unwrap());
    assert!(graph.is_descendant("E", "C").unwrap());
    assert!(!graph.is_descendant("B", "C").unwrap());
}

#[test]
fn test_descendants_terminate_on_cycles() {
    let graph = Graph::from_edges([("A", "B"), ("B", "C"), ("C", "A")]);
    let descendants = graph.get_descendants("A").unwrap();
    assert_eq!(descendants.len(), 3);
    assert!(descendants.contains("A"));
}

#[test]
fn test_to_undirected_is_symmetric_copy() {
    let graph = example_graph();
    let undirected = graph.to_undirected();

    assert!(graph.is_directed());
    assert!(!undirected.is_directed());
    assert_eq!(undirected.edge_count(), 6);
    assert_eq!(names(&undirected.get_children("A").unwrap()), vec!["B", "E"]);
    assert_eq!(
        undirected.get_children("E").unwrap(),
        undirected.get_parents("E").unwrap()
    );

    // The source graph is untouched.
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.get_children("A").unwrap().is_empty());
}

#[test]
fn test_fixture_shapes() {
    let chain = chain_graph();
    assert_eq!(chain.node_count(), 4);
    assert_eq!(chain.edge_count(), 3);

    let diamond = diamond_graph();
    assert_eq!(names(&diamond.get_parents("D").unwrap()), vec!["B", "C"]);
}

#[test]
fn test_node_id_serialization() {
    let id = NodeId::from("Alarm");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"Alarm\"");

    let back: NodeId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
    assert_eq!(back.to_string(), "Alarm");
}

#[test]
fn test_graph_error_messages() {
    let err = GraphError::NodeNotFound(NodeId::from("Q"));
    assert_eq!(err.to_string(), "graph does not contain a node named Q");
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..n, 0..n), 0..n * 3)
}

fn build_graph(n: usize, edges: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::new();
    for i in 0..n {
        graph.add_node(format!("n{i}")).unwrap();
    }
    for &(a, b) in edges {
        graph.add_edge(&format!("n{a}"), &format!("n{b}")).unwrap();
    }
    graph
}

proptest! {
    #[test]
    fn prop_parent_child_views_agree(edges in edge_strategy(8)) {
        let graph = build_graph(8, &edges);
        for node in graph.nodes() {
            for child in graph.get_children(node.as_str()).unwrap() {
                prop_assert!(graph.get_parents(child.as_str()).unwrap().contains(&node));
            }
            for parent in graph.get_parents(node.as_str()).unwrap() {
                prop_assert!(graph.get_children(parent.as_str()).unwrap().contains(&node));
            }
        }
    }

    #[test]
    fn prop_to_undirected_is_idempotent(edges in edge_strategy(8)) {
        let graph = build_graph(8, &edges);
        let once = graph.to_undirected();
        let twice = once.to_undirected();
        prop_assert_eq!(once.edges(), twice.edges());
        for node in once.nodes() {
            prop_assert_eq!(
                once.get_children(node.as_str()).unwrap(),
                once.get_parents(node.as_str()).unwrap()
            );
        }
    }
}
