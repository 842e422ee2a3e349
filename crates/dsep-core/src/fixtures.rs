//! Small sample graphs used by the CLI and the test suites

use crate::graph::Graph;

/// The burglary/earthquake network: `B -> A`, `E -> A`, `E -> R`.
///
/// `A` (alarm) is a collider, `E` (earthquake) a fork.
pub fn example_graph() -> Graph {
    Graph::from_edges([("B", "A"), ("E", "A"), ("E", "R")])
}

/// `A -> B -> C -> D`.
pub fn chain_graph() -> Graph {
    Graph::from_edges([("A", "B"), ("B", "C"), ("C", "D")])
}

/// `A -> B`, `A -> C`, `B -> D`, `C -> D`, `D -> E`.
///
/// Two paths join `B` and `C`: through the fork `A` and through the
/// collider `D`, which has the descendant `E`.
pub fn diamond_graph() -> Graph {
    Graph::from_edges([
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("C", "D"),
        ("D", "E"),
    ])
}
