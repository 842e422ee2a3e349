//! Structural motifs: forks, colliders and the role of a node on a path

use crate::error::Result;
use dsep_core::{Graph, NodeId};
use std::collections::BTreeSet;

/// How an interior node connects its two neighbours on a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    /// One neighbour is a parent, the other a child (or the pair is unrelated).
    Chain,
    /// Both neighbours are children.
    Fork,
    /// Both neighbours are parents.
    Collider,
}

/// A common cause: at most one parent and at least two children.
pub fn is_fork(graph: &Graph, node: &str) -> Result<bool> {
    Ok(graph.get_parents(node)?.len() < 2 && graph.get_children(node)?.len() > 1)
}

/// A common effect: at least two parents and at most one child.
pub fn is_collider_node(graph: &Graph, node: &str) -> Result<bool> {
    Ok(graph.get_parents(node)?.len() > 1 && graph.get_children(node)?.len() < 2)
}

/// All forks of the graph.
pub fn find_forks(graph: &Graph) -> Result<BTreeSet<NodeId>> {
    collect_matching(graph, is_fork)
}

/// All colliders of the graph.
pub fn find_colliders(graph: &Graph) -> Result<BTreeSet<NodeId>> {
    collect_matching(graph, is_collider_node)
}

fn collect_matching(
    graph: &Graph,
    predicate: fn(&Graph, &str) -> Result<bool>,
) -> Result<BTreeSet<NodeId>> {
    let mut found = BTreeSet::new();
    for node in graph.nodes() {
        if predicate(graph, node.as_str())? {
            found.insert(node);
        }
    }
    Ok(found)
}

/// Role of `node` between its path neighbours `prev` and `next`.
///
/// Reads the directed graph. A neighbour joined to `node` in both directions
/// counts as a parent first.
pub fn classify(graph: &Graph, prev: &str, node: &str, next: &str) -> Result<PathRole> {
    let parents = graph.get_parents(node)?;
    if parents.iter().any(|p| p == prev) && parents.iter().any(|p| p == next) {
        return Ok(PathRole::Collider);
    }

    let children = graph.get_children(node)?;
    if children.iter().any(|c| c == prev) && children.iter().any(|c| c == next) {
        Ok(PathRole::Fork)
    } else {
        Ok(PathRole::Chain)
    }
}

/// Check whether `node` is a collider with respect to `path`.
///
/// Only the two neighbours of `node` on the path are considered. Endpoints
/// and nodes not on the path are never colliders.
pub fn is_collider(graph: &Graph, node: &str, path: &[NodeId]) -> Result<bool> {
    let parents = graph.get_parents(node)?;
    let Some(pos) = path.iter().position(|n| n == node) else {
        return Ok(false);
    };
    if pos == 0 || pos + 1 == path.len() {
        return Ok(false);
    }
    Ok(parents.contains(&path[pos - 1]) && parents.contains(&path[pos + 1]))
}
