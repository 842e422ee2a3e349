//! Open/blocked decision for a single path

use crate::config::{ColliderRule, EngineConfig};
use crate::error::Result;
use crate::motifs::{PathRole, classify};
use dsep_core::{Graph, NodeId};
use std::collections::HashSet;

/// Check whether `path` transmits dependence given `conditioning`, using the
/// default collider rule.
pub fn is_path_open(
    graph: &Graph,
    path: &[NodeId],
    conditioning: &HashSet<NodeId>,
) -> Result<bool> {
    is_path_open_with(graph, path, conditioning, &EngineConfig::default())
}

/// Check whether `path` transmits dependence given `conditioning`.
///
/// Each interior node is classified against the directed graph from its two
/// path neighbours. Colliders stay closed unless `config.collider_rule` is
/// satisfied; chains and forks are closed by conditioning on them. The scan
/// stops at the first closed node. Paths without interior nodes are open.
pub fn is_path_open_with(
    graph: &Graph,
    path: &[NodeId],
    conditioning: &HashSet<NodeId>,
    config: &EngineConfig,
) -> Result<bool> {
    for window in path.windows(3) {
        let (prev, node, next) = (&window[0], &window[1], &window[2]);
        let role = classify(graph, prev.as_str(), node.as_str(), next.as_str())?;

        let open = match role {
            PathRole::Collider => {
                collider_is_open(graph, node, conditioning, config.collider_rule)?
            }
            PathRole::Chain | PathRole::Fork => !conditioning.contains(node),
        };
        tracing::trace!("{} is a {:?} on the path, open: {}", node, role, open);

        if !open {
            return Ok(false);
        }
    }
    Ok(true)
}

fn collider_is_open(
    graph: &Graph,
    node: &NodeId,
    conditioning: &HashSet<NodeId>,
    rule: ColliderRule,
) -> Result<bool> {
    match rule {
        ColliderRule::Descendants => {
            if conditioning.contains(node) {
                return Ok(true);
            }
            let descendants = graph.get_descendants(node.as_str())?;
            Ok(descendants.iter().any(|d| conditioning.contains(d)))
        }
        ColliderRule::AllChildren => {
            if !conditioning.contains(node) {
                return Ok(false);
            }
            let children = graph.get_children(node.as_str())?;
            Ok(children.iter().all(|c| conditioning.contains(c)))
        }
    }
}
