//! Simple-path enumeration over the undirected view of a graph

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use dsep_core::{Graph, NodeId, Path};
use std::collections::{HashMap, HashSet};

/// One level of the depth-first search: a node on the current path and the
/// index of the next neighbour to try.
struct Frame {
    node: NodeId,
    next: usize,
}

/// Lazy depth-first enumeration of every simple path between two nodes,
/// ignoring edge direction.
///
/// Paths come out in discovery order, which follows the ascending neighbour
/// order of the graph. The search never extends a path past its target.
pub struct SimplePaths {
    adjacency: HashMap<NodeId, Vec<NodeId>>,
    start: NodeId,
    target: NodeId,
    stack: Vec<Frame>,
    path: Path,
    on_path: HashSet<NodeId>,
    trivial: Option<Path>,
    limit: Option<usize>,
    yielded: usize,
    exhausted: bool,
}

impl std::fmt::Debug for SimplePaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimplePaths")
            .field("start", &self.start)
            .field("target", &self.target)
            .field("depth", &self.path.len())
            .field("yielded", &self.yielded)
            .finish()
    }
}

impl SimplePaths {
    /// Prepare a search from `start` to `end`. Both nodes must exist.
    pub fn new(graph: &Graph, start: &str, end: &str) -> Result<Self> {
        let start = graph.node(start)?.clone();
        let target = graph.node(end)?.clone();

        let undirected = graph.to_undirected();
        let mut adjacency = HashMap::with_capacity(undirected.node_count());
        for node in undirected.nodes() {
            let neighbors = undirected.get_children(node.as_str())?;
            adjacency.insert(node, neighbors);
        }

        let mut paths = SimplePaths {
            adjacency,
            start: start.clone(),
            target,
            stack: Vec::new(),
            path: Vec::new(),
            on_path: HashSet::new(),
            trivial: None,
            limit: None,
            yielded: 0,
            exhausted: false,
        };

        if paths.start == paths.target {
            paths.trivial = Some(vec![start]);
        } else {
            paths.path.push(start.clone());
            paths.on_path.insert(start.clone());
            paths.stack.push(Frame {
                node: start,
                next: 0,
            });
        }
        Ok(paths)
    }

    /// Fail with [`EngineError::PathLimitExceeded`] once more than `limit`
    /// paths are found. `None` removes the limit.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    fn advance(&mut self) -> Option<Path> {
        if let Some(path) = self.trivial.take() {
            return Some(path);
        }

        while let Some(frame) = self.stack.last_mut() {
            let neighbors = self
                .adjacency
                .get(&frame.node)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let Some(candidate) = neighbors.get(frame.next).cloned() else {
                // Every neighbour tried: backtrack out of this node.
                self.stack.pop();
                if let Some(node) = self.path.pop() {
                    self.on_path.remove(&node);
                }
                continue;
            };
            frame.next += 1;

            if self.on_path.contains(&candidate) {
                continue;
            }
            if candidate == self.target {
                let mut found = self.path.clone();
                found.push(candidate);
                return Some(found);
            }

            self.path.push(candidate.clone());
            self.on_path.insert(candidate.clone());
            self.stack.push(Frame {
                node: candidate,
                next: 0,
            });
        }
        None
    }
}

impl Iterator for SimplePaths {
    type Item = Result<Path>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let Some(path) = self.advance() else {
            self.exhausted = true;
            return None;
        };

        if let Some(limit) = self.limit {
            if self.yielded >= limit {
                self.exhausted = true;
                tracing::warn!(
                    "Path limit {} exceeded between {} and {}",
                    limit,
                    self.start,
                    self.target
                );
                return Some(Err(EngineError::PathLimitExceeded {
                    from: self.start.clone(),
                    to: self.target.clone(),
                    limit,
                }));
            }
        }
        self.yielded += 1;
        Some(Ok(path))
    }
}

/// Every simple undirected path from `start` to `end`, with the default
/// path limit.
///
/// Dense graphs can have more simple paths than
/// [`DEFAULT_MAX_PATHS`](crate::config::DEFAULT_MAX_PATHS); such
/// valid inputs fail with [`EngineError::PathLimitExceeded`]. Use
/// [`enumerate_paths_with`] and [`EngineConfig::unbounded`] to lift the limit.
pub fn enumerate_paths(graph: &Graph, start: &str, end: &str) -> Result<Vec<Path>> {
    enumerate_paths_with(graph, start, end, &EngineConfig::default())
}

/// Every simple undirected path from `start` to `end`.
pub fn enumerate_paths_with(
    graph: &Graph,
    start: &str,
    end: &str,
    config: &EngineConfig,
) -> Result<Vec<Path>> {
    let paths = SimplePaths::new(graph, start, end)?
        .with_limit(config.max_paths)
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!("Found {} paths between {} and {}", paths.len(), start, end);
    Ok(paths)
}
