//! Graph wrapper using petgraph::StableDiGraph keyed by node name

use crate::error::GraphError;
use crate::model::NodeId;
use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use std::collections::{HashMap, HashSet};

/// A directed graph without parallel edges.
///
/// Parent and child sets are both read off the same petgraph edge list, so
/// "B is a child of A" and "A is a parent of B" always agree.
#[derive(Clone)]
pub struct Graph {
    inner: StableDiGraph<NodeId, ()>,
    index: HashMap<NodeId, NodeIndex>,
    directed: bool,
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .field("directed", &self.directed)
            .finish()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            inner: StableDiGraph::new(),
            index: HashMap::new(),
            directed: true,
        }
    }

    /// Build a graph from `(from, to)` pairs, creating nodes on first mention.
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut graph = Graph::new();
        for (from, to) in edges {
            let a = graph.ensure_node(from);
            let b = graph.ensure_node(to);
            graph.inner.update_edge(a, b, ());
        }
        graph
    }

    fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let id = NodeId::from(name);
        let idx = self.inner.add_node(id.clone());
        self.index.insert(id, idx);
        idx
    }

    fn lookup(&self, name: &str) -> Result<NodeIndex, GraphError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound(NodeId::from(name)))
    }

    /// Add a node. Fails if the name is already taken.
    pub fn add_node(&mut self, name: impl Into<NodeId>) -> Result<(), GraphError> {
        let id = name.into();
        if self.index.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        let idx = self.inner.add_node(id.clone());
        self.index.insert(id, idx);
        Ok(())
    }

    /// Remove a node and all its edges.
    pub fn remove_node(&mut self, name: &str) -> Result<(), GraphError> {
        let idx = self.lookup(name)?;
        self.inner.remove_node(idx);
        self.index.remove(name);
        Ok(())
    }

    /// Add the edge `from -> to`. Adding an existing edge is a no-op.
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<(), GraphError> {
        let a = self.lookup(from)?;
        let b = self.lookup(to)?;
        self.inner.update_edge(a, b, ());
        Ok(())
    }

    /// Remove the edge `from -> to` if present. Both nodes must exist.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Result<(), GraphError> {
        let a = self.lookup(from)?;
        let b = self.lookup(to)?;
        if let Some(edge) = self.inner.find_edge(a, b) {
            self.inner.remove_edge(edge);
        }
        Ok(())
    }

    /// Check whether the edge `from -> to` exists.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&a), Some(&b)) => self.inner.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Resolve a name to the stored identifier.
    pub fn node(&self, name: &str) -> Result<&NodeId, GraphError> {
        let idx = self.lookup(name)?;
        Ok(&self.inner[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of edges. An undirected view counts each direction.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// False for graphs produced by [`Graph::to_undirected`].
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// All node names in ascending order.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.index.keys().cloned().collect();
        nodes.sort();
        nodes
    }

    /// All edges as `(from, to)` pairs in ascending order.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut edges: Vec<(NodeId, NodeId)> = self
            .inner
            .edge_indices()
            .filter_map(|e| self.inner.edge_endpoints(e))
            .map(|(a, b)| (self.inner[a].clone(), self.inner[b].clone()))
            .collect();
        edges.sort();
        edges
    }

    fn neighbors(&self, name: &str, dir: Direction) -> Result<Vec<NodeId>, GraphError> {
        let idx = self.lookup(name)?;
        let mut out: Vec<NodeId> = self
            .inner
            .neighbors_directed(idx, dir)
            .map(|n| self.inner[n].clone())
            .collect();
        out.sort();
        out.dedup();
        Ok(out)
    }

    /// Direct parents of a node, in ascending order.
    pub fn get_parents(&self, name: &str) -> Result<Vec<NodeId>, GraphError> {
        self.neighbors(name, Direction::Incoming)
    }

    /// Direct children of a node, in ascending order.
    pub fn get_children(&self, name: &str) -> Result<Vec<NodeId>, GraphError> {
        self.neighbors(name, Direction::Outgoing)
    }

    fn reachable(&self, name: &str, dir: Direction) -> Result<HashSet<NodeId>, GraphError> {
        let start = self.lookup(name)?;
        let mut seen: HashSet<NodeIndex> = HashSet::new();
        let mut to_visit = vec![start];

        while let Some(current) = to_visit.pop() {
            for next in self.inner.neighbors_directed(current, dir) {
                if seen.insert(next) {
                    to_visit.push(next);
                }
            }
        }

        Ok(seen.into_iter().map(|idx| self.inner[idx].clone()).collect())
    }

    /// All nodes with a directed path into `name`. Terminates on cyclic graphs.
    pub fn get_ancestors(&self, name: &str) -> Result<HashSet<NodeId>, GraphError> {
        self.reachable(name, Direction::Incoming)
    }

    /// All nodes reachable from `name` along directed edges.
    pub fn get_descendants(&self, name: &str) -> Result<HashSet<NodeId>, GraphError> {
        self.reachable(name, Direction::Outgoing)
    }

    /// Check if `a` is an ancestor of `b`.
    pub fn is_ancestor(&self, a: &str, b: &str) -> Result<bool, GraphError> {
        self.lookup(a)?;
        Ok(self.get_ancestors(b)?.contains(a))
    }

    /// Check if `a` is a descendant of `b`.
    pub fn is_descendant(&self, a: &str, b: &str) -> Result<bool, GraphError> {
        self.lookup(a)?;
        Ok(self.get_descendants(b)?.contains(a))
    }

    /// An independent copy where every edge `a -> b` is matched by `b -> a`.
    ///
    /// Parents and children coincide in the result. Applying it to a graph
    /// that is already undirected leaves the adjacency unchanged.
    pub fn to_undirected(&self) -> Graph {
        let mut res = self.clone();
        let edges: Vec<(NodeIndex, NodeIndex)> = self
            .inner
            .edge_indices()
            .filter_map(|e| self.inner.edge_endpoints(e))
            .collect();
        for (a, b) in edges {
            res.inner.update_edge(b, a, ());
        }
        res.directed = false;

        tracing::trace!(
            "Undirected view: {} nodes, {} edges",
            res.node_count(),
            res.edge_count()
        );
        res
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
