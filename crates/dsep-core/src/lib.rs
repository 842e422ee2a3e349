//! dsep Core — Directed graph accessor, node identifiers and errors

pub mod error;
pub mod fixtures;
pub mod graph;
pub mod model;

#[cfg(test)]
mod tests;

pub use error::GraphError;
pub use fixtures::{chain_graph, diamond_graph, example_graph};
pub use graph::Graph;
pub use model::{NodeId, Path, node_set};
