//! Errors raised by the graph accessor

use crate::model::NodeId;

/// Failure of a graph lookup or mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An operation referenced an identifier that is not in the graph.
    #[error("graph does not contain a node named {0}")]
    NodeNotFound(NodeId),

    /// Construction tried to add an identifier that is already present.
    #[error("graph already contains a node named {0}")]
    DuplicateNode(NodeId),
}
