//! Engine error type

use dsep_core::{GraphError, NodeId};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// More simple paths than the configured limit joined two nodes.
    #[error("more than {limit} paths between {from} and {to}")]
    PathLimitExceeded {
        from: NodeId,
        to: NodeId,
        limit: usize,
    },

    #[error("invalid engine config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
