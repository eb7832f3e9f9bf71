//! Error Types
//!
//! Every fallible operation in the crate returns [`Result`]. Graph and
//! engine preconditions surface as [`ValidationError`]; these are raised
//! before any state is touched, so a failed call never leaves a partial
//! mutation behind.

use thiserror::Error;

use crate::graph::NodeId;

/// A rejected graph mutation or engine precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Node ids must contain at least one character.
    #[error("node id must not be empty")]
    EmptyNodeId,

    /// A node with this id is already in the graph.
    #[error("node `{0}` already exists")]
    DuplicateNode(NodeId),

    /// The id does not name a node in the graph.
    #[error("unknown node `{0}`")]
    UnknownNode(NodeId),

    /// Both endpoints of the edge are the same node.
    #[error("cannot connect node `{0}` to itself")]
    SelfLoop(NodeId),

    /// Edge weights must be strictly positive.
    #[error("edge weight must be positive, got {0}")]
    NonPositiveWeight(i64),

    /// Edge weights must fit in a `u32`.
    #[error("edge weight {0} is larger than {}", u32::MAX)]
    WeightOutOfRange(i64),

    /// Shortest paths were requested on a graph with no nodes.
    #[error("graph has no nodes")]
    EmptyGraph,
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another shortest-path run still holds the engine.
    #[error("a shortest-path run is already in progress")]
    Busy,

    #[error("invalid animation config: {0}")]
    Config(String),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The validation failure behind this error, if that is what it is.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
