//! Graph Edges

use std::fmt;

use serde::{Deserialize, Serialize};

use super::node::NodeId;
use crate::error::ValidationError;

/// Positional identifier of an edge within its store.
///
/// Edges are never removed individually, so an id stays valid until the
/// store is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Get the raw index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A weighted connection between two distinct nodes.
///
/// `from` and `to` record the order in which the edge was drawn, but the
/// engine treats every edge as undirected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub weight: u32,
}

impl Edge {
    /// The endpoint opposite `node`, or `None` if `node` is not an endpoint.
    pub fn other(&self, node: &NodeId) -> Option<&NodeId> {
        if &self.from == node {
            Some(&self.to)
        } else if &self.to == node {
            Some(&self.from)
        } else {
            None
        }
    }

    /// Whether this edge joins `a` and `b`, in either direction.
    pub fn connects(&self, a: &NodeId, b: &NodeId) -> bool {
        (&self.from == a && &self.to == b) || (&self.from == b && &self.to == a)
    }
}

/// Check a caller-supplied weight and narrow it to the stored width.
pub(crate) fn checked_weight(weight: i64) -> Result<u32, ValidationError> {
    if weight <= 0 {
        return Err(ValidationError::NonPositiveWeight(weight));
    }
    u32::try_from(weight).map_err(|_| ValidationError::WeightOutOfRange(weight))
}
