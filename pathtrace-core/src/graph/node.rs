//! Graph Nodes
//!
//! This module defines the node types held by the graph store.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::edge::EdgeId;

/// Label identifying a node, e.g. `"A"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Wrap a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Label for the `index`-th auto-allocated node: A..Z, then AA, AB, ...
    pub fn alphabetic(index: usize) -> Self {
        let mut label = Vec::new();
        let mut n = index + 1;
        while n > 0 {
            let rem = (n - 1) % 26;
            label.push(b'A' + rem as u8);
            n = (n - 1) / 26;
        }
        label.reverse();
        Self(label.into_iter().map(char::from).collect())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for NodeId {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// A node in the graph store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Unique label.
    id: NodeId,

    /// Edges touching this node, in insertion order.
    /// Direction is ignored: an edge appears in both endpoints' lists.
    incident: SmallVec<[EdgeId; 4]>,
}

impl Node {
    pub(crate) fn new(id: NodeId) -> Self {
        Self {
            id,
            incident: SmallVec::new(),
        }
    }

    /// Get the node's id.
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Edges incident to this node, oldest first.
    pub fn incident_edges(&self) -> &[EdgeId] {
        &self.incident
    }

    /// Number of incident edges.
    pub fn degree(&self) -> usize {
        self.incident.len()
    }

    pub(crate) fn attach(&mut self, edge: EdgeId) {
        self.incident.push(edge);
    }
}
