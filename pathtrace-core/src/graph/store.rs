//! Graph Store
//!
//! Owns the node and edge collections. Nodes are kept in an [`IndexMap`] so
//! that iteration follows insertion order; the engine relies on this for
//! deterministic tie-breaking.
//!
//! Every mutation validates its arguments in full before touching either
//! collection, so a rejected call leaves the store exactly as it was.

use indexmap::IndexMap;
use tracing::debug;

use super::edge::{checked_weight, Edge, EdgeId};
use super::node::{Node, NodeId};
use crate::error::ValidationError;

/// In-memory node and edge collections for one graph.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// All nodes, indexed by id, in insertion order.
    nodes: IndexMap<NodeId, Node>,

    /// All edges. An edge's id is its position here.
    edges: Vec<Edge>,

    /// Counter behind [`GraphStore::add_next_node`].
    next_label: usize,
}

impl GraphStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with the given id.
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> Result<&Node, ValidationError> {
        let id = id.into();
        if id.as_str().is_empty() {
            return Err(ValidationError::EmptyNodeId);
        }
        if self.nodes.contains_key(&id) {
            return Err(ValidationError::DuplicateNode(id));
        }

        debug!(node = %id, "adding node");
        let entry = self.nodes.entry(id.clone()).or_insert_with(|| Node::new(id));
        Ok(&*entry)
    }

    /// Add a node under the next free alphabetic label (A, B, ..., Z, AA, ...).
    pub fn add_next_node(&mut self) -> &Node {
        let id = loop {
            let candidate = NodeId::alphabetic(self.next_label);
            self.next_label += 1;
            if !self.nodes.contains_key(&candidate) {
                break candidate;
            }
        };

        debug!(node = %id, "adding labelled node");
        self.nodes.entry(id.clone()).or_insert_with(|| Node::new(id))
    }

    /// Connect two existing, distinct nodes with a positive weight.
    ///
    /// Parallel edges are allowed.
    pub fn add_edge(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        weight: i64,
    ) -> Result<&Edge, ValidationError> {
        let from = from.into();
        let to = to.into();

        if from == to {
            return Err(ValidationError::SelfLoop(from));
        }
        if !self.nodes.contains_key(&from) {
            return Err(ValidationError::UnknownNode(from));
        }
        if !self.nodes.contains_key(&to) {
            return Err(ValidationError::UnknownNode(to));
        }
        let weight = checked_weight(weight)?;

        let id = EdgeId::from(self.edges.len());
        debug!(edge = %id, from = %from, to = %to, weight, "adding edge");

        if let Some(node) = self.nodes.get_mut(&from) {
            node.attach(id);
        }
        if let Some(node) = self.nodes.get_mut(&to) {
            node.attach(id);
        }
        self.edges.push(Edge { id, from, to, weight });
        Ok(&self.edges[id.index()])
    }

    /// Remove every node and edge and restart auto-labelling at `A`.
    pub fn reset(&mut self) {
        debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "resetting graph"
        );
        self.nodes.clear();
        self.edges.clear();
        self.next_label = 0;
    }

    /// Get a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// Whether a node with this id exists.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges touching `id`, paired with the opposite endpoint.
    pub fn neighbors<'a>(
        &'a self,
        id: &'a NodeId,
    ) -> impl Iterator<Item = (&'a Edge, &'a NodeId)> + 'a {
        self.nodes
            .get(id)
            .into_iter()
            .flat_map(|node| node.incident_edges().iter())
            .filter_map(move |edge_id| {
                let edge = self.edges.get(edge_id.index())?;
                edge.other(id).map(|other| (edge, other))
            })
    }

    /// The first edge, in insertion order, joining `a` and `b`.
    pub fn edge_between(&self, a: &NodeId, b: &NodeId) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.connects(a, b))
    }

    /// Get the total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the store has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
