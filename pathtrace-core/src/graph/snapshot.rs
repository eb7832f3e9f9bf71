//! Serializable graph snapshots.

use serde::{Deserialize, Serialize};

use super::node::NodeId;
use super::store::GraphStore;
use crate::error::Result;

/// An edge as the caller describes it, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: i64,
}

/// Node ids and edges of a graph, detached from any store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphSnapshot {
    /// Parse a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the snapshot to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl GraphStore {
    /// Capture the current nodes and edges.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.node_ids().cloned().collect(),
            edges: self
                .edges()
                .iter()
                .map(|edge| EdgeSpec {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    weight: i64::from(edge.weight),
                })
                .collect(),
        }
    }

    /// Build a store from a snapshot.
    ///
    /// Every node and edge goes through the same validation as the
    /// incremental API; the first failure aborts the whole load.
    pub fn from_snapshot(snapshot: &GraphSnapshot) -> Result<Self> {
        let mut store = GraphStore::new();
        for id in &snapshot.nodes {
            store.add_node(id.clone())?;
        }
        for edge in &snapshot.edges {
            store.add_edge(edge.from.clone(), edge.to.clone(), edge.weight)?;
        }
        Ok(store)
    }

    /// Replace this store's contents with a snapshot.
    ///
    /// On error the current contents are kept.
    pub fn load(&mut self, snapshot: &GraphSnapshot) -> Result<()> {
        *self = GraphStore::from_snapshot(snapshot)?;
        Ok(())
    }
}
