//! Session
//!
//! Pairs one [`GraphStore`] with one [`ShortestPathEngine`] and accepts
//! graph-editing [`Command`]s, typically decoded from a UI event. Nothing
//! here is global: every session is independent.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnimationConfig;
use crate::engine::{Run, ShortestPathEngine, ShortestPaths};
use crate::error::Result;
use crate::graph::{EdgeId, GraphStore, NodeId};
use crate::replay::HighlightBoard;

/// A graph mutation requested by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    AddNode { id: NodeId },
    AddNextNode,
    AddEdge { from: NodeId, to: NodeId, weight: i64 },
    Reset,
}

impl Command {
    /// Parse a command from JSON, e.g. `{"op": "add_edge", "from": "A", "to": "B", "weight": 3}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// What a successfully applied command produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "applied", rename_all = "snake_case")]
pub enum Applied {
    Node { id: NodeId },
    Edge { id: EdgeId },
    Reset,
}

/// A graph plus the engine that runs over it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    graph: GraphStore,
    engine: ShortestPathEngine,
}

impl Session {
    pub fn new(config: AnimationConfig) -> Result<Self> {
        Ok(Self {
            graph: GraphStore::new(),
            engine: ShortestPathEngine::new(config)?,
        })
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut GraphStore {
        &mut self.graph
    }

    pub fn engine(&self) -> &ShortestPathEngine {
        &self.engine
    }

    /// Apply one command. A rejected command changes nothing.
    pub fn apply(&mut self, command: Command) -> Result<Applied> {
        debug!(?command, "applying command");
        let applied = match command {
            Command::AddNode { id } => Applied::Node {
                id: self.graph.add_node(id)?.id().clone(),
            },
            Command::AddNextNode => Applied::Node {
                id: self.graph.add_next_node().id().clone(),
            },
            Command::AddEdge { from, to, weight } => Applied::Edge {
                id: self.graph.add_edge(from, to, weight)?.id,
            },
            Command::Reset => {
                self.graph.reset();
                Applied::Reset
            }
        };
        Ok(applied)
    }

    /// Decode and apply a JSON command.
    pub fn apply_json(&mut self, json: &str) -> Result<Applied> {
        self.apply(Command::from_json(json)?)
    }

    /// Compute shortest paths from `source` without claiming the engine.
    pub fn shortest_paths(&self, source: impl Into<NodeId>) -> Result<ShortestPaths> {
        self.engine.compute(&self.graph, &source.into())
    }

    /// Claim the engine and start a run from `source`.
    pub fn start(&self, source: impl Into<NodeId>) -> Result<Run> {
        self.engine.start(&self.graph, &source.into())
    }

    /// A fresh board for the current graph.
    pub fn board(&self) -> HighlightBoard {
        HighlightBoard::new(&self.graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ValidationError};

    #[test]
    fn applies_json_commands() {
        let mut session = Session::default();

        assert_eq!(
            session.apply_json(r#"{"op": "add_next_node"}"#).unwrap(),
            Applied::Node { id: NodeId::from("A") }
        );
        session.apply_json(r#"{"op": "add_node", "id": "B"}"#).unwrap();
        assert_eq!(
            session
                .apply_json(r#"{"op": "add_edge", "from": "A", "to": "B", "weight": 3}"#)
                .unwrap(),
            Applied::Edge { id: EdgeId::from(0) }
        );

        assert_eq!(session.graph().node_count(), 2);
        assert_eq!(session.graph().edge_count(), 1);

        session.apply_json(r#"{"op": "reset"}"#).unwrap();
        assert!(session.graph().is_empty());
    }

    #[test]
    fn rejected_command_reports_validation_error() {
        let mut session = Session::default();
        session.apply(Command::AddNextNode).unwrap();

        let err = session
            .apply(Command::AddEdge {
                from: NodeId::from("A"),
                to: NodeId::from("A"),
                weight: 3,
            })
            .unwrap_err();
        assert_eq!(
            err.as_validation(),
            Some(&ValidationError::SelfLoop(NodeId::from("A")))
        );
        assert_eq!(session.graph().edge_count(), 0);
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let mut session = Session::default();
        let err = session.apply_json(r#"{"op": "teleport"}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn start_on_empty_session_fails() {
        let session = Session::default();
        let err = session.start("A").unwrap_err();
        assert_eq!(err.as_validation(), Some(&ValidationError::EmptyGraph));
        assert!(!session.engine().is_running());
    }
}
