//! Highlight Board
//!
//! A [`TraceSink`] that keeps the highlight state a renderer would be
//! showing: one [`VisitState`] per node, one [`EdgeState`] per edge, and the
//! distances and predecessors revealed so far. If a replay is cancelled the
//! board holds whatever the trace had reached at that point.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::trace;

use crate::engine::{
    Distance, DistanceTable, EdgeState, PredecessorTable, Transition, VisitEvent, VisitState,
};
use crate::graph::{EdgeId, GraphStore, NodeId};

/// Consumer of replayed visit events.
pub trait TraceSink {
    fn apply(&mut self, event: &VisitEvent);
}

/// Records every event it is given.
impl TraceSink for Vec<VisitEvent> {
    fn apply(&mut self, event: &VisitEvent) {
        self.push(event.clone());
    }
}

/// Lets a render task read the sink while a replay task writes to it.
impl<S: TraceSink + ?Sized> TraceSink for Arc<RwLock<S>> {
    fn apply(&mut self, event: &VisitEvent) {
        self.write().apply(event);
    }
}

/// A board shared between a replay task and its readers.
pub type SharedBoard = Arc<RwLock<HighlightBoard>>;

/// Current highlight state of every node and edge in one graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightBoard {
    nodes: IndexMap<NodeId, VisitState>,
    edges: IndexMap<EdgeId, EdgeState>,
    distances: DistanceTable,
    previous: PredecessorTable,
}

impl HighlightBoard {
    /// A board with every node unvisited and every edge normal.
    pub fn new(graph: &GraphStore) -> Self {
        Self {
            nodes: graph
                .node_ids()
                .map(|id| (id.clone(), VisitState::Unvisited))
                .collect(),
            edges: graph
                .edges()
                .iter()
                .map(|edge| (edge.id, EdgeState::Normal))
                .collect(),
            distances: graph
                .node_ids()
                .map(|id| (id.clone(), Distance::Infinite))
                .collect(),
            previous: graph.node_ids().map(|id| (id.clone(), None)).collect(),
        }
    }

    /// Wrap the board for sharing across tasks.
    pub fn shared(self) -> SharedBoard {
        Arc::new(RwLock::new(self))
    }

    /// Clear all highlights and revealed distances.
    pub fn reset(&mut self) {
        self.nodes.values_mut().for_each(|state| *state = VisitState::Unvisited);
        self.edges.values_mut().for_each(|state| *state = EdgeState::Normal);
        self.distances.values_mut().for_each(|d| *d = Distance::Infinite);
        self.previous.values_mut().for_each(|p| *p = None);
    }

    pub fn node_state(&self, node: &NodeId) -> Option<VisitState> {
        self.nodes.get(node).copied()
    }

    pub fn edge_state(&self, edge: EdgeId) -> Option<EdgeState> {
        self.edges.get(&edge).copied()
    }

    /// Distance revealed so far.
    pub fn distance(&self, node: &NodeId) -> Option<Distance> {
        self.distances.get(node).copied()
    }

    /// Predecessor revealed so far.
    pub fn predecessor(&self, node: &NodeId) -> Option<&NodeId> {
        self.previous.get(node).and_then(Option::as_ref)
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    pub fn previous(&self) -> &PredecessorTable {
        &self.previous
    }

    /// Nodes currently in `state`, in graph order.
    pub fn nodes_in(&self, state: VisitState) -> Vec<&NodeId> {
        self.nodes
            .iter()
            .filter(|(_, s)| **s == state)
            .map(|(id, _)| id)
            .collect()
    }

    /// Edges currently in `state`, in graph order.
    pub fn edges_in(&self, state: EdgeState) -> Vec<EdgeId> {
        self.edges
            .iter()
            .filter(|(_, s)| **s == state)
            .map(|(id, _)| *id)
            .collect()
    }
}

impl TraceSink for HighlightBoard {
    fn apply(&mut self, event: &VisitEvent) {
        match &event.transition {
            Transition::Begin { source } => {
                self.reset();
                if let Some(d) = self.distances.get_mut(source) {
                    *d = Distance::ZERO;
                }
            }
            Transition::Node { node, state } => match self.nodes.get_mut(node) {
                Some(current) => *current = *state,
                None => trace!(node = %node, "ignoring event for unknown node"),
            },
            Transition::Relax {
                node, distance, via, ..
            } => {
                if let Some(d) = self.distances.get_mut(node) {
                    *d = Distance::Finite(*distance);
                }
                if let Some(p) = self.previous.get_mut(node) {
                    *p = Some(via.clone());
                }
            }
            Transition::Edge { edge, state } => match self.edges.get_mut(edge) {
                Some(current) => *current = *state,
                None => trace!(edge = %edge, "ignoring event for unknown edge"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(transition: Transition) -> VisitEvent {
        VisitEvent {
            transition,
            delay_ms: 0,
        }
    }

    fn graph() -> GraphStore {
        let mut store = GraphStore::new();
        store.add_node("A").unwrap();
        store.add_node("B").unwrap();
        store.add_edge("A", "B", 2).unwrap();
        store
    }

    #[test]
    fn starts_unvisited_and_normal() {
        let board = HighlightBoard::new(&graph());
        assert_eq!(board.nodes_in(VisitState::Unvisited).len(), 2);
        assert_eq!(board.edge_state(EdgeId::from(0)), Some(EdgeState::Normal));
        assert_eq!(board.distance(&NodeId::from("A")), Some(Distance::Infinite));
    }

    #[test]
    fn applies_transitions() {
        let a = NodeId::from("A");
        let b = NodeId::from("B");
        let mut board = HighlightBoard::new(&graph());

        board.apply(&event(Transition::Begin { source: a.clone() }));
        board.apply(&event(Transition::Node {
            node: a.clone(),
            state: VisitState::Visited,
        }));
        board.apply(&event(Transition::Relax {
            node: b.clone(),
            distance: 2,
            via: a.clone(),
            edge: EdgeId::from(0),
        }));
        board.apply(&event(Transition::Edge {
            edge: EdgeId::from(0),
            state: EdgeState::OnShortestPath,
        }));

        assert_eq!(board.node_state(&a), Some(VisitState::Visited));
        // A relax is a flash only; B keeps its visit state.
        assert_eq!(board.node_state(&b), Some(VisitState::Unvisited));
        assert_eq!(board.distance(&a), Some(Distance::ZERO));
        assert_eq!(board.distance(&b), Some(Distance::Finite(2)));
        assert_eq!(board.predecessor(&b), Some(&a));
        assert_eq!(board.edges_in(EdgeState::OnShortestPath), vec![EdgeId::from(0)]);
    }

    #[test]
    fn begin_clears_previous_run() {
        let a = NodeId::from("A");
        let b = NodeId::from("B");
        let mut board = HighlightBoard::new(&graph());
        board.apply(&event(Transition::Node {
            node: a.clone(),
            state: VisitState::OnShortestPath,
        }));

        board.apply(&event(Transition::Begin { source: b.clone() }));

        assert_eq!(board.node_state(&a), Some(VisitState::Unvisited));
        assert_eq!(board.distance(&b), Some(Distance::ZERO));
        assert_eq!(board.distance(&a), Some(Distance::Infinite));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut board = HighlightBoard::new(&graph());
        let before = board.clone();
        board.apply(&event(Transition::Node {
            node: NodeId::from("Z"),
            state: VisitState::Current,
        }));
        board.apply(&event(Transition::Edge {
            edge: EdgeId::from(7),
            state: EdgeState::OnShortestPath,
        }));
        assert_eq!(board, before);
    }

    #[test]
    fn shared_board_forwards_to_inner() {
        let mut shared = HighlightBoard::new(&graph()).shared();
        shared.apply(&event(Transition::Node {
            node: NodeId::from("B"),
            state: VisitState::Current,
        }));
        assert_eq!(
            shared.read().node_state(&NodeId::from("B")),
            Some(VisitState::Current)
        );
    }
}
