//! Visit Trace
//!
//! The engine records every highlight change it would like a renderer to
//! show, in order, as a [`Trace`]. Each event carries the nominal pause that
//! should follow it. The trace is plain data: producing it never waits, and
//! replaying it is up to the caller (see [`crate::replay`]).

use serde::{Deserialize, Serialize};

use crate::config::AnimationConfig;
use crate::graph::{EdgeId, NodeId};

/// Highlight state of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitState {
    #[default]
    Unvisited,
    Current,
    Visited,
    OnShortestPath,
}

/// Highlight state of an edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeState {
    #[default]
    Normal,
    OnShortestPath,
}

/// One highlight change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    /// Clear all highlights and distances; `source` starts at zero.
    Begin { source: NodeId },

    /// A node moves to a new visit state.
    Node { node: NodeId, state: VisitState },

    /// A node's best-known distance improved through `via` along `edge`.
    ///
    /// This is a transient flash: the node's visit state is unchanged.
    Relax {
        node: NodeId,
        distance: u64,
        via: NodeId,
        edge: EdgeId,
    },

    /// An edge moves to a new highlight state.
    Edge { edge: EdgeId, state: EdgeState },
}

/// A transition and the pause that should follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitEvent {
    #[serde(flatten)]
    pub transition: Transition,
    pub delay_ms: u64,
}

/// Ordered sequence of visit events for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    events: Vec<VisitEvent>,
}

impl Trace {
    pub fn events(&self) -> &[VisitEvent] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VisitEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Sum of every nominal delay.
    pub fn total_delay_ms(&self) -> u64 {
        self.events.iter().map(|event| event.delay_ms).sum()
    }

    /// Parse a trace from JSON.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the trace to JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a VisitEvent;
    type IntoIter = std::slice::Iter<'a, VisitEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Appends events stamped with the configured delays.
pub(crate) struct TraceBuilder<'a> {
    config: &'a AnimationConfig,
    events: Vec<VisitEvent>,
}

impl<'a> TraceBuilder<'a> {
    pub(crate) fn new(config: &'a AnimationConfig) -> Self {
        Self {
            config,
            events: Vec::new(),
        }
    }

    fn push(&mut self, transition: Transition, delay_ms: u64) {
        self.events.push(VisitEvent {
            transition,
            delay_ms,
        });
    }

    pub(crate) fn begin(&mut self, source: &NodeId) {
        self.push(
            Transition::Begin {
                source: source.clone(),
            },
            0,
        );
        self.push(
            Transition::Node {
                node: source.clone(),
                state: VisitState::Current,
            },
            self.config.start_delay_ms,
        );
    }

    pub(crate) fn current(&mut self, node: &NodeId) {
        self.node(node, VisitState::Current, self.config.current_delay_ms);
    }

    pub(crate) fn visited(&mut self, node: &NodeId) {
        self.node(node, VisitState::Visited, 0);
    }

    pub(crate) fn relax(&mut self, node: &NodeId, distance: u64, via: &NodeId, edge: EdgeId) {
        self.push(
            Transition::Relax {
                node: node.clone(),
                distance,
                via: via.clone(),
                edge,
            },
            self.config.relax_delay_ms,
        );
    }

    /// Add the post-neighbourhood pause to the most recent event.
    pub(crate) fn settle(&mut self) {
        if let Some(last) = self.events.last_mut() {
            last.delay_ms += self.config.settle_delay_ms;
        }
    }

    pub(crate) fn path_node(&mut self, node: &NodeId) {
        self.node(node, VisitState::OnShortestPath, self.config.path_delay_ms);
    }

    pub(crate) fn path_edge(&mut self, edge: EdgeId) {
        self.push(
            Transition::Edge {
                edge,
                state: EdgeState::OnShortestPath,
            },
            self.config.path_delay_ms,
        );
    }

    fn node(&mut self, node: &NodeId, state: VisitState, delay_ms: u64) {
        self.push(
            Transition::Node {
                node: node.clone(),
                state,
            },
            delay_ms,
        );
    }

    pub(crate) fn finish(self) -> Trace {
        Trace {
            events: self.events,
        }
    }
}
