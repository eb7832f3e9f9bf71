//! Shortest-Path Engine
//!
//! Runs single-source Dijkstra over a [`GraphStore`](crate::graph::GraphStore)
//! and produces three things:
//!
//! - a [`DistanceTable`]: best distance from the source to every node,
//! - a [`PredecessorTable`]: the node each best distance was reached from,
//! - a [`Trace`]: the ordered highlight changes a renderer can animate.
//!
//! Unreachable nodes are a normal outcome: they keep an infinite distance
//! and no predecessor.
//!
//! The engine never renders and never sleeps. Pacing the trace is the job
//! of [`crate::replay`].

mod dijkstra;
mod distance;
mod path;
mod run;
mod trace;

use indexmap::IndexMap;

use crate::graph::NodeId;

pub use dijkstra::{compute_shortest_paths, ShortestPaths};
pub use distance::Distance;
pub use path::{reconstruct_path, Path};
pub use run::{Run, RunGuard, ShortestPathEngine};
pub use trace::{EdgeState, Trace, Transition, VisitEvent, VisitState};

/// Best-known distance per node, in graph insertion order.
pub type DistanceTable = IndexMap<NodeId, Distance>;

/// Predecessor per node; `None` for the source and for unreachable nodes.
pub type PredecessorTable = IndexMap<NodeId, Option<NodeId>>;
