//! Graph Store
//!
//! This module holds the weighted graph that the shortest-path engine runs
//! over.
//!
//! # Overview
//!
//! - Nodes are identified by a string label and carry no other data. Layout
//!   and drawing are left to whoever renders the graph.
//! - Edges join two distinct nodes with a positive integer weight. They are
//!   recorded with a direction but traversed as undirected.
//!
//! Nodes and edges are only ever added; the whole graph can be reset.
//!
//! # Design Decisions
//!
//! 1. Nodes live in an insertion-ordered map so that "first added" is a
//!    well-defined tie-break for the engine.
//!
//! 2. Each node keeps the ids of its incident edges, so neighbour lookup does
//!    not scan the full edge list.

mod edge;
mod node;
mod snapshot;
mod store;

pub use edge::{Edge, EdgeId};
pub use node::{Node, NodeId};
pub use snapshot::{EdgeSpec, GraphSnapshot};
pub use store::GraphStore;
