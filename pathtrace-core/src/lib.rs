//! Pathtrace Core
//!
//! This crate provides the core of an interactive shortest-path visualiser.
//! It implements:
//!
//! - A graph store for small, hand-built weighted graphs
//! - A Dijkstra engine that records each step as a replayable trace
//! - Paced, cancellable replay of that trace into a rendering sink
//!
//! Drawing, layout and input handling belong to the caller. The crate only
//! accepts graph edits and hands back distances, predecessors and the
//! ordered highlight changes to animate.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `graph`: Node and edge storage with validated mutation
//! - `engine`: Shortest-path computation and trace generation
//! - `replay`: Trace pacing, cancellation and highlight state
//! - `session`: Command-driven pairing of a graph with an engine
//!
//! # Example
//!
//! ```rust
//! use pathtrace_core::graph::{GraphStore, NodeId};
//! use pathtrace_core::engine::{compute_shortest_paths, Distance};
//! use pathtrace_core::AnimationConfig;
//!
//! let mut graph = GraphStore::new();
//! for id in ["A", "B", "C"] {
//!     graph.add_node(id)?;
//! }
//! graph.add_edge("A", "B", 1)?;
//! graph.add_edge("B", "C", 2)?;
//! graph.add_edge("A", "C", 5)?;
//!
//! let paths = compute_shortest_paths(&graph, &NodeId::from("A"), &AnimationConfig::default())?;
//! assert_eq!(paths.distance(&NodeId::from("C")), Some(Distance::Finite(3)));
//! assert_eq!(paths.path_to(&NodeId::from("C")).len(), 3);
//! # Ok::<(), pathtrace_core::ValidationError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod replay;
pub mod session;

pub use config::AnimationConfig;
pub use error::{Error, Result, ValidationError};
pub use session::{Applied, Command, Session};
