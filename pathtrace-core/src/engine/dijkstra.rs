//! Traced Dijkstra
//!
//! Textbook single-source Dijkstra with a linear scan for the next node.
//! Graphs built by hand in a visualiser are small, and the linear scan keeps
//! the visiting order easy to follow in the trace.
//!
//! # Algorithm
//!
//! 1. Every node starts at infinity with no predecessor; the source is 0.
//! 2. While unvisited nodes remain, select the one with the smallest finite
//!    distance. If none is finite, the rest are unreachable and we stop.
//! 3. Mark the selected node current, then visited.
//! 4. For each incident edge whose other end is still unvisited, relax it.
//! 5. Once the loop ends, highlight the shortest path to every node.
//!
//! Ties in step 2 go to the node added to the graph first. The unvisited set
//! is an [`IndexSet`] and removal uses `shift_remove`, so the scan always
//! runs in insertion order.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use tracing::{debug, info, trace};

use super::distance::Distance;
use super::path::{reconstruct_path, Path};
use super::trace::{Trace, TraceBuilder};
use super::{DistanceTable, PredecessorTable};
use crate::config::AnimationConfig;
use crate::error::ValidationError;
use crate::graph::{EdgeId, GraphStore, NodeId};

/// Result of one shortest-path computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    source: NodeId,
    distances: DistanceTable,
    previous: PredecessorTable,
    /// Edge that performed each node's final relaxation.
    via_edges: IndexMap<NodeId, EdgeId>,
    trace: Trace,
}

impl ShortestPaths {
    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    pub fn previous(&self) -> &PredecessorTable {
        &self.previous
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Distance to `node`; `None` if the node was not in the graph.
    pub fn distance(&self, node: &NodeId) -> Option<Distance> {
        self.distances.get(node).copied()
    }

    /// Predecessor of `node` on its shortest path.
    pub fn predecessor(&self, node: &NodeId) -> Option<&NodeId> {
        self.previous.get(node).and_then(Option::as_ref)
    }

    /// Edge joining `node` to its predecessor.
    pub fn edge_into(&self, node: &NodeId) -> Option<EdgeId> {
        self.via_edges.get(node).copied()
    }

    /// Shortest path from the source to `target`; empty if unreachable.
    pub fn path_to(&self, target: &NodeId) -> Path {
        reconstruct_path(&self.previous, &self.source, target)
    }

    pub fn into_trace(self) -> Trace {
        self.trace
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Run Dijkstra from `source` and record the visit trace.
///
/// Fails if the graph is empty or `source` is not one of its nodes.
pub fn compute_shortest_paths(
    graph: &GraphStore,
    source: &NodeId,
    config: &AnimationConfig,
) -> Result<ShortestPaths, ValidationError> {
    if graph.is_empty() {
        return Err(ValidationError::EmptyGraph);
    }
    if !graph.contains(source) {
        return Err(ValidationError::UnknownNode(source.clone()));
    }

    debug!(
        source = %source,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "computing shortest paths"
    );

    let mut distances: DistanceTable = graph
        .node_ids()
        .map(|id| (id.clone(), Distance::Infinite))
        .collect();
    let mut previous: PredecessorTable = graph.node_ids().map(|id| (id.clone(), None)).collect();
    let mut via_edges = IndexMap::new();
    let mut unvisited: IndexSet<NodeId> = graph.node_ids().cloned().collect();
    let mut builder = TraceBuilder::new(config);

    distances.insert(source.clone(), Distance::ZERO);
    builder.begin(source);

    while let Some((current, current_distance)) = closest_unvisited(&unvisited, &distances) {
        debug!(node = %current, distance = current_distance, "visiting node");
        builder.current(&current);
        unvisited.shift_remove(&current);
        builder.visited(&current);

        for (edge, neighbor) in graph.neighbors(&current) {
            if !unvisited.contains(neighbor) {
                continue;
            }
            let candidate = Distance::Finite(current_distance).extend(edge.weight);
            let known = distances.get(neighbor).copied().unwrap_or_default();
            if candidate < known {
                let Distance::Finite(value) = candidate else {
                    continue;
                };
                trace!(node = %neighbor, distance = value, via = %current, "relaxed");
                distances.insert(neighbor.clone(), candidate);
                previous.insert(neighbor.clone(), Some(current.clone()));
                via_edges.insert(neighbor.clone(), edge.id);
                builder.relax(neighbor, value, &current, edge.id);
            }
        }
        builder.settle();
    }

    if !unvisited.is_empty() {
        debug!(unreachable = unvisited.len(), "stopping early, remaining nodes are unreachable");
    }

    let mut paths = ShortestPaths {
        source: source.clone(),
        distances,
        previous,
        via_edges,
        trace: Trace::default(),
    };
    highlight_paths(graph, &paths, &mut builder);
    paths.trace = builder.finish();

    debug!(events = paths.trace.len(), "shortest paths computed");
    Ok(paths)
}

/// The unvisited node with the smallest finite distance, first-added on ties.
fn closest_unvisited(
    unvisited: &IndexSet<NodeId>,
    distances: &DistanceTable,
) -> Option<(NodeId, u64)> {
    let mut best: Option<(&NodeId, u64)> = None;
    for id in unvisited {
        let Some(Distance::Finite(d)) = distances.get(id).copied() else {
            continue;
        };
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((id, d));
        }
    }
    best.map(|(id, d)| (id.clone(), d))
}

/// Append the path phase: every node and edge on a shortest path from the
/// source to each other node, each highlighted once.
fn highlight_paths(graph: &GraphStore, paths: &ShortestPaths, builder: &mut TraceBuilder<'_>) {
    let mut marked_nodes: IndexSet<&NodeId> = IndexSet::new();
    let mut marked_edges: IndexSet<EdgeId> = IndexSet::new();

    for target in graph.node_ids() {
        if target == &paths.source {
            continue;
        }
        let path = paths.path_to(target);
        if path.is_empty() {
            continue;
        }

        info!(
            "path from {} to {}: {}, distance {}",
            paths.source,
            target,
            path.iter().map(NodeId::as_str).collect::<Vec<_>>().join(" -> "),
            paths.distance(target).unwrap_or_default()
        );

        for node in &path {
            if let Some(id) = graph.node(node).map(|n| n.id()) {
                if marked_nodes.insert(id) {
                    builder.path_node(id);
                }
            }
        }
        for node in path.iter().skip(1) {
            if let Some(edge) = paths.edge_into(node) {
                if marked_edges.insert(edge) {
                    builder.path_edge(edge);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::trace::{EdgeState, Transition, VisitState};

    fn graph(nodes: &[&str], edges: &[(&str, &str, i64)]) -> GraphStore {
        let mut store = GraphStore::new();
        for id in nodes {
            store.add_node(*id).unwrap();
        }
        for (from, to, weight) in edges {
            store.add_edge(*from, *to, *weight).unwrap();
        }
        store
    }

    fn run(store: &GraphStore, source: &str) -> ShortestPaths {
        compute_shortest_paths(store, &NodeId::from(source), &AnimationConfig::default()).unwrap()
    }

    fn dist(paths: &ShortestPaths, node: &str) -> Distance {
        paths.distance(&NodeId::from(node)).unwrap()
    }

    #[test]
    fn triangle_prefers_two_hop_route() {
        let store = graph(&["A", "B", "C"], &[("A", "B", 1), ("B", "C", 2), ("A", "C", 5)]);
        let paths = run(&store, "A");

        assert_eq!(dist(&paths, "A"), Distance::ZERO);
        assert_eq!(dist(&paths, "B"), Distance::Finite(1));
        assert_eq!(dist(&paths, "C"), Distance::Finite(3));
        assert_eq!(paths.predecessor(&NodeId::from("B")), Some(&NodeId::from("A")));
        assert_eq!(paths.predecessor(&NodeId::from("C")), Some(&NodeId::from("B")));
        assert_eq!(paths.predecessor(&NodeId::from("A")), None);
    }

    #[test]
    fn disconnected_nodes_stay_infinite() {
        let store = graph(&["A", "B", "C"], &[("A", "B", 1)]);
        let paths = run(&store, "A");

        assert_eq!(dist(&paths, "B"), Distance::Finite(1));
        assert_eq!(dist(&paths, "C"), Distance::Infinite);
        assert_eq!(paths.previous().get(&NodeId::from("C")), Some(&None));
        assert!(paths.path_to(&NodeId::from("C")).is_empty());
    }

    #[test]
    fn rejects_empty_graph_and_unknown_source() {
        let empty = GraphStore::new();
        let config = AnimationConfig::default();
        assert_eq!(
            compute_shortest_paths(&empty, &NodeId::from("A"), &config).unwrap_err(),
            ValidationError::EmptyGraph
        );

        let store = graph(&["A"], &[]);
        assert_eq!(
            compute_shortest_paths(&store, &NodeId::from("Q"), &config).unwrap_err(),
            ValidationError::UnknownNode(NodeId::from("Q"))
        );
    }

    #[test]
    fn single_node_graph() {
        let store = graph(&["A"], &[]);
        let paths = run(&store, "A");
        assert_eq!(dist(&paths, "A"), Distance::ZERO);

        let kinds: Vec<_> = paths.trace().iter().map(|e| &e.transition).collect();
        assert_eq!(kinds.len(), 4);
        assert!(matches!(kinds[0], Transition::Begin { .. }));
    }

    #[test]
    fn ties_go_to_first_added_node() {
        // B and C are both at distance 2; C was added first.
        let store = graph(&["A", "C", "B"], &[("A", "B", 2), ("A", "C", 2)]);
        let paths = run(&store, "A");

        let visits: Vec<_> = paths
            .trace()
            .iter()
            .filter_map(|event| match &event.transition {
                Transition::Node {
                    node,
                    state: VisitState::Visited,
                } => Some(node.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(visits, vec!["A", "C", "B"]);
    }

    #[test]
    fn trace_follows_visit_protocol() {
        let store = graph(&["A", "B"], &[("A", "B", 4)]);
        let paths = run(&store, "A");
        let a = NodeId::from("A");
        let b = NodeId::from("B");

        let expected: Vec<(Transition, u64)> = vec![
            (Transition::Begin { source: a.clone() }, 0),
            (Transition::Node { node: a.clone(), state: VisitState::Current }, 500),
            (Transition::Node { node: a.clone(), state: VisitState::Current }, 700),
            (Transition::Node { node: a.clone(), state: VisitState::Visited }, 0),
            (
                Transition::Relax {
                    node: b.clone(),
                    distance: 4,
                    via: a.clone(),
                    edge: EdgeId::from(0),
                },
                300 + 500,
            ),
            (Transition::Node { node: b.clone(), state: VisitState::Current }, 700),
            (Transition::Node { node: b.clone(), state: VisitState::Visited }, 500),
            (Transition::Node { node: a.clone(), state: VisitState::OnShortestPath }, 0),
            (Transition::Node { node: b.clone(), state: VisitState::OnShortestPath }, 0),
            (
                Transition::Edge {
                    edge: EdgeId::from(0),
                    state: EdgeState::OnShortestPath,
                },
                0,
            ),
        ];
        let actual: Vec<_> = paths
            .trace()
            .iter()
            .map(|e| (e.transition.clone(), e.delay_ms))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn path_edges_use_the_relaxing_edge() {
        // Two parallel A-B edges; the lighter one was added second.
        let store = graph(&["A", "B"], &[("A", "B", 9), ("B", "A", 2)]);
        let paths = run(&store, "A");

        assert_eq!(dist(&paths, "B"), Distance::Finite(2));
        assert_eq!(paths.edge_into(&NodeId::from("B")), Some(EdgeId::from(1)));

        let highlighted: Vec<_> = paths
            .trace()
            .iter()
            .filter_map(|event| match &event.transition {
                Transition::Edge { edge, .. } => Some(*edge),
                _ => None,
            })
            .collect();
        assert_eq!(highlighted, vec![EdgeId::from(1)]);
    }

    #[test]
    fn shared_path_prefix_is_highlighted_once() {
        let store = graph(
            &["A", "B", "C", "D"],
            &[("A", "B", 1), ("B", "C", 1), ("B", "D", 1)],
        );
        let paths = run(&store, "A");

        let path_nodes = paths
            .trace()
            .iter()
            .filter(|event| {
                matches!(
                    event.transition,
                    Transition::Node {
                        state: VisitState::OnShortestPath,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(path_nodes, 4);
    }

    #[test]
    fn serializes_infinite_distances_as_null() {
        let store = graph(&["A", "B"], &[]);
        let json: serde_json::Value =
            serde_json::from_str(&run(&store, "A").to_json().unwrap()).unwrap();
        assert_eq!(json["distances"]["A"], 0);
        assert!(json["distances"]["B"].is_null());
        assert!(json["previous"]["B"].is_null());
    }
}
