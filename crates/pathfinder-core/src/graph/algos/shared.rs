use std::collections::BTreeMap;
use std::time::Instant;

use crate::error::{PathfinderError, Result};
use crate::graph::{AdjacencyIndex, AlgorithmType, NodeId, PathResult};
use crate::logging::elapsed_ms;

/// Resolve a node id to its dense index, failing with `UnknownNode`
pub fn resolve_node(index: &AdjacencyIndex, role: &str, id: &str) -> Result<usize> {
    index
        .index_of(id)
        .ok_or_else(|| PathfinderError::unknown_node(role, id))
}

/// Result for a query whose source and target coincide
pub fn reflexive_result(
    node: &str,
    algorithm: AlgorithmType,
    include_visited: bool,
    start: Instant,
) -> PathResult {
    PathResult::found(
        vec![node.to_string()],
        0.0,
        algorithm,
        elapsed_ms(start),
        1,
        include_visited.then(|| vec![node.to_string()]),
    )
}

/// Per-invocation search state, indexed by dense node index
#[derive(Debug)]
pub struct SearchState {
    /// Best known cost from the source (g-score)
    pub distance: Vec<f64>,
    pub predecessor: Vec<Option<usize>>,
    /// Settled nodes (BFS: discovered nodes)
    pub closed: Vec<bool>,
    pub closed_count: usize,
    /// Settle order, only kept when diagnostics were requested
    pub visited_order: Option<Vec<usize>>,
}

impl SearchState {
    pub fn new(len: usize, source: usize, track_order: bool) -> Self {
        let mut distance = vec![f64::INFINITY; len];
        distance[source] = 0.0;
        Self {
            distance,
            predecessor: vec![None; len],
            closed: vec![false; len],
            closed_count: 0,
            visited_order: track_order.then(Vec::new),
        }
    }

    /// Mark `node` as settled. Returns false if it already was.
    pub fn close(&mut self, node: usize) -> bool {
        if self.closed[node] {
            return false;
        }
        self.closed[node] = true;
        self.closed_count += 1;
        if let Some(order) = self.visited_order.as_mut() {
            order.push(node);
        }
        true
    }

    pub fn is_closed(&self, node: usize) -> bool {
        self.closed[node]
    }

    /// Walk predecessors back from `target`; empty if it was never reached
    pub fn path_to(&self, target: usize) -> Vec<usize> {
        if !self.distance[target].is_finite() {
            return Vec::new();
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessor[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        path
    }
}

/// Assemble the [`PathResult`] for `target` from a finished search
pub fn build_result(
    index: &AdjacencyIndex,
    state: &SearchState,
    target: usize,
    algorithm: AlgorithmType,
    start: Instant,
) -> PathResult {
    let elapsed = elapsed_ms(start);
    let visited_nodes = state
        .visited_order
        .as_ref()
        .map(|order| names(index, order));

    let path = state.path_to(target);
    if path.is_empty() {
        PathResult::unreachable(algorithm, elapsed, state.closed_count, visited_nodes)
    } else {
        PathResult::found(
            names(index, &path),
            state.distance[target],
            algorithm,
            elapsed,
            state.closed_count,
            visited_nodes,
        )
    }
}

/// Map dense indices back to node ids
pub fn names(index: &AdjacencyIndex, nodes: &[usize]) -> Vec<NodeId> {
    nodes.iter().map(|&n| index.name(n).to_string()).collect()
}

/// Distance to every node of the index, keyed by node id
pub fn distance_map(index: &AdjacencyIndex, distances: &[f64]) -> BTreeMap<NodeId, f64> {
    index
        .names()
        .iter()
        .cloned()
        .zip(distances.iter().copied())
        .collect()
}

/// Emit the per-search debug line
pub fn log_search(source: &str, target: &str, result: &PathResult) {
    tracing::debug!(
        algorithm = %result.algorithm_used,
        source,
        target,
        distance = result.distance,
        exists = result.exists,
        elapsed_ms = result.execution_time_ms,
        visited = result.visited_nodes_count,
        "search complete"
    );
}
