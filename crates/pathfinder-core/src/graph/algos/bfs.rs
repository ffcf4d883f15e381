use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::time::Instant;

use crate::error::Result;
use crate::graph::algos::shared::{
    build_result, distance_map, log_search, reflexive_result, resolve_node, SearchState,
};
use crate::graph::algos::ShortestPath;
use crate::graph::{AdjacencyIndex, AlgorithmType, Graph, NodeId, PathResult};

/// Level-order expansion from `source`.
///
/// Nodes are marked on enqueue, so `closed` is the discovered set and
/// `distance` holds hop counts. Stops the moment `target` is discovered.
fn search(
    index: &AdjacencyIndex,
    source: usize,
    target: Option<usize>,
    track_order: bool,
) -> SearchState {
    let mut state = SearchState::new(index.len(), source, track_order);
    let mut queue = VecDeque::new();
    state.close(source);
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        let hops = state.distance[node] + 1.0;
        for &(neighbor, _) in index.neighbors(node) {
            if !state.close(neighbor) {
                continue;
            }
            state.distance[neighbor] = hops;
            state.predecessor[neighbor] = Some(node);
            if Some(neighbor) == target {
                return state;
            }
            queue.push_back(neighbor);
        }
    }

    state
}

/// Unweighted shortest path: every edge costs one hop regardless of weight
#[derive(Debug, Clone)]
pub struct Bfs {
    index: AdjacencyIndex,
}

impl Bfs {
    pub fn new(graph: &Graph) -> Self {
        Self {
            index: AdjacencyIndex::build(graph),
        }
    }

    /// Whether hop counts coincide with weighted distances on this graph
    pub fn is_suitable(&self, tolerance: f64) -> bool {
        self.index.is_unit_weight(tolerance)
    }

    /// Partition every node into disjoint sets.
    ///
    /// Edge direction is ignored, so directed graphs yield their weakly
    /// connected components. Sets come out in order of their first node.
    pub fn connected_components(&self) -> Vec<BTreeSet<NodeId>> {
        let undirected = self.index.symmetrized();
        let mut assigned = vec![false; undirected.len()];
        let mut components = Vec::new();

        for root in 0..undirected.len() {
            if assigned[root] {
                continue;
            }
            let state = search(&undirected, root, None, true);
            let members = state.visited_order.unwrap_or_default();
            let mut component = BTreeSet::new();
            for node in members {
                assigned[node] = true;
                component.insert(undirected.name(node).to_string());
            }
            components.push(component);
        }

        tracing::debug!(count = components.len(), "connected components");
        components
    }
}

impl ShortestPath for Bfs {
    fn algorithm(&self) -> AlgorithmType {
        AlgorithmType::Bfs
    }

    fn find_shortest_path(
        &self,
        source: &str,
        target: &str,
        include_visited: bool,
    ) -> Result<PathResult> {
        let start = Instant::now();
        let from = resolve_node(&self.index, "source", source)?;
        let to = resolve_node(&self.index, "target", target)?;

        if from == to {
            return Ok(reflexive_result(
                source,
                self.algorithm(),
                include_visited,
                start,
            ));
        }

        let state = search(&self.index, from, Some(to), include_visited);
        let result = build_result(&self.index, &state, to, self.algorithm(), start);
        log_search(source, target, &result);
        Ok(result)
    }

    /// Hop count to every node
    fn find_all_shortest_paths(&self, source: &str) -> Result<BTreeMap<NodeId, f64>> {
        let from = resolve_node(&self.index, "source", source)?;
        let state = search(&self.index, from, None, false);
        Ok(distance_map(&self.index, &state.distance))
    }
}
