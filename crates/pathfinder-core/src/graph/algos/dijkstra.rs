use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};
use std::time::Instant;

use crate::error::Result;
use crate::graph::algos::shared::{
    build_result, distance_map, log_search, reflexive_result, resolve_node, SearchState,
};
use crate::graph::algos::ShortestPath;
use crate::graph::{AdjacencyIndex, AlgorithmType, Graph, NodeId, PathResult};

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative cost)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub cost: f64,
    pub node: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Run Dijkstra from `source`.
///
/// Stops as soon as `target` is settled; with no target every reachable node
/// is settled. Stale heap entries are skipped on pop.
pub(crate) fn search(
    index: &AdjacencyIndex,
    source: usize,
    target: Option<usize>,
    track_order: bool,
) -> SearchState {
    let mut state = SearchState::new(index.len(), source, track_order);
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        cost: 0.0,
        node: source,
    }));

    while let Some(Reverse(HeapEntry { cost, node })) = heap.pop() {
        if !state.close(node) {
            continue;
        }
        if Some(node) == target {
            break;
        }

        for &(neighbor, weight) in index.neighbors(node) {
            if state.is_closed(neighbor) {
                continue;
            }
            let candidate = cost + weight;
            if candidate < state.distance[neighbor] {
                state.distance[neighbor] = candidate;
                state.predecessor[neighbor] = Some(node);
                heap.push(Reverse(HeapEntry {
                    cost: candidate,
                    node: neighbor,
                }));
            }
        }
    }

    state
}

/// Weighted shortest path over non-negative edge weights
#[derive(Debug, Clone)]
pub struct Dijkstra {
    index: AdjacencyIndex,
}

impl Dijkstra {
    pub fn new(graph: &Graph) -> Self {
        Self {
            index: AdjacencyIndex::build(graph),
        }
    }
}

impl ShortestPath for Dijkstra {
    fn algorithm(&self) -> AlgorithmType {
        AlgorithmType::Dijkstra
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

    fn find_all_shortest_paths(&self, source: &str) -> Result<BTreeMap<NodeId, f64>> {
        let from = resolve_node(&self.index, "source", source)?;
        let state = search(&self.index, from, None, false);
        Ok(distance_map(&self.index, &state.distance))
    }
}

#[cfg(test)]
mod tests;
