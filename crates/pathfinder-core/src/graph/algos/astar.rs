use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};
use std::time::Instant;

use serde::Serialize;

use crate::error::Result;
use crate::graph::algos::dijkstra;
use crate::graph::algos::shared::{
    build_result, distance_map, log_search, reflexive_result, resolve_node, SearchState,
};
use crate::graph::algos::ShortestPath;
use crate::graph::types::serialize_distance;
use crate::graph::{AdjacencyIndex, AlgorithmType, Coordinates, Graph, NodeId, PathResult};

/// Open-set entry keyed by (f-score, g-score, node)
#[derive(Debug, Clone, Copy)]
pub struct OpenEntry {
    pub f_score: f64,
    pub g_score: f64,
    pub node: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_score
            .total_cmp(&other.f_score)
            .then_with(|| self.g_score.total_cmp(&other.g_score))
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Outcome of comparing the heuristic with the exact distance between two nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeuristicCheck {
    pub source: NodeId,
    pub target: NodeId,
    pub heuristic: f64,
    /// Exact shortest distance, `null` in JSON when unreachable
    #[serde(serialize_with = "serialize_distance")]
    pub actual: f64,
    /// `heuristic <= actual`; vacuously true when no path exists
    pub admissible: bool,
}

/// Heuristic-guided weighted shortest path.
///
/// The heuristic is the Euclidean distance between node coordinates. Nodes
/// that were never given coordinates sit at the origin, so with no
/// coordinates at all the search degrades to Dijkstra's expansion order.
#[derive(Debug, Clone)]
pub struct AStar {
    index: AdjacencyIndex,
    coordinates: Vec<(f64, f64)>,
    placed: Vec<bool>,
}

impl AStar {
    pub fn new(graph: &Graph) -> Self {
        let index = AdjacencyIndex::build(graph);
        Self {
            coordinates: vec![(0.0, 0.0); index.len()],
            placed: vec![false; index.len()],
            index,
        }
    }

    pub fn with_coordinates(mut self, coordinates: &Coordinates) -> Self {
        self.set_coordinates(coordinates);
        self
    }

    /// Merge `coordinates` into the heuristic's node positions.
    ///
    /// Ids outside the graph are ignored. Returns how many were applied.
    pub fn set_coordinates(&mut self, coordinates: &Coordinates) -> usize {
        let mut applied = 0;
        for (id, &position) in coordinates {
            match self.index.index_of(id) {
                Some(node) => {
                    self.coordinates[node] = position;
                    self.placed[node] = true;
                    applied += 1;
                }
                None => tracing::debug!(node = %id, "ignoring coordinates for unknown node"),
            }
        }
        applied
    }

    /// Number of nodes with explicitly assigned coordinates
    pub fn placed_count(&self) -> usize {
        self.placed.iter().filter(|&&p| p).count()
    }

    fn heuristic(&self, node: usize, target: usize) -> f64 {
        let (x1, y1) = self.coordinates[node];
        let (x2, y2) = self.coordinates[target];
        (x1 - x2).hypot(y1 - y2)
    }

    fn search(&self, source: usize, target: usize, track_order: bool) -> SearchState {
        let mut state = SearchState::new(self.index.len(), source, track_order);
        let mut open = BinaryHeap::new();
        open.push(Reverse(OpenEntry {
            f_score: self.heuristic(source, target),
            g_score: 0.0,
            node: source,
        }));

        while let Some(Reverse(OpenEntry { g_score, node, .. })) = open.pop() {
            if !state.close(node) {
                continue;
            }
            if node == target {
                break;
            }

            for &(neighbor, weight) in self.index.neighbors(node) {
                if state.is_closed(neighbor) {
                    continue;
                }
                let tentative = g_score + weight;
                if tentative < state.distance[neighbor] {
                    state.distance[neighbor] = tentative;
                    state.predecessor[neighbor] = Some(node);
                    open.push(Reverse(OpenEntry {
                        f_score: tentative + self.heuristic(neighbor, target),
                        g_score: tentative,
                        node: neighbor,
                    }));
                }
            }
        }

        state
    }

    /// Heuristic estimate between `a` and `b` next to their exact distance
    pub fn heuristic_check(&self, a: &str, b: &str) -> Result<HeuristicCheck> {
        let from = resolve_node(&self.index, "source", a)?;
        let to = resolve_node(&self.index, "target", b)?;

        let heuristic = self.heuristic(from, to);
        let actual = dijkstra::search(&self.index, from, Some(to), false).distance[to];
        let admissible = !actual.is_finite() || heuristic <= actual;
        if !admissible {
            tracing::warn!(source = a, target = b, heuristic, actual, "heuristic overestimates");
        }

        Ok(HeuristicCheck {
            source: a.to_string(),
            target: b.to_string(),
            heuristic,
            actual,
            admissible,
        })
    }

    /// `h(a, b)` never exceeds the exact distance from `a` to `b`
    pub fn is_admissible_heuristic(&self, a: &str, b: &str) -> Result<bool> {
        Ok(self.heuristic_check(a, b)?.admissible)
    }
}

impl ShortestPath for AStar {
    fn algorithm(&self) -> AlgorithmType {
        AlgorithmType::AStar
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

        if self.placed_count() == 0 {
            tracing::debug!("no coordinates assigned, heuristic is zero everywhere");
        }

        let state = self.search(from, to, include_visited);
        let result = build_result(&self.index, &state, to, self.algorithm(), start);
        log_search(source, target, &result);
        Ok(result)
    }

    /// Without a target there is nothing to aim the heuristic at, so this
    /// runs a plain exhaustive Dijkstra.
    fn find_all_shortest_paths(&self, source: &str) -> Result<BTreeMap<NodeId, f64>> {
        let from = resolve_node(&self.index, "source", source)?;
        let state = dijkstra::search(&self.index, from, None, false);
        Ok(distance_map(&self.index, &state.distance))
    }
}

#[cfg(test)]
mod tests;
