//! Graph algorithm implementations
//!
//! Contains concrete implementations of the shortest-path strategies:
//! - `bfs`: Breadth-first search for unweighted (hop count) paths
//! - `dijkstra`: Weighted shortest path with lazy re-insertion
//! - `astar`: Heuristic-guided weighted shortest path
//! - `shared`: Search state and result assembly used by all three

pub mod astar;
pub mod bfs;
pub mod dijkstra;
pub mod shared;

use std::collections::BTreeMap;

pub use astar::{AStar, HeuristicCheck};
pub use bfs::Bfs;
pub use dijkstra::Dijkstra;

use crate::error::Result;
use crate::graph::{AlgorithmType, Coordinates, Graph, NodeId, PathResult};

/// Capability shared by every search strategy.
///
/// Implementations own their adjacency index and keep no state between calls,
/// so one instance can serve any number of queries.
pub trait ShortestPath {
    /// Which strategy this is
    fn algorithm(&self) -> AlgorithmType;

    /// Shortest path from `source` to `target`.
    ///
    /// Fails with `UnknownNode` if either endpoint is not in the graph.
    fn find_shortest_path(
        &self,
        source: &str,
        target: &str,
        include_visited: bool,
    ) -> Result<PathResult>;

    /// Distance from `source` to every node, `f64::INFINITY` when unreachable
    fn find_all_shortest_paths(&self, source: &str) -> Result<BTreeMap<NodeId, f64>>;
}

/// One of the three strategies, chosen at runtime
#[derive(Debug, Clone)]
pub enum PathFinder {
    Bfs(Bfs),
    Dijkstra(Dijkstra),
    AStar(AStar),
}

impl PathFinder {
    /// Build the strategy named by `algorithm` over `graph`
    pub fn new(algorithm: AlgorithmType, graph: &Graph) -> Self {
        match algorithm {
            AlgorithmType::Bfs => PathFinder::Bfs(Bfs::new(graph)),
            AlgorithmType::Dijkstra => PathFinder::Dijkstra(Dijkstra::new(graph)),
            AlgorithmType::AStar => PathFinder::AStar(AStar::new(graph)),
        }
    }

    /// Merge node coordinates into the A* heuristic.
    ///
    /// Returns the number of coordinates applied; always 0 for strategies
    /// that use no heuristic.
    pub fn set_coordinates(&mut self, coordinates: &Coordinates) -> usize {
        match self {
            PathFinder::AStar(astar) => astar.set_coordinates(coordinates),
            PathFinder::Bfs(_) | PathFinder::Dijkstra(_) => 0,
        }
    }

    fn inner(&self) -> &dyn ShortestPath {
        match self {
            PathFinder::Bfs(bfs) => bfs,
            PathFinder::Dijkstra(dijkstra) => dijkstra,
            PathFinder::AStar(astar) => astar,
        }
    }
}

impl ShortestPath for PathFinder {
    fn algorithm(&self) -> AlgorithmType {
        self.inner().algorithm()
    }

    fn find_shortest_path(
        &self,
        source: &str,
        target: &str,
        include_visited: bool,
    ) -> Result<PathResult> {
        self.inner()
            .find_shortest_path(source, target, include_visited)
    }

    fn find_all_shortest_paths(&self, source: &str) -> Result<BTreeMap<NodeId, f64>> {
        self.inner().find_all_shortest_paths(source)
    }
}
