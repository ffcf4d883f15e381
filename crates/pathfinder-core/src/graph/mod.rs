//! Graph model and shortest-path search
//!
//! - `model`: the immutable [`Graph`] value and its boundary validation
//! - `adjacency`: the per-search [`AdjacencyIndex`]
//! - `algos`: BFS, Dijkstra and A* behind the [`ShortestPath`] trait
//! - `stats`: summary statistics used by the algorithm selector

pub mod adjacency;
pub mod algos;
pub mod model;
pub mod stats;
pub mod types;

pub use adjacency::AdjacencyIndex;
pub use algos::{AStar, Bfs, Dijkstra, HeuristicCheck, PathFinder, ShortestPath};
pub use model::{Edge, Graph, GraphInput, NodeId, MAX_NODES};
pub use stats::{GraphStats, WeightStats};
pub use types::{AlgorithmType, Coordinates, PathQuery, PathResult};
