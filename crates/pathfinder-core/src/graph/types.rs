use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{PathfinderError, Result};
use crate::graph::NodeId;

/// Planar coordinates per node, consumed by the A* heuristic
pub type Coordinates = HashMap<NodeId, (f64, f64)>;

/// Available search strategies
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmType {
    /// Non-negative weighted shortest path
    #[default]
    Dijkstra,
    /// Unweighted (hop count) shortest path
    Bfs,
    /// Heuristic-guided weighted shortest path
    AStar,
}

impl AlgorithmType {
    /// Every algorithm, in benchmark order
    pub const ALL: [AlgorithmType; 3] = [
        AlgorithmType::Dijkstra,
        AlgorithmType::Bfs,
        AlgorithmType::AStar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmType::Dijkstra => "dijkstra",
            AlgorithmType::Bfs => "bfs",
            AlgorithmType::AStar => "astar",
        }
    }
}

impl FromStr for AlgorithmType {
    type Err = PathfinderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dijkstra" => Ok(AlgorithmType::Dijkstra),
            "bfs" => Ok(AlgorithmType::Bfs),
            "astar" | "a*" => Ok(AlgorithmType::AStar),
            other => Err(PathfinderError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for AlgorithmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single source/target request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathQuery {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default)]
    pub algorithm: AlgorithmType,
    #[serde(default)]
    pub include_visited: bool,
}

impl PathQuery {
    /// Build a query with trimmed, non-empty endpoints
    pub fn new(source: &str, target: &str) -> Result<Self> {
        let source = source.trim();
        let target = target.trim();
        if source.is_empty() {
            crate::bail_invalid!("source", "node identifiers must be non-empty strings");
        }
        if target.is_empty() {
            crate::bail_invalid!("target", "node identifiers must be non-empty strings");
        }
        Ok(Self {
            source: source.to_string(),
            target: target.to_string(),
            algorithm: AlgorithmType::default(),
            include_visited: false,
        })
    }

    pub fn with_algorithm(mut self, algorithm: AlgorithmType) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_include_visited(mut self, include_visited: bool) -> Self {
        self.include_visited = include_visited;
        self
    }
}

/// Serialize a distance, writing `null` for the unreachable sentinel
pub fn serialize_distance<S: Serializer>(
    distance: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    if distance.is_finite() {
        serializer.serialize_f64(*distance)
    } else {
        serializer.serialize_none()
    }
}

/// Outcome of a single shortest-path search.
///
/// `exists == false` always comes with an empty path and an infinite
/// distance; `exists == true` with a path running from source to target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub path: Vec<NodeId>,
    #[serde(serialize_with = "serialize_distance")]
    pub distance: f64,
    pub algorithm_used: AlgorithmType,
    pub execution_time_ms: f64,
    pub visited_nodes_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visited_nodes: Option<Vec<NodeId>>,
    pub exists: bool,
}

impl PathResult {
    pub fn found(
        path: Vec<NodeId>,
        distance: f64,
        algorithm_used: AlgorithmType,
        execution_time_ms: f64,
        visited_nodes_count: usize,
        visited_nodes: Option<Vec<NodeId>>,
    ) -> Self {
        debug_assert!(!path.is_empty());
        Self {
            path,
            distance,
            algorithm_used,
            execution_time_ms,
            visited_nodes_count,
            visited_nodes,
            exists: true,
        }
    }

    pub fn unreachable(
        algorithm_used: AlgorithmType,
        execution_time_ms: f64,
        visited_nodes_count: usize,
        visited_nodes: Option<Vec<NodeId>>,
    ) -> Self {
        Self {
            path: Vec::new(),
            distance: f64::INFINITY,
            algorithm_used,
            execution_time_ms,
            visited_nodes_count,
            visited_nodes,
            exists: false,
        }
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
