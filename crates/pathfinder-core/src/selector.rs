//! Algorithm selection
//!
//! Recommendations are a pure function of graph statistics. Validation of an
//! explicit choice only produces advisories; no choice is ever rejected.

use serde::Serialize;

use crate::config::SelectorConfig;
use crate::graph::{AlgorithmType, Graph, GraphStats, PathFinder};

/// Suggested algorithms for a graph, with the reasons behind them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    pub primary: AlgorithmType,
    pub alternatives: Vec<AlgorithmType>,
    pub reasoning: Vec<String>,
    pub graph_stats: GraphStats,
}

pub fn recommend(graph: &Graph, config: &SelectorConfig) -> Recommendations {
    let stats = GraphStats::compute(graph, config.unit_weight_tolerance);
    let mut reasoning = Vec::new();

    let (primary, mut alternatives) = if stats.unit_weight {
        reasoning.push("BFS recommended for unweighted graphs (optimal and fastest)".to_string());
        (AlgorithmType::Bfs, vec![AlgorithmType::Dijkstra])
    } else {
        reasoning.push("Dijkstra recommended for weighted graphs (guaranteed optimal)".to_string());
        (AlgorithmType::Dijkstra, vec![AlgorithmType::AStar])
    };

    if stats.nodes > config.large_graph_nodes {
        if !alternatives.contains(&AlgorithmType::AStar) {
            alternatives.push(AlgorithmType::AStar);
        }
        reasoning.push("A* may be faster for large graphs with a good heuristic".to_string());
    }

    if stats.nodes > config.very_large_graph_nodes {
        reasoning.push("Consider bidirectional search for very large graphs".to_string());
    }

    if stats.density > config.dense_threshold {
        reasoning.push("Dense graph detected, searches may take longer".to_string());
    }

    tracing::debug!(
        primary = %primary,
        nodes = stats.nodes,
        density = stats.density,
        "computed recommendations"
    );

    Recommendations {
        primary,
        alternatives,
        reasoning,
        graph_stats: stats,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryLevel {
    Info,
    Warning,
}

/// Non-fatal note about an explicitly chosen algorithm
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub level: AdvisoryLevel,
    pub algorithm: AlgorithmType,
    pub message: String,
}

/// Check an explicit algorithm choice against the graph.
///
/// Advisories are logged as well as returned.
pub fn validate_algorithm_choice(
    graph: &Graph,
    algorithm: AlgorithmType,
    config: &SelectorConfig,
) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    match algorithm {
        AlgorithmType::Bfs if !graph.is_unit_weight(config.unit_weight_tolerance) => {
            tracing::warn!("BFS chosen for a weighted graph, consider Dijkstra for exact distances");
            advisories.push(Advisory {
                level: AdvisoryLevel::Warning,
                algorithm,
                message: "graph has non-unit edge weights; BFS counts hops, use dijkstra for weighted distances".to_string(),
            });
        }
        AlgorithmType::AStar => {
            tracing::info!("A* chosen, supply node coordinates for a useful heuristic");
            advisories.push(Advisory {
                level: AdvisoryLevel::Info,
                algorithm,
                message: "A* needs node coordinates for its heuristic; without them it behaves like dijkstra".to_string(),
            });
        }
        AlgorithmType::Bfs | AlgorithmType::Dijkstra => {}
    }

    advisories
}

/// Factory for the runtime-selected strategy
pub fn create_algorithm(algorithm: AlgorithmType, graph: &Graph) -> PathFinder {
    PathFinder::new(algorithm, graph)
}
