//! Side-by-side runs of every algorithm on one query

use std::collections::BTreeMap;

use serde::Serialize;

use crate::engine::Engine;
use crate::error::{PathfinderError, Result};
use crate::graph::{AlgorithmType, Coordinates, Graph, PathQuery, PathResult};

/// Results of running every algorithm on the same source/target pair.
///
/// Algorithms that failed appear in `failures` instead of `results`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    pub source: String,
    pub target: String,
    pub results: BTreeMap<AlgorithmType, PathResult>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub failures: BTreeMap<AlgorithmType, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_summary: Option<PerformanceSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub fastest_algorithm: AlgorithmType,
    pub fastest_time_ms: f64,
    pub slowest_algorithm: AlgorithmType,
    pub slowest_time_ms: f64,
    /// `slowest / fastest`, 1.0 when the fastest run took no measurable time
    pub speedup_factor: f64,
}

impl PerformanceSummary {
    fn from_results(results: &BTreeMap<AlgorithmType, PathResult>) -> Option<Self> {
        let by_time = |a: &&PathResult, b: &&PathResult| {
            a.execution_time_ms.total_cmp(&b.execution_time_ms)
        };
        let fastest = results.values().min_by(by_time)?;
        let slowest = results.values().max_by(by_time)?;

        let speedup_factor = if fastest.execution_time_ms > 0.0 {
            slowest.execution_time_ms / fastest.execution_time_ms
        } else {
            1.0
        };

        Some(Self {
            fastest_algorithm: fastest.algorithm_used,
            fastest_time_ms: fastest.execution_time_ms,
            slowest_algorithm: slowest.algorithm_used,
            slowest_time_ms: slowest.execution_time_ms,
            speedup_factor,
        })
    }
}

impl BenchmarkReport {
    /// Fastest successful algorithm, if any succeeded
    pub fn fastest(&self) -> Option<AlgorithmType> {
        self.performance_summary
            .as_ref()
            .map(|summary| summary.fastest_algorithm)
    }
}

/// Run Dijkstra, BFS and A* in turn.
///
/// The query is validated once up front, so unknown endpoints fail the whole
/// benchmark. An algorithm failing past that point is logged and skipped.
pub fn run(
    engine: &Engine,
    graph: &Graph,
    source: &str,
    target: &str,
    coordinates: Option<&Coordinates>,
) -> Result<BenchmarkReport> {
    let query = PathQuery::new(source, target)?;
    if !graph.contains(&query.source) {
        return Err(PathfinderError::unknown_node("source", &query.source));
    }
    if !graph.contains(&query.target) {
        return Err(PathfinderError::unknown_node("target", &query.target));
    }

    let mut results = BTreeMap::new();
    let mut failures = BTreeMap::new();

    for algorithm in AlgorithmType::ALL {
        let query = query.clone().with_algorithm(algorithm);
        match engine.calculate_shortest_path(graph, &query, coordinates) {
            Ok(result) => {
                results.insert(algorithm, result);
            }
            Err(e) => {
                tracing::error!(algorithm = %algorithm, error = %e, "benchmark run failed");
                failures.insert(algorithm, e.to_string());
            }
        }
    }

    let performance_summary = PerformanceSummary::from_results(&results);
    if let Some(summary) = &performance_summary {
        tracing::info!(
            fastest = %summary.fastest_algorithm,
            time_ms = summary.fastest_time_ms,
            "benchmark complete"
        );
    }

    Ok(BenchmarkReport {
        source: query.source,
        target: query.target,
        results,
        failures,
        performance_summary,
    })
}
