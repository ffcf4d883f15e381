//! Engine context
//!
//! [`Engine`] carries the configuration every operation consults. It holds no
//! mutable state, so a single instance can be shared across threads.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use crate::benchmark::{self, BenchmarkReport};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::graph::{
    AStar, AlgorithmType, Bfs, Coordinates, Graph, HeuristicCheck, NodeId, PathQuery, PathResult,
    ShortestPath,
};
use crate::selector::{self, Advisory, Recommendations};

#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Query pre-filled with the configured algorithm and diagnostics flag
    pub fn query(&self, source: &str, target: &str) -> Result<PathQuery> {
        Ok(PathQuery::new(source, target)?
            .with_algorithm(self.config.default_algorithm)
            .with_include_visited(self.config.include_visited))
    }

    /// Validate the algorithm choice, build it and run the query.
    ///
    /// Coordinates only affect A*.
    #[tracing::instrument(skip(self, graph, coordinates), fields(algorithm = %query.algorithm))]
    pub fn calculate_shortest_path(
        &self,
        graph: &Graph,
        query: &PathQuery,
        coordinates: Option<&Coordinates>,
    ) -> Result<PathResult> {
        self.validate_algorithm_choice(graph, query.algorithm);

        let mut finder = selector::create_algorithm(query.algorithm, graph);
        if let Some(coordinates) = coordinates {
            let applied = finder.set_coordinates(coordinates);
            tracing::debug!(applied, "coordinates applied");
        }

        let result = finder.find_shortest_path(&query.source, &query.target, query.include_visited)?;
        tracing::info!(
            source = %query.source,
            target = %query.target,
            exists = result.exists,
            elapsed_ms = format_args!("{:.2}", result.execution_time_ms),
            "path calculation completed"
        );
        Ok(result)
    }

    /// Distance from `source` to every node
    #[tracing::instrument(skip(self, graph))]
    pub fn all_shortest_paths(
        &self,
        graph: &Graph,
        source: &str,
        algorithm: AlgorithmType,
    ) -> Result<BTreeMap<NodeId, f64>> {
        self.validate_algorithm_choice(graph, algorithm);
        selector::create_algorithm(algorithm, graph).find_all_shortest_paths(source.trim())
    }

    pub fn recommend(&self, graph: &Graph) -> Recommendations {
        selector::recommend(graph, &self.config.selector)
    }

    pub fn validate_algorithm_choice(&self, graph: &Graph, algorithm: AlgorithmType) -> Vec<Advisory> {
        selector::validate_algorithm_choice(graph, algorithm, &self.config.selector)
    }

    #[tracing::instrument(skip(self, graph, coordinates))]
    pub fn benchmark(
        &self,
        graph: &Graph,
        source: &str,
        target: &str,
        coordinates: Option<&Coordinates>,
    ) -> Result<BenchmarkReport> {
        benchmark::run(self, graph, source, target, coordinates)
    }

    /// Weakly connected components, disjoint and covering every node
    pub fn connected_components(&self, graph: &Graph) -> Vec<BTreeSet<NodeId>> {
        let start = Instant::now();
        let components = Bfs::new(graph).connected_components();
        crate::trace_time!(start, "connected_components", count = components.len());
        components
    }

    /// Compare the coordinate heuristic between `a` and `b` with the exact distance
    pub fn check_heuristic(
        &self,
        graph: &Graph,
        a: &str,
        b: &str,
        coordinates: &Coordinates,
    ) -> Result<HeuristicCheck> {
        AStar::new(graph)
            .with_coordinates(coordinates)
            .heuristic_check(a.trim(), b.trim())
    }
}
