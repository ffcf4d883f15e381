use serde::Serialize;

use super::Graph;

/// Summary statistics the selector bases its recommendations on
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub directed: bool,
    /// `E / N(N-1)` for directed graphs, `E / (N(N-1)/2)` for undirected;
    /// 0 when the graph has a single node
    pub density: f64,
    /// Every edge weight is 1.0 within tolerance (vacuously true with no edges)
    pub unit_weight: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<WeightStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl GraphStats {
    pub fn compute(graph: &Graph, unit_tolerance: f64) -> Self {
        let nodes = graph.node_count();
        let edges = graph.edge_count();

        let density = if nodes <= 1 {
            0.0
        } else {
            let n = nodes as f64;
            let possible = if graph.directed() {
                n * (n - 1.0)
            } else {
                n * (n - 1.0) / 2.0
            };
            edges as f64 / possible
        };

        let weights = if edges == 0 {
            None
        } else {
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            let mut sum = 0.0;
            for edge in graph.edges() {
                min = min.min(edge.weight);
                max = max.max(edge.weight);
                sum += edge.weight;
            }
            Some(WeightStats {
                min,
                max,
                avg: sum / edges as f64,
            })
        };

        Self {
            nodes,
            edges,
            directed: graph.directed(),
            density,
            unit_weight: graph.is_unit_weight(unit_tolerance),
            weights,
        }
    }
}
