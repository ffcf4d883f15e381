//! Immutable graph value type
//!
//! A [`Graph`] is validated once at construction and never mutated afterwards,
//! so every search can trust that edge endpoints exist and weights are
//! strictly positive.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::bail_invalid_graph;
use crate::error::{PathfinderError, Result};

/// Node identifier
pub type NodeId = String;

/// Largest node list accepted at the boundary
pub const MAX_NODES: usize = 10_000;

fn default_weight() -> f64 {
    1.0
}

/// A connection between two nodes carrying a positive weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl Edge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Edge with the default weight of 1.0
    pub fn unweighted(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self::new(from, to, default_weight())
    }
}

/// Wire shape of a graph, before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphInput {
    pub directed: bool,
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// In-memory graph: ordered node list, ordered edge list, directedness flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GraphInput", into = "GraphInput")]
pub struct Graph {
    directed: bool,
    nodes: Vec<NodeId>,
    edges: Vec<Edge>,
    positions: HashMap<NodeId, usize>,
}

impl Graph {
    /// Build a graph, rejecting anything that violates the input contract:
    /// between one and [`MAX_NODES`] nodes, unique non-blank ids, known edge
    /// endpoints and finite weights greater than zero.
    ///
    /// Node ids and edge endpoints are stored trimmed.
    pub fn new(directed: bool, nodes: Vec<NodeId>, edges: Vec<Edge>) -> Result<Self> {
        if nodes.is_empty() {
            bail_invalid_graph!("graph must contain at least one node");
        }
        if nodes.len() > MAX_NODES {
            bail_invalid_graph!(
                "graph has {} nodes, at most {} are allowed",
                nodes.len(),
                MAX_NODES
            );
        }

        let nodes: Vec<NodeId> = nodes.into_iter().map(trimmed).collect();
        let edges: Vec<Edge> = edges
            .into_iter()
            .map(|edge| Edge {
                from: trimmed(edge.from),
                to: trimmed(edge.to),
                weight: edge.weight,
            })
            .collect();

        let mut positions = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if node.is_empty() {
                bail_invalid_graph!("node identifiers must be non-empty strings");
            }
            if positions.insert(node.clone(), i).is_some() {
                bail_invalid_graph!("duplicate node identifier: {}", node);
            }
        }

        for (i, edge) in edges.iter().enumerate() {
            if !positions.contains_key(&edge.from) {
                bail_invalid_graph!("edge {} references non-existent 'from' node: {}", i, edge.from);
            }
            if !positions.contains_key(&edge.to) {
                bail_invalid_graph!("edge {} references non-existent 'to' node: {}", i, edge.to);
            }
            if !edge.weight.is_finite() || edge.weight <= 0.0 {
                bail_invalid_graph!("edge {} weight must be positive: {}", i, edge.weight);
            }
        }

        Ok(Self {
            directed,
            nodes,
            edges,
            positions,
        })
    }

    /// Parse and validate a graph from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        let input: GraphInput = serde_json::from_str(json)?;
        Self::try_from(input)
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// True when every edge weight is within `tolerance` of 1.0
    pub fn is_unit_weight(&self, tolerance: f64) -> bool {
        self.edges
            .iter()
            .all(|e| (e.weight - 1.0).abs() <= tolerance)
    }

    /// Weight of the cheapest edge joining `from` to `to`, honoring directedness
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        self.edges
            .iter()
            .filter(|e| {
                (e.from == from && e.to == to) || (!self.directed && e.from == to && e.to == from)
            })
            .map(|e| e.weight)
            .min_by(f64::total_cmp)
    }

    /// Summed weight along `path`, or `None` if two consecutive nodes are not
    /// joined by an edge. A single-node path weighs 0.
    pub fn path_weight(&self, path: &[NodeId]) -> Option<f64> {
        path.windows(2)
            .map(|pair| self.edge_weight(&pair[0], &pair[1]))
            .sum()
    }
}

fn trimmed(id: NodeId) -> NodeId {
    let trimmed = id.trim();
    if trimmed.len() == id.len() {
        id
    } else {
        trimmed.to_string()
    }
}

impl TryFrom<GraphInput> for Graph {
    type Error = PathfinderError;

    fn try_from(input: GraphInput) -> Result<Self> {
        Graph::new(input.directed, input.nodes, input.edges)
    }
}

impl From<Graph> for GraphInput {
    fn from(graph: Graph) -> Self {
        GraphInput {
            directed: graph.directed,
            nodes: graph.nodes,
            edges: graph.edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(ids: &[&str]) -> Vec<NodeId> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_graph() {
        let graph = Graph::new(
            false,
            nodes(&["A", "B", "C"]),
            vec![Edge::unweighted("A", "B"), Edge::new("B", "C", 2.5)],
        )
        .unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.contains("C"));
        assert!(!graph.contains("D"));
    }

    #[test]
    fn test_empty_graph_rejected() {
        let err = Graph::new(true, vec![], vec![]).unwrap_err();
        assert!(matches!(err, PathfinderError::InvalidGraph { .. }));
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let err = Graph::new(true, nodes(&["A", "A"]), vec![]).unwrap_err();
        assert!(err.to_string().contains("duplicate node identifier: A"));
    }

    #[test]
    fn test_blank_node_rejected() {
        let err = Graph::new(true, nodes(&["A", "  "]), vec![]).unwrap_err();
        assert!(matches!(err, PathfinderError::InvalidGraph { .. }));
    }

    #[test]
    fn test_padded_ids_are_trimmed() {
        let graph = Graph::new(
            false,
            nodes(&[" A ", "B\t"]),
            vec![Edge::new(" A ", "B", 1.0)],
        )
        .unwrap();
        assert_eq!(graph.nodes(), &["A", "B"]);
        assert_eq!(graph.edges()[0].from, "A");
        assert_eq!(graph.edges()[0].to, "B");
        assert!(graph.contains("A"));
        assert!(!graph.contains(" A "));
    }

    #[test]
    fn test_ids_equal_after_trimming_are_duplicates() {
        let err = Graph::new(true, nodes(&["A", " A"]), vec![]).unwrap_err();
        assert!(err.to_string().contains("duplicate node identifier: A"));
    }

    #[test]
    fn test_node_cap() {
        let ids: Vec<NodeId> = (0..MAX_NODES).map(|i| format!("n{i}")).collect();
        assert!(Graph::new(true, ids.clone(), vec![]).is_ok());

        let mut over = ids;
        over.push("extra".into());
        let err = Graph::new(true, over, vec![]).unwrap_err();
        assert!(matches!(err, PathfinderError::InvalidGraph { .. }));
        assert!(err.to_string().contains("at most 10000"));
    }

    #[test]
    fn test_unknown_endpoint_rejected() {
        let err = Graph::new(true, nodes(&["A"]), vec![Edge::unweighted("A", "Z")]).unwrap_err();
        assert!(err.to_string().contains("non-existent 'to' node: Z"));
    }

    #[test]
    fn test_non_positive_weight_rejected() {
        for weight in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Graph::new(true, nodes(&["A", "B"]), vec![Edge::new("A", "B", weight)]);
            assert!(result.is_err(), "weight {weight} should be rejected");
        }
    }

    #[test]
    fn test_from_json_defaults_weight() {
        let graph = Graph::from_json(
            r#"{"directed": true, "nodes": ["A", "B"], "edges": [{"from": "A", "to": "B"}]}"#,
        )
        .unwrap();
        assert_eq!(graph.edges()[0].weight, 1.0);
        assert!(graph.is_unit_weight(1e-9));
    }

    #[test]
    fn test_from_json_validates() {
        let err = Graph::from_json(r#"{"directed": true, "nodes": []}"#).unwrap_err();
        assert!(matches!(err, PathfinderError::InvalidGraph { .. }));
    }

    #[test]
    fn test_serde_roundtrip_preserves_order() {
        let graph = Graph::new(
            true,
            nodes(&["C", "A", "B"]),
            vec![Edge::new("C", "A", 3.0)],
        )
        .unwrap();
        let json = serde_json::to_string(&graph).unwrap();
        let back: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(back.nodes(), graph.nodes());
        assert_eq!(back.edges(), graph.edges());
    }

    #[test]
    fn test_path_weight_directed() {
        let graph = Graph::new(
            true,
            nodes(&["A", "B", "C"]),
            vec![Edge::new("A", "B", 5.0), Edge::new("A", "C", 2.0), Edge::new("C", "B", 1.0)],
        )
        .unwrap();
        assert_eq!(graph.path_weight(&nodes(&["A", "C", "B"])), Some(3.0));
        assert_eq!(graph.path_weight(&nodes(&["B", "A"])), None);
        assert_eq!(graph.path_weight(&nodes(&["A"])), Some(0.0));
    }

    #[test]
    fn test_edge_weight_undirected_picks_cheapest() {
        let graph = Graph::new(
            false,
            nodes(&["A", "B"]),
            vec![Edge::new("A", "B", 4.0), Edge::new("B", "A", 1.5)],
        )
        .unwrap();
        assert_eq!(graph.edge_weight("A", "B"), Some(1.5));
        assert_eq!(graph.edge_weight("B", "A"), Some(1.5));
    }
}
