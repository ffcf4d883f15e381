//! Adjacency index derived from a [`Graph`]
//!
//! Node ids are interned to dense indices so search state can live in plain
//! vectors. The index is built once per algorithm instance and never mutated.

use std::collections::HashMap;

use super::{Graph, NodeId};

/// Outgoing `(neighbor, weight)` lists for every node of a graph.
///
/// Every node has an entry, even when it has no edges. Undirected edges are
/// recorded in both directions.
#[derive(Debug, Clone)]
pub struct AdjacencyIndex {
    directed: bool,
    names: Vec<NodeId>,
    positions: HashMap<NodeId, usize>,
    neighbors: Vec<Vec<(usize, f64)>>,
}

impl AdjacencyIndex {
    /// Index honoring the graph's own directedness
    pub fn build(graph: &Graph) -> Self {
        let directed = graph.directed();
        let names: Vec<NodeId> = graph.nodes().to_vec();
        let positions: HashMap<NodeId, usize> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        let mut neighbors: Vec<Vec<(usize, f64)>> = vec![Vec::new(); names.len()];

        // Endpoints were checked when the graph was built
        for edge in graph.edges() {
            let (Some(&from), Some(&to)) = (positions.get(&edge.from), positions.get(&edge.to))
            else {
                continue;
            };
            neighbors[from].push((to, edge.weight));
            if !directed {
                neighbors[to].push((from, edge.weight));
            }
        }

        Self {
            directed,
            names,
            positions,
            neighbors,
        }
    }

    /// Undirected view of this index; a plain copy when already undirected
    pub fn symmetrized(&self) -> Self {
        if !self.directed {
            return self.clone();
        }
        let mut neighbors: Vec<Vec<(usize, f64)>> = vec![Vec::new(); self.names.len()];
        for (from, list) in self.neighbors.iter().enumerate() {
            for &(to, weight) in list {
                neighbors[from].push((to, weight));
                neighbors[to].push((from, weight));
            }
        }
        Self {
            directed: false,
            names: self.names.clone(),
            positions: self.positions.clone(),
            neighbors,
        }
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    pub fn names(&self) -> &[NodeId] {
        &self.names
    }

    /// Neighbors of the node at `index`, in edge-list order
    pub fn neighbors(&self, index: usize) -> &[(usize, f64)] {
        &self.neighbors[index]
    }

    /// Neighbors of a node by id; `None` for ids outside the graph
    pub fn neighbors_of<'a>(&'a self, id: &str) -> Option<impl Iterator<Item = (&'a str, f64)>> {
        let index = self.index_of(id)?;
        Some(
            self.neighbors[index]
                .iter()
                .map(move |&(n, w)| (self.names[n].as_str(), w)),
        )
    }

    /// Every weight in the index is within `tolerance` of 1.0
    pub fn is_unit_weight(&self, tolerance: f64) -> bool {
        self.neighbors
            .iter()
            .flatten()
            .all(|&(_, w)| (w - 1.0).abs() <= tolerance)
    }
}
