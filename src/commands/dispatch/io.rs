//! Loading graph, coordinate and config files named on the command line

use std::fs;
use std::path::Path;

use tracing::debug;

use pathfinder_core::config::EngineConfig;
use pathfinder_core::error::{PathfinderError, Result};
use pathfinder_core::graph::{Coordinates, Graph};

fn read(kind: &str, path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PathfinderError::not_found(kind, path.display()));
    }
    fs::read_to_string(path)
        .map_err(|e| PathfinderError::io_operation(&format!("read {kind}"), path.display(), e))
}

pub(super) fn load_graph(path: &Path) -> Result<Graph> {
    let graph = Graph::from_json(&read("graph file", path)?)?;
    debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        directed = graph.directed(),
        "loaded graph"
    );
    Ok(graph)
}

/// Coordinates are a JSON object mapping node ids to `[x, y]`
pub(super) fn load_coordinates(path: &Path) -> Result<Coordinates> {
    let coordinates: Coordinates = serde_json::from_str(&read("coordinates file", path)?)?;
    debug!(path = %path.display(), count = coordinates.len(), "loaded coordinates");
    Ok(coordinates)
}

pub(super) fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) if !path.exists() => Err(PathfinderError::not_found("config file", path.display())),
        Some(path) => EngineConfig::load(path),
        None => Ok(EngineConfig::default()),
    }
}
