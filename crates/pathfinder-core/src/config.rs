//! Engine configuration for pathfinder
//!
//! Configuration is read from a TOML file. Every field has a default, so an
//! empty file (or no file at all) yields [`EngineConfig::default`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PathfinderError, Result};
use crate::graph::AlgorithmType;

/// Tolerance used when deciding whether an edge weight counts as 1.0
pub const UNIT_WEIGHT_TOLERANCE: f64 = 1e-9;

/// Top-level engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Algorithm used when a query does not name one
    pub default_algorithm: AlgorithmType,
    /// Record visited nodes in results unless the caller says otherwise
    pub include_visited: bool,
    /// Algorithm selector thresholds
    pub selector: SelectorConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_algorithm: AlgorithmType::Dijkstra,
            include_visited: false,
            selector: SelectorConfig::default(),
        }
    }
}

/// Thresholds driving algorithm recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Maximum deviation from 1.0 for a weight to count as unit
    pub unit_weight_tolerance: f64,
    /// Node count above which A* is offered as an alternative
    pub large_graph_nodes: usize,
    /// Node count above which bidirectional search is suggested
    pub very_large_graph_nodes: usize,
    /// Density above which a slow-search advisory is emitted
    pub dense_threshold: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            unit_weight_tolerance: UNIT_WEIGHT_TOLERANCE,
            large_graph_nodes: 1000,
            very_large_graph_nodes: 5000,
            dense_threshold: 0.5,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PathfinderError::io_operation("read config", path.display(), e))?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let selector = &self.selector;
        if !selector.unit_weight_tolerance.is_finite() || selector.unit_weight_tolerance < 0.0 {
            crate::bail_invalid!(
                "selector.unit_weight_tolerance",
                selector.unit_weight_tolerance
            );
        }
        if !(0.0..=1.0).contains(&selector.dense_threshold) {
            crate::bail_invalid!("selector.dense_threshold", selector.dense_threshold);
        }
        if selector.very_large_graph_nodes < selector.large_graph_nodes {
            crate::bail_invalid!(
                "selector.very_large_graph_nodes",
                format!(
                    "{} (must be >= large_graph_nodes {})",
                    selector.very_large_graph_nodes, selector.large_graph_nodes
                )
            );
        }
        Ok(())
    }
}
