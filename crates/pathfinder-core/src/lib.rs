//! Pathfinder Core Library
//!
//! Shortest-path search over in-memory graphs: BFS, Dijkstra and A*, plus
//! algorithm recommendation, benchmarking and heuristic checks.

pub mod benchmark;
pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod logging;
pub mod selector;

pub use engine::Engine;
pub use error::{PathfinderError, Result};
