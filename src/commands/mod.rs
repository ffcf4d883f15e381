//! CLI commands for pathfinder

pub mod all_paths;
pub mod benchmark;
pub mod components;
pub mod dispatch;
pub mod format;
pub mod heuristic;
pub mod path;
pub mod recommend;
