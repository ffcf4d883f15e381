//! CLI argument parsing for pathfinder
//!
//! Global flags: --graph, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pathfinder_core::graph::AlgorithmType;
pub use output::OutputFormat;
use parse::parse_algorithm;

/// Pathfinder - shortest paths over graphs with BFS, Dijkstra and A*
#[derive(Parser, Debug)]
#[command(name = "pathfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph JSON file ({"directed", "nodes", "edges"})
    #[arg(long, short, global = true, env = "PATHFINDER_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Engine configuration (TOML)
    #[arg(long, global = true, env = "PATHFINDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest path between two nodes
    Path {
        /// Start node
        source: String,

        /// Destination node
        target: String,

        /// Algorithm (dijkstra, bfs, astar); defaults to the configured one
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Option<AlgorithmType>,

        /// Report the nodes the search settled, in order
        #[arg(long)]
        include_visited: bool,

        /// Node coordinates JSON ({"id": [x, y]}) for the A* heuristic
        #[arg(long)]
        coords: Option<PathBuf>,
    },

    /// Distance from one node to every other node
    AllPaths {
        /// Start node
        source: String,

        /// Algorithm (dijkstra, bfs, astar); defaults to the configured one
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Option<AlgorithmType>,
    },

    /// Recommend an algorithm for the graph
    Recommend,

    /// Run every algorithm on the same query and compare timings
    Benchmark {
        /// Start node
        source: String,

        /// Destination node
        target: String,

        /// Node coordinates JSON for the A* heuristic
        #[arg(long)]
        coords: Option<PathBuf>,
    },

    /// List connected components (edge direction ignored)
    Components,

    /// Compare the coordinate heuristic with the exact distance
    CheckHeuristic {
        /// First node
        a: String,

        /// Second node
        b: String,

        /// Node coordinates JSON
        #[arg(long)]
        coords: PathBuf,
    },
}
