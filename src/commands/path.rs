//! `pathfinder path` command - shortest path between two nodes
//!
//! Advisories about the algorithm choice go through the log (stderr).

use crate::cli::Cli;
use crate::commands::format::{distance, output_by_format_result, print_json};
use pathfinder_core::error::Result;
use pathfinder_core::graph::{Coordinates, Graph, PathQuery, PathResult};
use pathfinder_core::Engine;

/// Execute the path command
pub fn execute(
    cli: &Cli,
    engine: &Engine,
    graph: &Graph,
    query: &PathQuery,
    coordinates: Option<&Coordinates>,
) -> Result<()> {
    let result = engine.calculate_shortest_path(graph, query, coordinates)?;

    output_by_format_result!(cli.format,
        json => print_json(&result),
        human => { print_human(cli, query, &result); }
    )
}

fn print_human(cli: &Cli, query: &PathQuery, result: &PathResult) {
    if result.exists {
        println!("{}", result.path.join(" -> "));
        println!("distance: {}", distance(result.distance));
    } else {
        println!("no path from {} to {}", query.source, query.target);
    }

    if cli.quiet {
        return;
    }

    println!(
        "algorithm: {} ({} hops, {} visited, {:.3} ms)",
        result.algorithm_used,
        result.hops(),
        result.visited_nodes_count,
        result.execution_time_ms
    );
    if let Some(visited) = &result.visited_nodes {
        println!("visited: {}", visited.join(", "));
    }
}
