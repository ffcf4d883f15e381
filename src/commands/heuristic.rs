//! `pathfinder check-heuristic` command - admissibility of the A* heuristic

use crate::cli::Cli;
use crate::commands::format::{distance, output_by_format_result, print_json};
use pathfinder_core::error::Result;
use pathfinder_core::graph::{Coordinates, Graph};
use pathfinder_core::Engine;

/// Execute the check-heuristic command
pub fn execute(
    cli: &Cli,
    engine: &Engine,
    graph: &Graph,
    a: &str,
    b: &str,
    coordinates: &Coordinates,
) -> Result<()> {
    let check = engine.check_heuristic(graph, a, b, coordinates)?;

    output_by_format_result!(cli.format,
        json => print_json(&check),
        human => {
            println!("h({}, {}) = {}", check.source, check.target, check.heuristic);
            println!("actual = {}", distance(check.actual));
            println!("admissible: {}", if check.admissible { "yes" } else { "no" });
        }
    )
}
