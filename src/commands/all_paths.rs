//! `pathfinder all-paths` command - distances from one node to all others

use std::collections::BTreeMap;

use crate::cli::Cli;
use crate::commands::format::{distance, output_by_format_result, print_json};
use pathfinder_core::error::Result;
use pathfinder_core::graph::{AlgorithmType, Graph};
use pathfinder_core::Engine;

/// Execute the all-paths command
pub fn execute(
    cli: &Cli,
    engine: &Engine,
    graph: &Graph,
    source: &str,
    algorithm: AlgorithmType,
) -> Result<()> {
    let distances = engine.all_shortest_paths(graph, source, algorithm)?;
    let reachable = distances.values().filter(|d| d.is_finite()).count();

    output_by_format_result!(cli.format,
        json => {
            // Unreachable nodes serialize as null
            let distances: BTreeMap<&str, Option<f64>> = distances
                .iter()
                .map(|(node, d)| (node.as_str(), d.is_finite().then_some(*d)))
                .collect();
            print_json(&serde_json::json!({
                "source": source.trim(),
                "algorithm": algorithm,
                "reachable": reachable,
                "distances": distances,
            }))
        },
        human => {
            for (node, d) in &distances {
                println!("{node}\t{}", distance(*d));
            }
            if !cli.quiet {
                println!("{reachable} of {} nodes reachable ({algorithm})", distances.len());
            }
        }
    )
}
