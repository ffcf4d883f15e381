//! `pathfinder recommend` command - suggest an algorithm for the graph

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json};
use pathfinder_core::error::Result;
use pathfinder_core::graph::Graph;
use pathfinder_core::selector::Recommendations;
use pathfinder_core::Engine;

/// Execute the recommend command
pub fn execute(cli: &Cli, engine: &Engine, graph: &Graph) -> Result<()> {
    let recs = engine.recommend(graph);

    output_by_format_result!(cli.format,
        json => print_json(&recs),
        human => { print_human(cli, &recs); }
    )
}

fn print_human(cli: &Cli, recs: &Recommendations) {
    let alternatives: Vec<&str> = recs.alternatives.iter().map(|a| a.as_str()).collect();
    println!("primary: {}", recs.primary);
    println!("alternatives: {}", alternatives.join(", "));

    if cli.quiet {
        return;
    }

    for reason in &recs.reasoning {
        println!("  - {reason}");
    }

    let stats = &recs.graph_stats;
    println!();
    println!(
        "{} nodes, {} edges, {}, density {:.4}",
        stats.nodes,
        stats.edges,
        if stats.directed { "directed" } else { "undirected" },
        stats.density
    );
    if let Some(weights) = &stats.weights {
        println!(
            "weights: min {} / max {} / avg {:.4}",
            weights.min, weights.max, weights.avg
        );
    }
}
