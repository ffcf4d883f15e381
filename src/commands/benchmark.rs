//! `pathfinder benchmark` command - compare all algorithms on one query

use crate::cli::Cli;
use crate::commands::format::{distance, output_by_format_result, print_json};
use pathfinder_core::benchmark::BenchmarkReport;
use pathfinder_core::error::Result;
use pathfinder_core::graph::{Coordinates, Graph};
use pathfinder_core::Engine;

/// Execute the benchmark command
pub fn execute(
    cli: &Cli,
    engine: &Engine,
    graph: &Graph,
    source: &str,
    target: &str,
    coordinates: Option<&Coordinates>,
) -> Result<()> {
    let report = engine.benchmark(graph, source, target, coordinates)?;

    output_by_format_result!(cli.format,
        json => print_json(&report),
        human => { print_human(cli, &report); }
    )
}

fn print_human(cli: &Cli, report: &BenchmarkReport) {
    println!("{} -> {}", report.source, report.target);
    for (algorithm, result) in &report.results {
        println!(
            "  {:<9} distance {:<8} hops {:<4} visited {:<6} {:.3} ms",
            algorithm.as_str(),
            distance(result.distance),
            result.hops(),
            result.visited_nodes_count,
            result.execution_time_ms
        );
    }
    for (algorithm, reason) in &report.failures {
        println!("  {:<9} failed: {reason}", algorithm.as_str());
    }

    if cli.quiet {
        return;
    }

    if let Some(summary) = &report.performance_summary {
        println!(
            "fastest: {} ({:.3} ms), slowest: {} ({:.3} ms), speedup {:.2}x",
            summary.fastest_algorithm,
            summary.fastest_time_ms,
            summary.slowest_algorithm,
            summary.slowest_time_ms,
            summary.speedup_factor
        );
    }
}
