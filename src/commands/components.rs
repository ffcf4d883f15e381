//! `pathfinder components` command - connected components of the graph

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json};
use pathfinder_core::error::Result;
use pathfinder_core::graph::Graph;
use pathfinder_core::Engine;

/// Execute the components command
pub fn execute(cli: &Cli, engine: &Engine, graph: &Graph) -> Result<()> {
    let components = engine.connected_components(graph);

    output_by_format_result!(cli.format,
        json => print_json(&serde_json::json!({
            "count": components.len(),
            "components": components,
        })),
        human => {
            for (i, component) in components.iter().enumerate() {
                let members: Vec<&str> = component.iter().map(String::as_str).collect();
                println!("{}: {}", i + 1, members.join(", "));
            }
            if !cli.quiet {
                println!("{} component(s)", components.len());
            }
        }
    )
}
