//! Command trait and context for dispatching commands

use std::time::Instant;

use tracing::debug;

use super::io::{load_config, load_coordinates, load_graph};
use crate::cli::{Cli, Commands};
use crate::commands;
use pathfinder_core::error::{PathfinderError, Result};
use pathfinder_core::graph::{Coordinates, Graph};
use pathfinder_core::Engine;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Engine built from `--config`, or defaults
    pub fn engine(&self) -> Result<Engine> {
        let config = load_config(self.cli.config.as_deref())?;
        debug!(elapsed = ?self.start.elapsed(), "load_config");
        Ok(Engine::new(config))
    }

    /// The graph named by `--graph`
    pub fn graph(&self) -> Result<Graph> {
        let path = self.cli.graph.as_deref().ok_or_else(|| {
            PathfinderError::UsageError("this command needs a graph: pass --graph <file>".into())
        })?;
        let graph = load_graph(path)?;
        debug!(elapsed = ?self.start.elapsed(), "load_graph");
        Ok(graph)
    }

    pub fn coordinates(&self, path: Option<&std::path::Path>) -> Result<Option<Coordinates>> {
        path.map(load_coordinates).transpose()
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("pathfinder {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths over graphs with BFS, Dijkstra and A*.");
        println!();
        println!("Run `pathfinder --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let engine = ctx.engine()?;
        let graph = ctx.graph()?;

        match self {
            Commands::Path {
                source,
                target,
                algorithm,
                include_visited,
                coords,
            } => {
                let mut query = engine.query(source, target)?;
                if let Some(algorithm) = algorithm {
                    query = query.with_algorithm(*algorithm);
                }
                if *include_visited {
                    query = query.with_include_visited(true);
                }
                let coordinates = ctx.coordinates(coords.as_deref())?;
                commands::path::execute(ctx.cli, &engine, &graph, &query, coordinates.as_ref())
            }

            Commands::AllPaths { source, algorithm } => {
                let algorithm = algorithm.unwrap_or(engine.config().default_algorithm);
                commands::all_paths::execute(ctx.cli, &engine, &graph, source, algorithm)
            }

            Commands::Recommend => commands::recommend::execute(ctx.cli, &engine, &graph),

            Commands::Benchmark {
                source,
                target,
                coords,
            } => {
                let coordinates = ctx.coordinates(coords.as_deref())?;
                commands::benchmark::execute(
                    ctx.cli,
                    &engine,
                    &graph,
                    source,
                    target,
                    coordinates.as_ref(),
                )
            }

            Commands::Components => commands::components::execute(ctx.cli, &engine, &graph),

            Commands::CheckHeuristic { a, b, coords } => {
                let coordinates = load_coordinates(coords)?;
                commands::heuristic::execute(ctx.cli, &engine, &graph, a, b, &coordinates)
            }
        }
    }
}
