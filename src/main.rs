//! Pathfinder - shortest-path CLI
//!
//! Loads a graph from JSON and runs BFS, Dijkstra or A* over it, recommends
//! an algorithm for the graph, or benchmarks all three side by side.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use pathfinder_core::error::{ExitCode as PathfinderExitCode, PathfinderError};
use pathfinder_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(PathfinderExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Report a clap failure. `Cli.format` is not available yet, so a JSON
/// request is read straight from argv and answered with an error envelope.
fn report_parse_error(err: clap::Error) -> ExitCode {
    if !wants_json(env::args().skip(1)) {
        err.exit();
    }
    match classify_parse_error(&err) {
        Some(error) => {
            eprintln!("{}", error.to_json());
            ExitCode::from(error.exit_code() as u8)
        }
        None => err.exit(),
    }
}

/// Error kind for a clap failure; `None` for help and version output
fn classify_parse_error(err: &clap::Error) -> Option<PathfinderError> {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        ErrorKind::Io | ErrorKind::Format => Some(PathfinderError::Other(err.to_string())),
        _ => Some(PathfinderError::UsageError(err.to_string())),
    }
}

fn wants_json(args: impl IntoIterator<Item = String>) -> bool {
    let args: Vec<String> = args.into_iter().collect();
    args.iter().enumerate().any(|(i, arg)| {
        arg == "--format=json"
            || (arg == "--format" && args.get(i + 1).is_some_and(|v| v == "json"))
    })
}
