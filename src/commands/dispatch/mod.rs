//! Command dispatch logic for pathfinder

use std::time::Instant;

use crate::cli::Cli;
use pathfinder_core::error::Result;

mod command;
mod io;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
