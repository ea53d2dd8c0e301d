//! Command dispatch logic for munigraph

use std::time::Instant;

use munigraph_core::config::AppConfig;
use munigraph_core::error::Result;

use crate::cli::Cli;

mod command;
mod commands;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, config: &AppConfig, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
