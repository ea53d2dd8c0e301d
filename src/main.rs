//! Munigraph - municipalities and roads as an undirected weighted graph
//!
//! A command-line editor for the road network of a metropolitan area,
//! with breadth-first and depth-first traversal replays.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use munigraph_core::config::AppConfig;
use munigraph_core::error::{ExitCode as GraphExitCode, GraphError, Result};
use munigraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();
    let args: Vec<String> = std::env::args().collect();

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) if wants_json(&args) && !is_informational(err.kind()) => {
            let err = GraphError::UsageError(err.to_string());
            eprintln!("{}", err.to_json());
            return exit_code(err.exit_code());
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match run(&cli, start) {
        Ok(()) => exit_code(GraphExitCode::Success),
        Err(err) => {
            report_error(&cli, &err);
            exit_code(err.exit_code())
        }
    }
}

fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = AppConfig::resolve(cli.config.as_deref())?;
    tracing::debug!(
        elapsed = ?start.elapsed(),
        data_file = %cli.file.as_deref().unwrap_or(config.data_file.as_path()).display(),
        "resolve_config"
    );

    commands::dispatch::run(cli, &config, start)
}

fn report_error(cli: &Cli, err: &GraphError) {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", err.to_json());
        return;
    }
    if cli.quiet {
        return;
    }

    eprintln!("error: {}", err);
    if let Some(hint) = hint(err) {
        eprintln!("hint: {}", hint);
    }
}

/// Follow-up command for errors the user can act on
fn hint(err: &GraphError) -> Option<&'static str> {
    match err {
        GraphError::NodeNotFound { .. } => Some("`munigraph nodes` lists the municipalities"),
        GraphError::EdgeNotFound { .. } => {
            Some("`munigraph neighbors <name>` lists the roads of a municipality")
        }
        GraphError::MalformedRecord { .. } => {
            Some("fix the line, then check the file with `munigraph validate <path>`")
        }
        _ => None,
    }
}

/// Help and version output go through clap even with `--format json`
fn is_informational(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// `--format json` must be honored even when clap rejects the command line
/// before `Cli.format` exists
fn wants_json(args: &[String]) -> bool {
    let args = args.get(1..).unwrap_or_default();
    args.iter().any(|arg| arg == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}

fn exit_code(code: GraphExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}
