//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use munigraph_core::config::AppConfig;
use munigraph_core::error::Result;
use munigraph_core::sample::sample_edges;
use munigraph_core::{GraphModel, LoadSource};
use tracing::debug;

use crate::cli::Cli;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a AppConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a AppConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Working edge-list file: `--file` wins over the configured one
    pub fn data_file(&self) -> PathBuf {
        self.cli
            .file
            .clone()
            .unwrap_or_else(|| self.config.data_file.clone())
    }

    /// Empty model using the configured file format
    pub fn new_model(&self) -> Result<GraphModel> {
        Ok(GraphModel::with_io(self.config.edge_list_io()?))
    }

    /// Load the working file, seeding the sample dataset when it is absent
    /// and fallback is enabled. With fallback disabled a missing file gives
    /// an empty graph.
    pub fn open_model(&self) -> Result<GraphModel> {
        let path = self.data_file();
        let mut model = self.new_model()?;
        let fallback = self.config.sample_fallback.then(sample_edges);

        match model.load_from_csv(&path, fallback.as_deref()) {
            Ok(LoadSource::File) => debug!(path = %path.display(), "loaded working file"),
            Ok(LoadSource::Fallback) => debug!(path = %path.display(), "seeded sample dataset"),
            Err(err) if err.is_file_not_found() => {
                debug!(path = %path.display(), "no working file, starting empty")
            }
            Err(err) => return Err(err),
        }
        debug!(elapsed = ?self.start.elapsed(), "open_model");

        Ok(model)
    }

    /// Write the model back to the working file
    pub fn save_model(&self, model: &GraphModel) -> Result<()> {
        let path = self.data_file();
        self.save_model_to(model, &path)
    }

    pub fn save_model_to(&self, model: &GraphModel, path: &Path) -> Result<()> {
        let written = model.save_to_csv(path)?;
        debug!(path = %path.display(), edges = written, elapsed = ?self.start.elapsed(), "save_model");
        Ok(())
    }

    /// Print a confirmation line unless --quiet
    pub fn confirm(&self, message: impl std::fmt::Display) {
        if !self.cli.quiet {
            println!("{}", message);
        }
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
        println!("munigraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Municipalities and roads as a graph, with BFS/DFS traversal.");
        println!();
        println!("Run `munigraph --help` for usage information.");
        Ok(())
    }
}
