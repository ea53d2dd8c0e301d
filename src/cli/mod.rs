//! CLI argument parsing for munigraph
//!
//! Supports global flags: --file, --config, --format, --quiet, --verbose

pub mod args;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{AddEdgeArgs, AddNodeArgs, EdgeArgs, TraverseArgs};
pub use munigraph_core::format::OutputFormat;

/// Munigraph - municipalities and roads as a graph, with animated BFS/DFS
#[derive(Parser, Debug)]
#[command(name = "munigraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Working edge-list file (overrides the configured data_file)
    #[arg(long, short, global = true, env = "MUNIGRAPH_FILE")]
    pub file: Option<PathBuf>,

    /// Explicit config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: human or json
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, munigraph_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show municipality and road counts
    Info,

    /// List municipalities
    Nodes,

    /// List roads with their distances
    Edges,

    /// List the municipalities directly connected to one municipality
    Neighbors {
        /// Municipality name
        node: String,
    },

    /// Add a municipality connected to an existing one
    AddNode(AddNodeArgs),

    /// Remove a municipality and every road touching it. Neighbors left
    /// without roads are dropped too.
    RemoveNode {
        /// Municipality name
        node: String,
    },

    /// Add a road between two existing municipalities
    AddEdge(AddEdgeArgs),

    /// Remove the road between two municipalities
    RemoveEdge(EdgeArgs),

    /// Remove every municipality and road
    Clear,

    /// Replace the working file with the built-in sample dataset
    Reset,

    /// Breadth-first traversal from a start municipality
    Bfs(TraverseArgs),

    /// Depth-first traversal from a start municipality
    Dfs(TraverseArgs),

    /// Check an edge-list file without loading it
    Validate {
        /// File to check
        path: PathBuf,
    },

    /// Validate an edge-list file and make it the working graph
    Import {
        /// File to import
        path: PathBuf,
    },

    /// Write the working graph to another file
    Export {
        /// Destination file
        path: PathBuf,
    },
}
