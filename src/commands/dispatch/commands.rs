//! Command implementations for all munigraph commands

use munigraph_core::error::Result;
use munigraph_core::TraversalKind;

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{edit, file, query, traverse};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Info => query::info(ctx),
            Commands::Nodes => query::nodes(ctx),
            Commands::Edges => query::edges(ctx),
            Commands::Neighbors { node } => query::neighbors(ctx, node),
            Commands::AddNode(args) => edit::add_node(ctx, args),
            Commands::RemoveNode { node } => edit::remove_node(ctx, node),
            Commands::AddEdge(args) => edit::add_edge(ctx, args),
            Commands::RemoveEdge(args) => edit::remove_edge(ctx, args),
            Commands::Clear => edit::clear(ctx),
            Commands::Reset => edit::reset(ctx),
            Commands::Bfs(args) => traverse::execute(ctx, TraversalKind::Bfs, args),
            Commands::Dfs(args) => traverse::execute(ctx, TraversalKind::Dfs, args),
            Commands::Validate { path } => file::validate(ctx, path),
            Commands::Import { path } => file::import(ctx, path),
            Commands::Export { path } => file::export(ctx, path),
        }
    }
}
