//! Read-only queries against the working graph

use munigraph_core::error::{GraphError, Result};
use munigraph_core::format::format_distance;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the info command
pub fn info(ctx: &CommandContext) -> Result<()> {
    let model = ctx.open_model()?;
    let summary = model.summary();

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = json!({
                "file": ctx.data_file().display().to_string(),
                "nodes": summary.nodes,
                "edges": summary.edges,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("Municipalities: {}", summary.nodes);
            println!("Roads: {}", summary.edges);
        }
    }
    Ok(())
}

/// Execute the nodes command
pub fn nodes(ctx: &CommandContext) -> Result<()> {
    let model = ctx.open_model()?;
    let nodes = model.graph().nodes();

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&nodes)?);
        }
        OutputFormat::Human => {
            if nodes.is_empty() {
                if !ctx.cli.quiet {
                    println!("No municipalities");
                }
                return Ok(());
            }
            for node in nodes {
                println!("{}", node);
            }
        }
    }
    Ok(())
}

/// Execute the edges command
pub fn edges(ctx: &CommandContext) -> Result<()> {
    let model = ctx.open_model()?;
    let edges = model.graph().edges();

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&edges)?);
        }
        OutputFormat::Human => {
            if edges.is_empty() {
                if !ctx.cli.quiet {
                    println!("No roads");
                }
                return Ok(());
            }
            for edge in &edges {
                println!(
                    "{} -- {} ({} km)",
                    edge.from,
                    edge.to,
                    format_distance(edge.weight)
                );
            }
        }
    }
    Ok(())
}

/// Execute the neighbors command
pub fn neighbors(ctx: &CommandContext, node: &str) -> Result<()> {
    let model = ctx.open_model()?;
    let node = node.trim();
    if !model.graph().contains(node) {
        return Err(GraphError::node_not_found(node));
    }
    let neighbors = model.graph().neighbors_with_weights(node);

    match ctx.cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = neighbors
                .iter()
                .map(|(name, weight)| json!({ "node": name, "distance": weight }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for (name, weight) in neighbors {
                println!("{} ({} km)", name, format_distance(weight));
            }
        }
    }
    Ok(())
}
