//! Commands that modify the working graph and save it back

use munigraph_core::error::{GraphError, Result};
use munigraph_core::format::format_distance;
use munigraph_core::graph::validate_distance;
use munigraph_core::sample::sample_edges;
use munigraph_core::{bail_usage, GraphModel};
use serde_json::json;
use tracing::{info, warn};

use crate::cli::{AddEdgeArgs, AddNodeArgs, EdgeArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;

/// Execute the add-node command
pub fn add_node(ctx: &CommandContext, args: &AddNodeArgs) -> Result<()> {
    let mut model = ctx.open_model()?;
    let name = args.name.trim();
    let target = args.connect.trim();
    if name.is_empty() {
        bail_usage!("municipality name must not be empty");
    }
    if model.graph().contains(name) {
        return Err(GraphError::already_exists("municipality", name));
    }
    if !model.graph().contains(target) {
        return Err(GraphError::node_not_found(target));
    }
    let distance = validate_distance(args.distance)?;

    model.graph_mut().add_edge(name, target, distance);
    ctx.save_model(&model)?;
    info!(node = name, connect = target, distance, "added municipality");

    let message = format!(
        "Added {} (connected to {}, {} km)",
        name,
        target,
        format_distance(distance)
    );
    report(ctx, "add_node", &message, &model)
}

/// Execute the remove-node command
pub fn remove_node(ctx: &CommandContext, node: &str) -> Result<()> {
    let mut model = ctx.open_model()?;
    let node = node.trim();
    if !model.graph().contains(node) {
        return Err(GraphError::node_not_found(node));
    }

    let neighbors: Vec<String> = model
        .graph()
        .neighbors(node)
        .into_iter()
        .map(String::from)
        .collect();
    model.graph_mut().remove_node(node);
    let dropped = drop_isolated(&mut model, &neighbors);
    ctx.save_model(&model)?;
    info!(node, severed = neighbors.len(), "removed municipality");

    let mut message = format!("Removed {} and {} road(s)", node, neighbors.len());
    append_dropped(&mut message, &dropped);
    report(ctx, "remove_node", &message, &model)
}

/// Execute the add-edge command
///
/// Endpoints that do not exist yet are created along with the road, so an
/// empty graph can be rebuilt one road at a time.
pub fn add_edge(ctx: &CommandContext, args: &AddEdgeArgs) -> Result<()> {
    let mut model = ctx.open_model()?;
    let (source, destination) = endpoints(&args.edge)?;
    if model.graph().has_edge(source, destination) {
        return Err(GraphError::already_exists(
            "road",
            format!("{} -- {}", source, destination),
        ));
    }
    let distance = validate_distance(args.distance)?;

    let created: Vec<&str> = [source, destination]
        .into_iter()
        .filter(|node| !model.graph().contains(node))
        .collect();
    model.graph_mut().add_edge(source, destination, distance);
    ctx.save_model(&model)?;
    info!(source, destination, distance, created = created.len(), "added road");

    let mut message = format!(
        "Added road {} -- {} ({} km)",
        source,
        destination,
        format_distance(distance)
    );
    if !created.is_empty() {
        message.push_str(&format!("; new municipality {}", created.join(", ")));
    }
    report(ctx, "add_edge", &message, &model)
}

/// Execute the remove-edge command
pub fn remove_edge(ctx: &CommandContext, args: &EdgeArgs) -> Result<()> {
    let mut model = ctx.open_model()?;
    let (source, destination) = endpoints(args)?;
    for node in [source, destination] {
        if !model.graph().contains(node) {
            return Err(GraphError::node_not_found(node));
        }
    }
    if !model.graph().has_edge(source, destination) {
        return Err(GraphError::edge_not_found(source, destination));
    }

    model.graph_mut().remove_edge(source, destination);
    let dropped = drop_isolated(&mut model, &[source, destination]);
    ctx.save_model(&model)?;
    info!(source, destination, "removed road");

    let mut message = format!("Removed road {} -- {}", source, destination);
    append_dropped(&mut message, &dropped);
    report(ctx, "remove_edge", &message, &model)
}

/// Execute the clear command
pub fn clear(ctx: &CommandContext) -> Result<()> {
    let mut model = ctx.new_model()?;
    model.graph_mut().clear();
    ctx.save_model(&model)?;
    info!("cleared graph");

    report(ctx, "clear", "Cleared all municipalities and roads", &model)
}

/// Execute the reset command
pub fn reset(ctx: &CommandContext) -> Result<()> {
    let mut model = ctx.new_model()?;
    model.load_from_edges(&sample_edges());
    ctx.save_model(&model)?;
    info!("restored sample dataset");

    report(ctx, "reset", "Restored the sample dataset", &model)
}

/// Trimmed, non-empty, distinct endpoints of a road
fn endpoints(args: &EdgeArgs) -> Result<(&str, &str)> {
    let source = args.source.trim();
    let destination = args.destination.trim();
    if source.is_empty() || destination.is_empty() {
        bail_usage!("municipality name must not be empty");
    }
    if source == destination {
        bail_usage!("a road needs two different municipalities");
    }
    Ok((source, destination))
}

/// Remove the given municipalities that no longer have any road. The edge
/// list cannot store them, so they would vanish on the next load anyway.
fn drop_isolated<S: AsRef<str>>(model: &mut GraphModel, candidates: &[S]) -> Vec<String> {
    let mut dropped = Vec::new();
    for node in candidates.iter().map(AsRef::as_ref) {
        if model.graph().contains(node) && model.graph().degree(node) == 0 {
            warn!(node, "dropping municipality left without roads");
            model.graph_mut().remove_node(node);
            dropped.push(node.to_string());
        }
    }
    dropped
}

fn append_dropped(message: &mut String, dropped: &[String]) {
    if !dropped.is_empty() {
        message.push_str(&format!("; dropped {} (no roads left)", dropped.join(", ")));
    }
}

fn report(ctx: &CommandContext, action: &str, message: &str, model: &GraphModel) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => {
            let summary = model.summary();
            let output = json!({
                "action": action,
                "message": message,
                "nodes": summary.nodes,
                "edges": summary.edges,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => ctx.confirm(message),
    }
    Ok(())
}
