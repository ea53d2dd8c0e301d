//! Validate, import and export edge-list files

use std::path::Path;

use munigraph_core::error::Result;
use serde_json::json;
use tracing::info;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the validate command
pub fn validate(ctx: &CommandContext, path: &Path) -> Result<()> {
    let io = ctx.config.edge_list_io()?;
    let edges = io.validate(path)?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = json!({
                "path": path.display().to_string(),
                "valid": true,
                "records": edges.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            ctx.confirm(format!("{}: {} valid record(s)", path.display(), edges.len()));
        }
    }
    Ok(())
}

/// Execute the import command
pub fn import(ctx: &CommandContext, path: &Path) -> Result<()> {
    let mut model = ctx.new_model()?;
    let records = model.import_csv(path)?;
    ctx.save_model(&model)?;
    info!(path = %path.display(), records, "imported edge list");

    let summary = model.summary();
    match ctx.cli.format {
        OutputFormat::Json => {
            let output = json!({
                "path": path.display().to_string(),
                "records": records,
                "nodes": summary.nodes,
                "edges": summary.edges,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => ctx.confirm(format!(
            "Imported {} ({} municipalities, {} roads)",
            path.display(),
            summary.nodes,
            summary.edges
        )),
    }
    Ok(())
}

/// Execute the export command
pub fn export(ctx: &CommandContext, path: &Path) -> Result<()> {
    let model = ctx.open_model()?;
    ctx.save_model_to(&model, path)?;
    let edges = model.summary().edges;
    info!(path = %path.display(), edges, "exported edge list");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = json!({
                "path": path.display().to_string(),
                "edges": edges,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            ctx.confirm(format!("Exported {} road(s) to {}", edges, path.display()))
        }
    }
    Ok(())
}
