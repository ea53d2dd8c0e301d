//! BFS/DFS commands

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use munigraph_core::error::{GraphError, Result};
use munigraph_core::{Traversal, TraversalKind};
use tracing::{debug, warn};

use crate::cli::{OutputFormat, TraverseArgs};
use crate::commands::dispatch::CommandContext;

/// Execute the bfs or dfs command
pub fn execute(ctx: &CommandContext, kind: TraversalKind, args: &TraverseArgs) -> Result<()> {
    let model = ctx.open_model()?;
    let traversal = model.traverse(kind, args.start.trim())?;
    debug!(kind = %kind, visited = traversal.len(), elapsed = ?ctx.start.elapsed(), "traverse");

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&traversal)?);
        }
        OutputFormat::Human if args.animate => {
            let delay = args.delay_ms.unwrap_or(ctx.config.animation.delay_ms);
            animate(&traversal, Duration::from_millis(delay))?;
        }
        OutputFormat::Human => print_order(ctx, &traversal),
    }
    Ok(())
}

fn print_order(ctx: &CommandContext, traversal: &Traversal) {
    if !ctx.cli.quiet {
        println!(
            "{} from {}:",
            traversal.kind.to_string().to_uppercase(),
            traversal.start
        );
    }
    for (step, node) in traversal.order.iter().enumerate() {
        println!("{:>3}. {}", step + 1, node);
    }
}

/// Replay the visit order one frame at a time until done or interrupted
fn animate(traversal: &Traversal, delay: Duration) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = Arc::clone(&running);
    ctrlc::set_handler(move || handler_flag.store(false, Ordering::SeqCst))
        .map_err(|e| GraphError::Other(format!("failed to install Ctrl-C handler: {}", e)))?;

    let total = traversal.len();
    for (step, frame) in traversal.frames().enumerate().skip(1) {
        if !running.load(Ordering::SeqCst) {
            warn!(step, total, "animation interrupted");
            println!("Stopped after {} of {} steps", step - 1, total);
            return Ok(());
        }
        println!("[{}/{}] {}", step, total, frame.join(" -> "));
        if step < total {
            thread::sleep(delay);
        }
    }
    println!("Done: visited {} municipalities", total);
    Ok(())
}
