use std::collections::HashSet;

use crate::error::{GraphError, Result};
use crate::graph::GraphProvider;

use super::observer::{NoopObserver, TraversalEvent, TraversalObserver};

/// Depth-first visit order from `start`, using an explicit stack.
///
/// Neighbors are pushed in descending label order so they pop in ascending
/// order. A node is marked seen when it is pushed.
pub fn dfs(provider: &dyn GraphProvider, start: &str) -> Result<Vec<String>> {
    dfs_observed(provider, start, &mut NoopObserver)
}

#[tracing::instrument(skip_all, fields(start = %start))]
pub fn dfs_observed(
    provider: &dyn GraphProvider,
    start: &str,
    observer: &mut dyn TraversalObserver,
) -> Result<Vec<String>> {
    if !provider.contains(start) {
        return Err(GraphError::node_not_found(start));
    }

    let mut visited: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = vec![start];
    seen.insert(start);

    while let Some(current) = stack.pop() {
        observer.on_event(&TraversalEvent::Visited {
            node: current,
            order: visited.len(),
        });
        visited.push(current.to_string());

        let mut neighbors = provider.neighbors(current);
        neighbors.sort_unstable_by(|a, b| b.cmp(a));

        for neighbor in neighbors {
            if seen.insert(neighbor) {
                observer.on_event(&TraversalEvent::Discovered {
                    node: neighbor,
                    from: current,
                });
                stack.push(neighbor);
            }
        }
    }

    observer.on_event(&TraversalEvent::Finished {
        visited: visited.len(),
    });
    tracing::debug!(visited = visited.len(), "dfs complete");

    Ok(visited)
}
