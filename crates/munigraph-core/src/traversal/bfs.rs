use std::collections::{HashSet, VecDeque};

use crate::error::{GraphError, Result};
use crate::graph::GraphProvider;

use super::observer::{NoopObserver, TraversalEvent, TraversalObserver};

/// Breadth-first visit order from `start`.
///
/// Neighbors are enqueued in ascending label order, and a node is marked
/// seen when it is enqueued so it enters the queue at most once.
pub fn bfs(provider: &dyn GraphProvider, start: &str) -> Result<Vec<String>> {
    bfs_observed(provider, start, &mut NoopObserver)
}

#[tracing::instrument(skip_all, fields(start = %start))]
pub fn bfs_observed(
    provider: &dyn GraphProvider,
    start: &str,
    observer: &mut dyn TraversalObserver,
) -> Result<Vec<String>> {
    if !provider.contains(start) {
        return Err(GraphError::node_not_found(start));
    }

    let mut visited: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    seen.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        observer.on_event(&TraversalEvent::Visited {
            node: current,
            order: visited.len(),
        });
        visited.push(current.to_string());

        let mut neighbors = provider.neighbors(current);
        neighbors.sort_unstable();

        for neighbor in neighbors {
            if seen.insert(neighbor) {
                observer.on_event(&TraversalEvent::Discovered {
                    node: neighbor,
                    from: current,
                });
                queue.push_back(neighbor);
            }
        }
    }

    observer.on_event(&TraversalEvent::Finished {
        visited: visited.len(),
    });
    tracing::debug!(visited = visited.len(), "bfs complete");

    Ok(visited)
}
