//! Breadth-first and depth-first traversal over a road graph
//!
//! Both algorithms only read the graph through [`GraphProvider`] and return
//! the complete visit order in one call. Ties between neighbors are broken by
//! ascending label so the order is reproducible. Callers that animate the
//! result replay [`Traversal::frames`].

pub mod bfs;
pub mod dfs;
pub mod observer;
pub mod types;

pub use bfs::{bfs, bfs_observed};
pub use dfs::{dfs, dfs_observed};
pub use observer::{NoopObserver, TracingObserver, TraversalEvent, TraversalObserver};
pub use types::{Traversal, TraversalKind};

use crate::error::Result;
use crate::graph::GraphProvider;

/// Run the traversal named by `kind` and package the result
pub fn traverse(
    provider: &dyn GraphProvider,
    kind: TraversalKind,
    start: &str,
    observer: &mut dyn TraversalObserver,
) -> Result<Traversal> {
    let order = match kind {
        TraversalKind::Bfs => bfs_observed(provider, start, observer)?,
        TraversalKind::Dfs => dfs_observed(provider, start, observer)?,
    };

    Ok(Traversal {
        kind,
        start: start.to_string(),
        order,
    })
}
