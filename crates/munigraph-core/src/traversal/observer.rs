use tracing::trace;

use super::types::TraversalKind;

/// A single step reported while a traversal runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraversalEvent<'a> {
    /// `node` was appended to the visit order at position `order`
    Visited { node: &'a str, order: usize },
    /// `node` was first seen as a neighbor of `from` and put on the frontier
    Discovered { node: &'a str, from: &'a str },
    /// Traversal finished after visiting `visited` nodes
    Finished { visited: usize },
}

/// Receives traversal events. Purely observational: it cannot change the
/// visit order.
pub trait TraversalObserver {
    fn on_event(&mut self, event: &TraversalEvent<'_>);
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TraversalObserver for NoopObserver {
    fn on_event(&mut self, _event: &TraversalEvent<'_>) {}
}

/// Forwards every event to `tracing` at trace level
#[derive(Debug, Clone, Copy)]
pub struct TracingObserver {
    kind: TraversalKind,
}

impl TracingObserver {
    pub fn new(kind: TraversalKind) -> Self {
        Self { kind }
    }
}

impl TraversalObserver for TracingObserver {
    fn on_event(&mut self, event: &TraversalEvent<'_>) {
        match event {
            TraversalEvent::Visited { node, order } => {
                trace!(kind = %self.kind, node, order, "visit");
            }
            TraversalEvent::Discovered { node, from } => {
                trace!(kind = %self.kind, node, from, "discover");
            }
            TraversalEvent::Finished { visited } => {
                trace!(kind = %self.kind, visited, "finished");
            }
        }
    }
}
