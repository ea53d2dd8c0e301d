use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GraphError;

/// Which traversal algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalKind {
    Bfs,
    Dfs,
}

impl FromStr for TraversalKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(TraversalKind::Bfs),
            "dfs" => Ok(TraversalKind::Dfs),
            other => Err(GraphError::invalid_value(
                "traversal (expected: bfs, dfs)",
                other,
            )),
        }
    }
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalKind::Bfs => write!(f, "bfs"),
            TraversalKind::Dfs => write!(f, "dfs"),
        }
    }
}

/// A completed traversal: the start node and the full visit order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Traversal {
    pub kind: TraversalKind,
    pub start: String,
    pub order: Vec<String>,
}

impl Traversal {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn visits(&self, node: &str) -> bool {
        self.order.iter().any(|n| n == node)
    }

    /// Growing prefixes of the visit order, from nothing highlighted up to
    /// every node, one animation frame each.
    pub fn frames(&self) -> impl Iterator<Item = &[String]> + '_ {
        (0..=self.order.len()).filter_map(move |step| self.order.get(..step))
    }
}
