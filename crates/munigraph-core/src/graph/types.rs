use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::Result;

/// Weight reported for a pair of nodes with no road between them
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Weight used when a caller does not supply one
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A single undirected, weighted road
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Endpoint pair ordered so both directions of a road compare equal
    pub fn canonical_key(&self) -> (&str, &str) {
        canonical_pair(&self.from, &self.to)
    }

    /// True when this edge touches `node`
    pub fn touches(&self, node: &str) -> bool {
        self.from == node || self.to == node
    }
}

impl From<(&str, &str, f64)> for Edge {
    fn from((from, to, weight): (&str, &str, f64)) -> Self {
        Edge::new(from, to, weight)
    }
}

/// Order two labels so `(u, v)` and `(v, u)` map to the same pair
pub fn canonical_pair<'a>(u: &'a str, v: &'a str) -> (&'a str, &'a str) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

/// Check a user-entered road distance.
///
/// The store accepts any weight; distances typed in by a user must be finite
/// and strictly positive.
pub fn validate_distance(distance: f64) -> Result<f64> {
    if !distance.is_finite() || distance <= 0.0 {
        bail_invalid!("distance (must be greater than 0)", distance);
    }
    Ok(distance)
}

/// Node and edge counts, as shown in an info panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
}
