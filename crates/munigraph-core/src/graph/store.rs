use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use super::provider::GraphProvider;
use super::types::{canonical_pair, Edge, GraphSummary, DEFAULT_WEIGHT, UNREACHABLE};

type Neighbors = BTreeMap<String, f64>;

/// Undirected weighted graph of municipalities and the roads between them.
///
/// Every road `u - v` is stored in both adjacency rows with the same weight.
/// All mutation goes through the methods below so the two rows never drift
/// apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadGraph {
    adjacency: BTreeMap<String, Neighbors>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no neighbors. Existing nodes are left alone.
    pub fn add_node(&mut self, id: &str) {
        if !self.adjacency.contains_key(id) {
            debug!(node = id, "add_node");
            self.adjacency.insert(id.to_string(), Neighbors::new());
        }
    }

    /// Add or overwrite the road between `u` and `v`, creating missing endpoints.
    ///
    /// A second call for the same pair replaces the weight.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: f64) {
        self.add_node(u);
        self.add_node(v);

        if let Some(row) = self.adjacency.get_mut(u) {
            row.insert(v.to_string(), weight);
        }
        if let Some(row) = self.adjacency.get_mut(v) {
            row.insert(u.to_string(), weight);
        }
        debug!(from = u, to = v, weight, "add_edge");
    }

    /// Add a road with the default weight of 1.0
    pub fn add_edge_default(&mut self, u: &str, v: &str) {
        self.add_edge(u, v, DEFAULT_WEIGHT);
    }

    /// Remove the road between `u` and `v`. Missing roads are ignored.
    pub fn remove_edge(&mut self, u: &str, v: &str) {
        let mut removed = false;
        if let Some(row) = self.adjacency.get_mut(u) {
            removed |= row.remove(v).is_some();
        }
        if let Some(row) = self.adjacency.get_mut(v) {
            removed |= row.remove(u).is_some();
        }
        if removed {
            debug!(from = u, to = v, "remove_edge");
        }
    }

    /// Remove a node together with every road touching it.
    pub fn remove_node(&mut self, id: &str) {
        let neighbors: Vec<String> = match self.adjacency.get(id) {
            Some(row) => row.keys().cloned().collect(),
            None => return,
        };

        for neighbor in &neighbors {
            self.remove_edge(id, neighbor);
        }
        self.adjacency.remove(id);
        debug!(node = id, severed = neighbors.len(), "remove_node");
    }

    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|row| row.contains_key(v))
    }

    /// Weight of the road between `u` and `v`, if there is one
    pub fn try_weight(&self, u: &str, v: &str) -> Option<f64> {
        self.adjacency.get(u).and_then(|row| row.get(v)).copied()
    }

    /// Weight of the road between `u` and `v`, or [`UNREACHABLE`]
    pub fn weight(&self, u: &str, v: &str) -> f64 {
        self.try_weight(u, v).unwrap_or(UNREACHABLE)
    }

    /// Neighbors of `id`; empty when the node does not exist.
    ///
    /// No ordering is promised. Sort the result when order matters.
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        self.adjacency
            .get(id)
            .map(|row| row.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Neighbors of `id` paired with the connecting road's weight
    pub fn neighbors_with_weights(&self, id: &str) -> Vec<(&str, f64)> {
        self.adjacency
            .get(id)
            .map(|row| row.iter().map(|(n, w)| (n.as_str(), *w)).collect())
            .unwrap_or_default()
    }

    pub fn degree(&self, id: &str) -> usize {
        self.adjacency.get(id).map_or(0, BTreeMap::len)
    }

    pub fn nodes(&self) -> Vec<&str> {
        self.adjacency.keys().map(String::as_str).collect()
    }

    /// Every road exactly once, regardless of the two adjacency entries.
    pub fn edges(&self) -> Vec<Edge> {
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut edges = Vec::new();

        for (u, row) in &self.adjacency {
            for (v, weight) in row {
                if seen.insert(canonical_pair(u, v)) {
                    edges.push(Edge::new(u.as_str(), v.as_str(), *weight));
                }
            }
        }

        edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            nodes: self.len(),
            edges: self.edge_count(),
        }
    }

    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl GraphProvider for RoadGraph {
    fn contains(&self, id: &str) -> bool {
        RoadGraph::contains(self, id)
    }

    fn neighbors(&self, id: &str) -> Vec<&str> {
        RoadGraph::neighbors(self, id)
    }
}
