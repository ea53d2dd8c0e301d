//! Road graph storage
//!
//! Provides the adjacency-list store for municipalities and roads:
//! - `RoadGraph`: undirected weighted graph with symmetric adjacency rows
//! - `GraphProvider`: read-only seam used by the traversal engine
//! - `Edge`: a single road, deduplicated in edge listings

pub mod provider;
pub mod store;
pub mod types;

pub use provider::GraphProvider;
pub use store::RoadGraph;
pub use types::{
    canonical_pair, validate_distance, Edge, GraphSummary, DEFAULT_WEIGHT, UNREACHABLE,
};
