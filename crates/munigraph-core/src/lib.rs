//! Munigraph Core Library
//!
//! Road graph of municipalities: adjacency-list storage, deterministic
//! BFS/DFS traversal and edge-list persistence, composed behind a single
//! model facade for presentation code.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod model;
pub mod persistence;
pub mod sample;
pub mod traversal;

pub use error::{GraphError, Result};
pub use graph::{Edge, GraphProvider, RoadGraph};
pub use model::{GraphModel, LoadSource};
pub use traversal::{Traversal, TraversalKind};
