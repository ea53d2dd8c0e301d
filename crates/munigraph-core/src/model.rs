//! Model facade
//!
//! `GraphModel` is the single entry point for presentation code: it owns the
//! road graph and the edge-list reader/writer, and runs traversals against the
//! graph it owns.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::graph::{Edge, GraphSummary, RoadGraph};
use crate::persistence::EdgeListIo;
use crate::traversal::{self, TracingObserver, Traversal, TraversalKind, TraversalObserver};

/// Where the current graph contents came from after a load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadSource {
    /// Loaded from the requested edge-list file
    File,
    /// The file could not be loaded; fallback edges were used
    Fallback,
}

#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    graph: RoadGraph,
    io: EdgeListIo,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_io(io: EdgeListIo) -> Self {
        Self {
            graph: RoadGraph::new(),
            io,
        }
    }

    /// Replace the graph with `edges`
    pub fn load_from_edges(&mut self, edges: &[Edge]) {
        EdgeListIo::load_from_edges(&mut self.graph, edges);
    }

    /// Load `path`, seeding from `fallback` if the file cannot be loaded.
    ///
    /// Without a fallback the load error is returned and the graph is left
    /// unchanged.
    pub fn load_from_csv(&mut self, path: &Path, fallback: Option<&[Edge]>) -> Result<LoadSource> {
        match self.io.load(&mut self.graph, path) {
            Ok(_) => Ok(LoadSource::File),
            Err(err) => match fallback {
                Some(edges) => {
                    if err.is_file_not_found() {
                        debug!(path = %path.display(), "edge list missing, using fallback");
                    } else {
                        warn!(path = %path.display(), error = %err, "edge list unreadable, using fallback");
                    }
                    self.load_from_edges(edges);
                    Ok(LoadSource::Fallback)
                }
                None => Err(err),
            },
        }
    }

    /// Strictly validate `path`, then replace the graph with its contents.
    ///
    /// A file that fails validation leaves the current graph untouched.
    pub fn import_csv(&mut self, path: &Path) -> Result<usize> {
        let edges = self.io.validate(path)?;
        self.load_from_edges(&edges);
        Ok(edges.len())
    }

    pub fn save_to_csv(&self, path: &Path) -> Result<usize> {
        self.io.save(&self.graph, path)
    }

    pub fn bfs(&self, start: &str) -> Result<Vec<String>> {
        self.traverse(TraversalKind::Bfs, start).map(|t| t.order)
    }

    pub fn dfs(&self, start: &str) -> Result<Vec<String>> {
        self.traverse(TraversalKind::Dfs, start).map(|t| t.order)
    }

    /// Run a traversal, logging each step at trace level
    pub fn traverse(&self, kind: TraversalKind, start: &str) -> Result<Traversal> {
        self.traverse_observed(kind, start, &mut TracingObserver::new(kind))
    }

    pub fn traverse_observed(
        &self,
        kind: TraversalKind,
        start: &str,
        observer: &mut dyn TraversalObserver,
    ) -> Result<Traversal> {
        traversal::traverse(&self.graph, kind, start, observer)
    }

    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut RoadGraph {
        &mut self.graph
    }

    pub fn io(&self) -> &EdgeListIo {
        &self.io
    }

    pub fn summary(&self) -> GraphSummary {
        self.graph.summary()
    }
}
