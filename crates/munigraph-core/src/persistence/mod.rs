//! Edge-list persistence
//!
//! Reads and writes a delimited file with one undirected road per record:
//! `source,destination,weight`, no header row. Labels are trimmed on read.
//!
//! Two read paths exist:
//! - [`EdgeListIo::load`]: lenient, skips short rows and ignores extra fields
//! - [`EdgeListIo::validate`]: strict, rejects the whole file on the first
//!   malformed row (blank lines included) with a line-numbered error
//!
//! Neither touches the graph until the whole file has been parsed.

mod validate;

use std::fs::{self, File};
use std::path::Path;
use std::time::Instant;

use csv::{Reader, ReaderBuilder, StringRecord, WriterBuilder};
use tracing::debug;

use crate::error::{GraphError, RecordIssue, Result};
use crate::format::format_distance;
use crate::graph::{Edge, RoadGraph};
use crate::trace_time;

pub use validate::FIELDS_PER_RECORD;

/// Reader/writer for edge-list files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeListIo {
    delimiter: u8,
}

impl Default for EdgeListIo {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl EdgeListIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Replace the contents of `graph` with the edges in `path`.
    ///
    /// Returns the number of records loaded. A missing file yields
    /// [`GraphError::FileNotFound`]; any read or parse failure leaves `graph`
    /// exactly as it was.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn load(&self, graph: &mut RoadGraph, path: &Path) -> Result<usize> {
        let start = Instant::now();
        let edges = self.read_lenient(path)?;
        let count = edges.len();

        Self::load_from_edges(graph, &edges);
        trace_time!(start, "load_edge_list", edges = count);
        Ok(count)
    }

    /// Write every road in `graph` once. Returns the number of records written.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn save(&self, graph: &RoadGraph, path: &Path) -> Result<usize> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .delimiter(self.delimiter)
            .from_path(path)
            .map_err(|e| GraphError::io_operation("create", path.display(), e))?;

        let edges = graph.edges();
        for edge in &edges {
            let weight = format_distance(edge.weight);
            writer.write_record([edge.from.as_str(), edge.to.as_str(), weight.as_str()])?;
        }
        writer
            .flush()
            .map_err(|e| GraphError::io_operation("write", path.display(), e))?;

        debug!(edges = edges.len(), "saved edge list");
        Ok(edges.len())
    }

    /// Clear `graph` and add each edge with trimmed endpoint labels.
    pub fn load_from_edges(graph: &mut RoadGraph, edges: &[Edge]) {
        graph.clear();
        for edge in edges {
            graph.add_edge(edge.from.trim(), edge.to.trim(), edge.weight);
        }
        debug!(edges = edges.len(), nodes = graph.len(), "loaded edges");
    }

    /// Strictly check `path` without touching any graph.
    ///
    /// Every record must have exactly three fields, non-empty labels and a
    /// numeric weight. A blank line counts as a record with no fields. The
    /// first offending record is reported with its 1-based line number.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn validate(&self, path: &Path) -> Result<Vec<Edge>> {
        let content = read_existing(path)?;
        let blank = validate::first_blank_line(&content);
        let mut reader = self.builder().from_reader(content.as_bytes());
        let mut edges = Vec::new();

        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let line = line_number(&record, index);
            if let Some(blank) = blank.filter(|&blank| blank < line) {
                return Err(validate::blank_line_error(blank));
            }
            edges.push(validate::check_record(&record, line)?);
        }
        if let Some(blank) = blank {
            return Err(validate::blank_line_error(blank));
        }

        debug!(edges = edges.len(), "edge list is valid");
        Ok(edges)
    }

    fn read_lenient(&self, path: &Path) -> Result<Vec<Edge>> {
        let mut reader = self.reader(path)?;
        let mut edges = Vec::new();

        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let (Some(from), Some(to), Some(raw)) = (record.get(0), record.get(1), record.get(2))
            else {
                continue;
            };

            let weight = parse_weight(raw).ok_or_else(|| {
                GraphError::malformed(
                    line_number(&record, index),
                    RecordIssue::InvalidWeight {
                        value: raw.to_string(),
                    },
                )
            })?;
            edges.push(Edge::new(from.trim(), to.trim(), weight));
        }

        Ok(edges)
    }

    fn reader(&self, path: &Path) -> Result<Reader<File>> {
        ensure_exists(path)?;
        self.builder()
            .from_path(path)
            .map_err(|e| GraphError::io_operation("open", path.display(), e))
    }

    fn builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter);
        builder
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(GraphError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

fn read_existing(path: &Path) -> Result<String> {
    ensure_exists(path)?;
    fs::read_to_string(path).map_err(|e| GraphError::io_operation("read", path.display(), e))
}

/// Parse a weight field, ignoring surrounding whitespace
pub(crate) fn parse_weight(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

fn line_number(record: &StringRecord, index: usize) -> u64 {
    record
        .position()
        .map_or(index as u64 + 1, |position| position.line())
}
