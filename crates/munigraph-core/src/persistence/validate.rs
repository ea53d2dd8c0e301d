use csv::StringRecord;

use crate::error::{GraphError, RecordIssue, Result};
use crate::graph::Edge;

use super::parse_weight;

/// Fields in a well-formed record: source, destination, weight
pub const FIELDS_PER_RECORD: usize = 3;

pub(super) fn check_record(record: &StringRecord, line: u64) -> Result<Edge> {
    if record.len() != FIELDS_PER_RECORD {
        return Err(GraphError::malformed(
            line,
            RecordIssue::FieldCount {
                expected: FIELDS_PER_RECORD,
                found: record.len(),
            },
        ));
    }

    let from = record.get(0).unwrap_or_default().trim();
    let to = record.get(1).unwrap_or_default().trim();
    if from.is_empty() || to.is_empty() {
        return Err(GraphError::malformed(line, RecordIssue::EmptyLabel));
    }

    let raw = record.get(2).unwrap_or_default();
    let weight = parse_weight(raw).ok_or_else(|| {
        GraphError::malformed(
            line,
            RecordIssue::InvalidWeight {
                value: raw.to_string(),
            },
        )
    })?;

    Ok(Edge::new(from, to, weight))
}

/// 1-based number of the first empty line outside a quoted field.
///
/// The CSV reader skips empty lines silently, so strict validation looks
/// for them in the raw text. A final newline does not start a line.
pub(super) fn first_blank_line(content: &str) -> Option<u64> {
    let mut quoted = false;
    let mut lines = content.split('\n').peekable();
    let mut number = 0;

    while let Some(line) = lines.next() {
        number += 1;
        let last = lines.peek().is_none();
        if !quoted && !last && line.trim_end_matches('\r').is_empty() {
            return Some(number);
        }
        let quotes = line.bytes().filter(|&b| b == b'"').count();
        if quotes % 2 == 1 {
            quoted = !quoted;
        }
    }

    None
}

pub(super) fn blank_line_error(line: u64) -> GraphError {
    GraphError::malformed(
        line,
        RecordIssue::FieldCount {
            expected: FIELDS_PER_RECORD,
            found: 0,
        },
    )
}
