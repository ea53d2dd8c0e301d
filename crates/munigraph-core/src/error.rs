//! Error types and exit codes for munigraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, serialization)
//! - 2: Usage error (bad flags/args, invalid values)
//! - 3: Data error (unknown municipality, missing road, malformed file)

mod macros;

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, malformed edge list (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// What was wrong with a single edge-list record
#[derive(Debug, Clone, PartialEq)]
pub enum RecordIssue {
    /// Row did not have the expected number of fields
    FieldCount { expected: usize, found: usize },
    /// Source or destination label was blank after trimming
    EmptyLabel,
    /// Weight field is not a floating-point literal
    InvalidWeight { value: String },
}

impl fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordIssue::FieldCount { expected, found } => {
                write!(f, "expected {} fields, found {}", expected, found)
            }
            RecordIssue::EmptyLabel => write!(f, "node labels must not be empty"),
            RecordIssue::InvalidWeight { value } => {
                write!(f, "weight '{}' is not a valid number", value)
            }
        }
    }
}

/// Errors that can occur during munigraph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("node '{id}' does not exist in the graph")]
    NodeNotFound { id: String },

    #[error("no road between '{from}' and '{to}'")]
    EdgeNotFound { from: String, to: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("edge list not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("line {line}: {issue}")]
    MalformedRecord { line: u64, issue: RecordIssue },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl From<csv::Error> for GraphError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io) => GraphError::Io(io),
                other => GraphError::Csv(format!("{:?}", other)),
            }
        } else {
            GraphError::Csv(err.to_string())
        }
    }
}

impl GraphError {
    /// Create an error for a node that is not in the graph
    pub fn node_not_found(id: impl Into<String>) -> Self {
        GraphError::NodeNotFound { id: id.into() }
    }

    /// Create an error for a missing road between two nodes
    pub fn edge_not_found(from: impl Into<String>, to: impl Into<String>) -> Self {
        GraphError::EdgeNotFound {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl fmt::Display) -> Self {
        GraphError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(operation: &str, path: impl fmt::Display, error: impl fmt::Display) -> Self {
        GraphError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create a line-numbered validation error
    pub fn malformed(line: u64, issue: RecordIssue) -> Self {
        GraphError::MalformedRecord { line, issue }
    }

    /// True when a load failed only because the file is absent
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, GraphError::FileNotFound { .. })
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::NodeNotFound { .. }
            | GraphError::EdgeNotFound { .. }
            | GraphError::AlreadyExists { .. }
            | GraphError::FileNotFound { .. }
            | GraphError::MalformedRecord { .. } => ExitCode::Data,

            GraphError::Io(_)
            | GraphError::Csv(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::FailedOperationWithTarget { .. }
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::NodeNotFound { .. } => "node_not_found",
            GraphError::EdgeNotFound { .. } => "edge_not_found",
            GraphError::AlreadyExists { .. } => "already_exists",
            GraphError::FileNotFound { .. } => "file_not_found",
            GraphError::MalformedRecord { .. } => "malformed_record",
            GraphError::Io(_) => "io_error",
            GraphError::Csv(_) => "csv_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let GraphError::MalformedRecord { line, .. } = self {
            error_obj["line"] = serde_json::json!(line);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for munigraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
