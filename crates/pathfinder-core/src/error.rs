//! Error types and exit codes for pathfinder
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unsupported algorithm)
//! - 3: Data error (invalid graph, unknown node)

mod macros;

use thiserror::Error;

/// Exit codes for the pathfinder binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph or unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during pathfinder operations
#[derive(Error, Debug)]
pub enum PathfinderError {
    // Usage errors (exit code 2)
    #[error("unsupported algorithm: {0} (supported: dijkstra, bfs, astar)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("{role} node '{id}' not found in graph")]
    UnknownNode { role: String, id: String },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl PathfinderError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathfinderError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a node that is not part of the graph
    pub fn unknown_node(role: &str, id: impl std::fmt::Display) -> Self {
        PathfinderError::UnknownNode {
            role: role.to_string(),
            id: id.to_string(),
        }
    }

    /// Create an error for a graph that violates the input contract
    pub fn invalid_graph(reason: impl Into<String>) -> Self {
        PathfinderError::InvalidGraph {
            reason: reason.into(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        PathfinderError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        PathfinderError::FailedOperation {
            operation: format!("{} {}", operation, path),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathfinderError::UnknownAlgorithm(_)
            | PathfinderError::UsageError(_)
            | PathfinderError::InvalidValue { .. } => ExitCode::Usage,

            PathfinderError::UnknownNode { .. }
            | PathfinderError::InvalidGraph { .. }
            | PathfinderError::NotFound { .. } => ExitCode::Data,

            PathfinderError::Io(_)
            | PathfinderError::Json(_)
            | PathfinderError::Toml(_)
            | PathfinderError::FailedOperation { .. }
            | PathfinderError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PathfinderError::UnknownAlgorithm(_) => "unknown_algorithm",
            PathfinderError::UsageError(_) => "usage_error",
            PathfinderError::InvalidValue { .. } => "invalid_value",
            PathfinderError::UnknownNode { .. } => "unknown_node",
            PathfinderError::InvalidGraph { .. } => "invalid_graph",
            PathfinderError::NotFound { .. } => "not_found",
            PathfinderError::Io(_) => "io_error",
            PathfinderError::Json(_) => "json_error",
            PathfinderError::Toml(_) => "toml_error",
            PathfinderError::FailedOperation { .. } => "failed_operation",
            PathfinderError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pathfinder operations
pub type Result<T> = std::result::Result<T, PathfinderError>;
