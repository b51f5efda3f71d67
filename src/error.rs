//! Error types for lookups, searches and query files.

use core::fmt;

/// The error type for failed vertex resolution and path searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// No vertex is registered under `name`.
    VertexNotFound {
        /// The name that failed to resolve.
        name: String,
    },
    /// The search exhausted every branch without reaching `target`.
    Unreachable {
        /// The payload that was searched for, rendered with `Debug`.
        target: String,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexNotFound { name } => write!(f, "vertex `{name}` not found in graph"),
            Self::Unreachable { target } => write!(f, "no path to vertex {target}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// The error type for reading a query file.
#[derive(Debug)]
pub enum QueryError {
    /// The query source could not be read.
    Io(std::io::Error),
    /// The query has fewer than three lines; `line` is the first missing one (1-based).
    MissingLine {
        /// 1-based number of the missing line.
        line: usize,
    },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read query: {err}"),
            Self::MissingLine { line } => {
                write!(f, "query is missing line {line} (expected start, target and source)")
            }
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::MissingLine { .. } => None,
        }
    }
}

impl From<std::io::Error> for QueryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
