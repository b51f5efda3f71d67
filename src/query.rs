//! The three-line query consumed by the `graphwalk` tool.
//!
//! ```text
//! A1      <- vertex the depth-first walk and the path search start from
//! F1      <- payload the path search looks for
//! B1      <- source vertex for shortest paths
//! ```
//!
//! Trailing whitespace (including `\r`) is trimmed; lines after the third are
//! ignored.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Vertex names supplied by a query file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Where the walk and the path search begin.
    pub start: String,
    /// The payload the path search looks for.
    pub target: String,
    /// The shortest-path source.
    pub source: String,
}

impl Query {
    /// Reads and parses the query file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, QueryError> {
        fs::read_to_string(path)?.parse()
    }
}

impl FromStr for Query {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(str::trim_end);
        let mut next = |line: usize| {
            lines
                .next()
                .map(str::to_owned)
                .ok_or(QueryError::MissingLine { line })
        };
        Ok(Self {
            start: next(1)?,
            target: next(2)?,
            source: next(3)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_lines() {
        let query: Query = "A1\nF1\nB1\n".parse().expect("valid query");
        assert_eq!(
            query,
            Query {
                start: "A1".into(),
                target: "F1".into(),
                source: "B1".into(),
            }
        );
    }

    #[test]
    fn trims_crlf_and_ignores_extra_lines() {
        let query: Query = "A1\r\nC1 \r\nE1\r\nextra\n".parse().expect("valid query");
        assert_eq!(query.start, "A1");
        assert_eq!(query.target, "C1");
        assert_eq!(query.source, "E1");
    }

    #[test]
    fn reports_first_missing_line() {
        let err = "A1\nF1".parse::<Query>().unwrap_err();
        assert!(matches!(err, QueryError::MissingLine { line: 3 }));

        let err = "".parse::<Query>().unwrap_err();
        assert!(matches!(err, QueryError::MissingLine { line: 1 }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Query::from_path("/definitely/not/here/query.txt").unwrap_err();
        assert!(matches!(err, QueryError::Io(_)));
    }

    #[test]
    fn serializes_as_named_fields() {
        let query: Query = "A1\nF1\nB1".parse().expect("valid query");
        let json = serde_json::to_string(&query).expect("serializable");
        assert_eq!(json, r#"{"start":"A1","target":"F1","source":"B1"}"#);
    }
}
