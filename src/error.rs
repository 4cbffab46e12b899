// ============================================================
// Conversion Errors
// ============================================================
// Typed failures raised while turning a delimited text file into
// a feature matrix and a label vector. Every variant is fatal for
// the run: the application layer wraps them in anyhow context and
// the process exits without retrying.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used by the parsing and serialisation layers
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input missing/unreadable or output unwritable
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The delimited reader could not decode a record (bad UTF-8,
    /// unterminated quote)
    #[error("malformed CSV in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A feature count that cannot describe a record
    #[error("unsupported feature count {0}")]
    FeatureCount(usize),

    /// A feature field that is not a floating-point number
    #[error("line {line}: feature {column} is not a number: {text:?}")]
    Parse {
        line: usize,
        column: usize,
        text: String,
    },

    /// A non-blank line with the wrong number of fields
    #[error("line {line}: expected {expected} comma-separated fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// More records than the configured capacity
    #[error("line {line}: dataset exceeds capacity of {capacity} records")]
    Capacity { line: usize, capacity: usize },
}

impl ConvertError {
    /// Attach the offending path to a raw I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Map a reader error, keeping plain I/O failures as `Io`
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        let path = path.into();
        if source.is_io_error() {
            // csv hands the inner io::Error back through this conversion
            Self::Io { path, source: source.into() }
        } else {
            Self::Csv { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_line_and_text() {
        let e = ConvertError::Parse { line: 7, column: 3, text: "abc".into() };
        let msg = e.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("\"abc\""));
    }

    #[test]
    fn test_csv_io_failure_maps_to_io() {
        let raw = csv::Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let e = ConvertError::csv("iris.data", raw);
        assert!(matches!(e, ConvertError::Io { .. }));
    }

    #[test]
    fn test_capacity_error_names_capacity() {
        let e = ConvertError::Capacity { line: 151, capacity: 150 };
        assert!(e.to_string().contains("capacity of 150"));
    }
}
