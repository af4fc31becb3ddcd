//! Error types for interchange file I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing or re-reading the interchange file.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to flush or create the file.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV layer failed.
    #[error("csv error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file does not start with the interchange header.
    #[error("unexpected interchange header in {}: '{found}'", path.display())]
    Header { path: PathBuf, found: String },

    /// A data row's field count does not match the interchange header's.
    #[error(
        "row shape mismatch in {} at line {line}: expected {expected} fields, found {found}",
        path.display()
    )]
    RowShape {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A field that must be numeric could not be parsed.
    #[error("non-numeric {field} for country '{country}': '{value}'")]
    NumericField {
        country: String,
        field: &'static str,
        value: String,
    },

    /// The format forbids quoting, so a field may not contain the delimiter.
    #[error("{field} for country '{country}' contains the interchange delimiter")]
    DelimiterInField {
        country: String,
        field: &'static str,
    },
}

/// Result type for interchange operations.
pub type Result<T> = std::result::Result<T, ReportError>;
