//! Error types for data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading and shaping source tables.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read a source file.
    #[error("failed to read file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The delimited input could not be tokenized.
    #[error("malformed delimited input: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// A data row's field count does not match the header's.
    #[error("row shape mismatch at line {line}: expected {expected} fields, found {found}")]
    RowShape {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Required column not found in a source table.
    #[error("required column '{column}' not found in {table} table")]
    MissingColumn { table: String, column: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
