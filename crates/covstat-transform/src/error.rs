//! Error types for the derivation stages.

use thiserror::Error;

/// Errors that can occur while joining and deriving country data.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A field that must be numeric could not be parsed.
    #[error("non-numeric {field} for country '{country}': '{value}'")]
    NumericField {
        country: String,
        field: &'static str,
        value: String,
    },

    /// A per-capita ratio was requested for a zero population.
    #[error("population is zero for country '{country}'")]
    ZeroPopulation { country: String },

    /// Top-k selection needs a positive k.
    #[error("top-k selection requires a positive k")]
    InvalidTopK,

    /// Required column not found in a source table.
    #[error("required column '{column}' not found in {table} table")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
}

/// Result type for derivation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
