//! covstat data ingestion.
//!
//! - **table**: delimited text parsing into raw string tables
//! - **capitals**: reduction of the city table to one capital per country
//! - **scrub**: source-specific cleanup of scraped rows

pub mod capitals;
pub mod error;
pub mod scrub;
pub mod table;

pub use capitals::{CapitalPolicy, PRIMARY_FLAG, select_capitals};
pub use error::{IngestError, Result};
pub use scrub::scrub_counts;
pub use table::{parse_table, read_table};
