//! covstat interchange format and presentation row contract.
//!
//! - **export**: writes the canonical dataset as the delimited interchange file
//! - **load**: re-reads the interchange file into canonical records
//! - **rows**: fixed-shape string rows for the external rendering layer

pub mod error;
pub mod export;
pub mod load;
pub mod rows;

pub use error::{ReportError, Result};
pub use export::{DEFAULT_INTERCHANGE_FILE, INTERCHANGE_HEADER, write_interchange};
pub use load::read_interchange;
pub use rows::{per_capita_rows, ranked_rows, region_rows};
