//! covstat derivation stages.
//!
//! - **join**: inner join of counts, population, and capital sources
//! - **regions**: per-region aggregation of the canonical dataset
//! - **normalize**: guarded per-capita derivation
//! - **rank**: population-floored top-k selection by deaths per capita
//! - **numeric**: field coercion and float formatting helpers

pub mod error;
pub mod join;
pub mod normalize;
pub mod numeric;
pub mod rank;
pub mod regions;

pub use error::{Result, TransformError};
pub use join::{JoinGaps, JoinOutcome, join_sources};
pub use normalize::{normalize_countries, per_capita};
pub use numeric::{format_numeric, parse_coordinate, parse_count};
pub use rank::rank_top_k;
pub use regions::aggregate_regions;
