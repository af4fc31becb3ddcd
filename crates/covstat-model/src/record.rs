//! Record types produced and consumed by the pipeline stages.

/// One fully-joined country: present in the counts, population, and capital
/// coordinate sources. Created once per pipeline run and immutable thereafter.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CountryRecord {
    /// Country name, the unique join key.
    pub country: String,
    pub cases: u64,
    /// Expected to be <= cases, but not enforced.
    pub deaths: u64,
    /// Normalized region label (see [`crate::region::normalize_region_label`]).
    pub region: String,
    pub population: u64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Per-region sums over the canonical dataset.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegionSummary {
    pub region: String,
    pub total_cases: u64,
    pub total_deaths: u64,
    pub total_population: u64,
}

/// Per-capita metrics for one country. Only constructible for a positive
/// population; callers must reject a zero population before dividing.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NormalizedCountry {
    pub country: String,
    pub cases_per_capita: f64,
    pub deaths_per_capita: f64,
    pub population: u64,
}

/// One entry of a ranked selection, annotated with its capital coordinates
/// for the presentation layer.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RankedCountry {
    pub country: String,
    pub deaths_per_capita: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// A capital's coordinate pair as selected from the city table.
///
/// Held as uncoerced strings: type coercion happens lazily where the fields
/// are consumed, at the join.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CapitalCoords {
    pub latitude: String,
    pub longitude: String,
}
