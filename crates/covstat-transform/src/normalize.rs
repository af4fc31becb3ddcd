//! Per-capita derivation.

use std::collections::BTreeSet;

use covstat_model::{CountryRecord, NormalizedCountry};

use crate::error::{Result, TransformError};

/// A count divided by population, guarded against zero before the division.
pub fn per_capita(count: u64, population: u64, country: &str) -> Result<f64> {
    if population == 0 {
        return Err(TransformError::ZeroPopulation {
            country: country.to_string(),
        });
    }
    Ok(count as f64 / population as f64)
}

/// Derives one [`NormalizedCountry`] per record, optionally restricted to a
/// set of country names.
///
/// Names in the set that do not appear in the data are ignored — consistent
/// with inner-join semantics, an unknown name is not an error.
pub fn normalize_countries(
    records: &[CountryRecord],
    countries: Option<&BTreeSet<String>>,
) -> Result<Vec<NormalizedCountry>> {
    let mut normalized = Vec::new();
    for record in records {
        if let Some(wanted) = countries {
            if !wanted.contains(&record.country) {
                continue;
            }
        }
        normalized.push(NormalizedCountry {
            country: record.country.clone(),
            cases_per_capita: per_capita(record.cases, record.population, &record.country)?,
            deaths_per_capita: per_capita(record.deaths, record.population, &record.country)?,
            population: record.population,
        });
    }
    Ok(normalized)
}
