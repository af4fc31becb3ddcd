//! Top-k selection by deaths per capita.

use std::cmp::Ordering;

use covstat_model::{CountryRecord, RankedCountry};

use crate::error::{Result, TransformError};
use crate::normalize::per_capita;

/// Selects the up-to-k countries with the highest deaths per capita among
/// those with population >= `min_population`, in descending order.
///
/// The sort is stable and ascending with the tail reversed, so ties keep a
/// reproducible order and k larger than the eligible count returns the whole
/// eligible set. k = 0 is an error.
pub fn rank_top_k(
    records: &[CountryRecord],
    k: usize,
    min_population: u64,
) -> Result<Vec<RankedCountry>> {
    if k == 0 {
        return Err(TransformError::InvalidTopK);
    }

    let mut eligible = Vec::new();
    for record in records {
        if record.population < min_population {
            continue;
        }
        eligible.push(RankedCountry {
            country: record.country.clone(),
            deaths_per_capita: per_capita(record.deaths, record.population, &record.country)?,
            latitude: record.latitude,
            longitude: record.longitude,
        });
    }

    // Values are finite (population > 0 guard above), so Equal is only the
    // genuine-tie case and stability keeps input order.
    eligible.sort_by(|a, b| {
        a.deaths_per_capita
            .partial_cmp(&b.deaths_per_capita)
            .unwrap_or(Ordering::Equal)
    });

    let take = k.min(eligible.len());
    let mut top = eligible.split_off(eligible.len() - take);
    top.reverse();
    Ok(top)
}
