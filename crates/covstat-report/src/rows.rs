//! Fixed-shape string rows for the external presentation layer.
//!
//! These three shapes are the full contract toward rendering: it consumes
//! them as positional arrays and never sees the typed model.

use covstat_model::{NormalizedCountry, RankedCountry, RegionSummary};
use covstat_transform::format_numeric;

/// [region, cases, deaths, population]
pub fn region_rows(summaries: &[RegionSummary]) -> Vec<[String; 4]> {
    summaries
        .iter()
        .map(|summary| {
            [
                summary.region.clone(),
                summary.total_cases.to_string(),
                summary.total_deaths.to_string(),
                summary.total_population.to_string(),
            ]
        })
        .collect()
}

/// [country, casesPerCapita, deathsPerCapita, population]
pub fn per_capita_rows(countries: &[NormalizedCountry]) -> Vec<[String; 4]> {
    countries
        .iter()
        .map(|country| {
            [
                country.country.clone(),
                format_numeric(country.cases_per_capita),
                format_numeric(country.deaths_per_capita),
                country.population.to_string(),
            ]
        })
        .collect()
}

/// [country, deathsPerCapita, latitude, longitude]
pub fn ranked_rows(ranked: &[RankedCountry]) -> Vec<[String; 4]> {
    ranked
        .iter()
        .map(|entry| {
            [
                entry.country.clone(),
                format_numeric(entry.deaths_per_capita),
                format_numeric(entry.latitude),
                format_numeric(entry.longitude),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::ranked_rows;
    use covstat_model::RankedCountry;

    #[test]
    fn ranked_rows_format_without_trailing_zeros() {
        let ranked = vec![RankedCountry {
            country: "B".to_string(),
            deaths_per_capita: 0.05,
            latitude: 1.0,
            longitude: 1.0,
        }];
        let rows = ranked_rows(&ranked);
        assert_eq!(rows, vec![[
            "B".to_string(),
            "0.05".to_string(),
            "1".to_string(),
            "1".to_string(),
        ]]);
    }
}
