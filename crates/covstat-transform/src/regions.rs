//! Grouping of the canonical dataset by region.

use std::collections::BTreeMap;

use covstat_model::{CountryRecord, RegionSummary};

/// Groups records by region and sums cases, deaths, and population.
///
/// Every record contributes to exactly one summary. Output is sorted by
/// region label so repeated runs agree; consumers needing another order
/// sort for themselves.
pub fn aggregate_regions(records: &[CountryRecord]) -> Vec<RegionSummary> {
    let mut totals: BTreeMap<&str, (u64, u64, u64)> = BTreeMap::new();
    for record in records {
        let entry = totals.entry(record.region.as_str()).or_insert((0, 0, 0));
        entry.0 += record.cases;
        entry.1 += record.deaths;
        entry.2 += record.population;
    }
    totals
        .into_iter()
        .map(|(region, (cases, deaths, population))| RegionSummary {
            region: region.to_string(),
            total_cases: cases,
            total_deaths: deaths,
            total_population: population,
        })
        .collect()
}
