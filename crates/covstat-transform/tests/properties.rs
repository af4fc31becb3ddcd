use std::collections::BTreeSet;

use proptest::prelude::*;

use covstat_model::CountryRecord;
use covstat_transform::{aggregate_regions, rank_top_k};

const REGIONS: [&str; 4] = ["Africa", "Asia", "Europe", "South America"];

fn records_strategy() -> impl Strategy<Value = Vec<CountryRecord>> {
    prop::collection::vec(
        (
            0u64..1_000_000,
            0u64..100_000,
            0usize..REGIONS.len(),
            1u64..1_000_000_000,
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (cases, deaths, region_idx, population))| CountryRecord {
                country: format!("country-{i}"),
                cases,
                deaths,
                region: REGIONS[region_idx].to_string(),
                population,
                latitude: 0.0,
                longitude: 0.0,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn region_totals_cover_exactly_the_present_labels(records in records_strategy()) {
        let summaries = aggregate_regions(&records);

        let labels: BTreeSet<&str> = records.iter().map(|r| r.region.as_str()).collect();
        let keys: BTreeSet<&str> = summaries.iter().map(|s| s.region.as_str()).collect();
        prop_assert_eq!(keys, labels);

        for summary in &summaries {
            let members: Vec<&CountryRecord> = records
                .iter()
                .filter(|r| r.region == summary.region)
                .collect();
            prop_assert_eq!(summary.total_cases, members.iter().map(|r| r.cases).sum::<u64>());
            prop_assert_eq!(summary.total_deaths, members.iter().map(|r| r.deaths).sum::<u64>());
            prop_assert_eq!(
                summary.total_population,
                members.iter().map(|r| r.population).sum::<u64>()
            );
        }
    }

    #[test]
    fn top_k_is_bounded_and_dominates_the_excluded(
        records in records_strategy(),
        k in 1usize..50,
        floor in 0u64..1_000_000_000,
    ) {
        let ranked = rank_top_k(&records, k, floor).expect("positive k");
        let eligible: Vec<&CountryRecord> = records
            .iter()
            .filter(|r| r.population >= floor)
            .collect();

        prop_assert_eq!(ranked.len(), k.min(eligible.len()));

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].deaths_per_capita >= pair[1].deaths_per_capita);
        }

        if let Some(last) = ranked.last() {
            let returned: BTreeSet<&str> =
                ranked.iter().map(|r| r.country.as_str()).collect();
            for record in eligible {
                if !returned.contains(record.country.as_str()) {
                    let excluded = record.deaths as f64 / record.population as f64;
                    prop_assert!(last.deaths_per_capita >= excluded);
                }
            }
        }
    }
}
