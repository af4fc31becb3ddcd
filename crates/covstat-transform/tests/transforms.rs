use std::collections::{BTreeMap, BTreeSet};

use covstat_model::{CapitalCoords, CountryRecord, RawTable};
use covstat_transform::{
    TransformError, aggregate_regions, join_sources, normalize_countries, rank_top_k,
};

fn record(
    country: &str,
    cases: u64,
    deaths: u64,
    region: &str,
    population: u64,
    latitude: f64,
    longitude: f64,
) -> CountryRecord {
    CountryRecord {
        country: country.to_string(),
        cases,
        deaths,
        region: region.to_string(),
        population,
        latitude,
        longitude,
    }
}

/// Three countries across two regions, with numbers small enough to check
/// the ratios by hand.
fn sample_records() -> Vec<CountryRecord> {
    vec![
        record("A", 100, 10, "X", 1000, 0.0, 0.0),
        record("B", 50, 25, "X", 500, 1.0, 1.0),
        record("C", 10, 1, "Y", 100, 2.0, 2.0),
    ]
}

fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable::new(
        headers.iter().map(|s| (*s).to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|s| (*s).to_string()).collect())
            .collect(),
    )
}

fn capitals(entries: &[(&str, &str, &str)]) -> BTreeMap<String, CapitalCoords> {
    entries
        .iter()
        .map(|(country, lat, lng)| {
            (
                (*country).to_string(),
                CapitalCoords {
                    latitude: (*lat).to_string(),
                    longitude: (*lng).to_string(),
                },
            )
        })
        .collect()
}

#[test]
fn region_aggregation_sums_per_region() {
    let summaries = aggregate_regions(&sample_records());
    assert_eq!(summaries.len(), 2);
    let x = &summaries[0];
    assert_eq!(x.region, "X");
    assert_eq!(x.total_cases, 150);
    assert_eq!(x.total_deaths, 35);
    assert_eq!(x.total_population, 1500);
    let y = &summaries[1];
    assert_eq!(y.region, "Y");
    assert_eq!(y.total_cases, 10);
}

#[test]
fn top_one_picks_highest_deaths_per_capita() {
    let ranked = rank_top_k(&sample_records(), 1, 0).expect("rank");
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].country, "B");
    assert!((ranked[0].deaths_per_capita - 0.05).abs() < 1e-12);
    assert_eq!(ranked[0].latitude, 1.0);
    assert_eq!(ranked[0].longitude, 1.0);
}

#[test]
fn population_floor_shrinks_the_eligible_set() {
    // n = 600 excludes B and C; k = 2 degrades to the single eligible country.
    let ranked = rank_top_k(&sample_records(), 2, 600).expect("rank");
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].country, "A");
}

#[test]
fn k_beyond_eligible_returns_everything_descending() {
    let ranked = rank_top_k(&sample_records(), 10, 0).expect("rank");
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].country, "B");
    // A and C tie at 0.01; the reversed ascending tail puts the later input
    // row first.
    assert_eq!(ranked[1].country, "C");
    assert_eq!(ranked[2].country, "A");
}

#[test]
fn zero_k_is_rejected() {
    let err = rank_top_k(&sample_records(), 0, 0).expect_err("k = 0");
    assert!(matches!(err, TransformError::InvalidTopK));
}

#[test]
fn normalizer_divides_by_population() {
    let normalized = normalize_countries(&sample_records(), None).expect("normalize");
    assert_eq!(normalized.len(), 3);
    assert!((normalized[0].cases_per_capita - 0.1).abs() < 1e-12);
    assert!((normalized[1].deaths_per_capita - 0.05).abs() < 1e-12);
}

#[test]
fn normalizer_restriction_ignores_unknown_names() {
    let wanted: BTreeSet<String> = ["B".to_string(), "Atlantis".to_string()].into();
    let normalized = normalize_countries(&sample_records(), Some(&wanted)).expect("normalize");
    assert_eq!(normalized.len(), 1);
    assert_eq!(normalized[0].country, "B");
}

#[test]
fn normalizer_rejects_zero_population() {
    let records = vec![record("Ghost", 10, 1, "X", 0, 0.0, 0.0)];
    let err = normalize_countries(&records, None).expect_err("zero population");
    match err {
        TransformError::ZeroPopulation { country } => assert_eq!(country, "Ghost"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn join_keeps_only_countries_present_in_all_sources() {
    let counts = table(
        &["country", "cases", "deaths", "region"],
        &[
            &["A", "100", "10", "Europe"],
            &["B", "50", "25", "Asia"],
            &["C", "10", "1", "Africa"],
            &["D", "7", "0", "Europe"],
            &["E", "3", "0", "Asia"],
        ],
    );
    let population = table(
        &["country", "population"],
        &[
            &["A", "1000"],
            &["B", "500"],
            &["C", "100"],
            &["D", "40"],
        ],
    );
    let capitals = capitals(&[
        ("A", "1.0", "2.0"),
        ("B", "3.0", "4.0"),
        ("C", "5.0", "6.0"),
        ("E", "7.0", "8.0"),
    ]);

    let outcome = join_sources(&counts, &population, &capitals).expect("join");
    let joined: Vec<&str> = outcome
        .records
        .iter()
        .map(|r| r.country.as_str())
        .collect();
    // Counts-source order, restricted to the three-way intersection.
    assert_eq!(joined, vec!["A", "B", "C"]);
    assert_eq!(outcome.gaps.missing_capital, 1);
    assert_eq!(outcome.gaps.missing_population, 1);
    assert_eq!(outcome.gaps.duplicate_countries, 0);
}

#[test]
fn join_normalizes_region_and_group_separators() {
    let counts = table(
        &["country", "cases", "deaths", "region"],
        &[&["Fiji", "1,659", "17", "Australia/Oceania"]],
    );
    let population = table(&["country", "population"], &[&["Fiji", "896,444"]]);
    let capitals = capitals(&[("Fiji", "-18.1416", "178.4415")]);

    let outcome = join_sources(&counts, &population, &capitals).expect("join");
    let fiji = &outcome.records[0];
    assert_eq!(fiji.cases, 1659);
    assert_eq!(fiji.population, 896_444);
    assert_eq!(fiji.region, "Australia-Oceania");
    assert!((fiji.latitude - -18.1416).abs() < 1e-12);
}

#[test]
fn join_keeps_first_duplicate_counts_row() {
    let counts = table(
        &["country", "cases", "deaths", "region"],
        &[
            &["A", "100", "10", "Europe"],
            &["A", "999", "99", "Europe"],
        ],
    );
    let population = table(&["country", "population"], &[&["A", "1000"]]);
    let capitals = capitals(&[("A", "1.0", "2.0")]);

    let outcome = join_sources(&counts, &population, &capitals).expect("join");
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].cases, 100);
    assert_eq!(outcome.gaps.duplicate_countries, 1);
}

#[test]
fn join_reports_non_numeric_fields_with_country_and_field() {
    let counts = table(
        &["country", "cases", "deaths", "region"],
        &[&["A", "many", "10", "Europe"]],
    );
    let population = table(&["country", "population"], &[&["A", "1000"]]);
    let capitals = capitals(&[("A", "1.0", "2.0")]);

    let err = join_sources(&counts, &population, &capitals).expect_err("non-numeric");
    assert_eq!(
        err.to_string(),
        "non-numeric cases for country 'A': 'many'"
    );
}

#[test]
fn join_requires_source_columns() {
    let counts = table(&["country", "cases", "deaths"], &[]);
    let population = table(&["country", "population"], &[]);
    let err = join_sources(&counts, &population, &BTreeMap::new()).expect_err("no region");
    assert_eq!(
        err.to_string(),
        "required column 'region' not found in counts table"
    );
}
