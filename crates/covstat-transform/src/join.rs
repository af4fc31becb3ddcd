//! Inner join of the three country-keyed sources.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use covstat_model::{CapitalCoords, CountryRecord, RawTable, normalize_region_label};

use crate::error::{Result, TransformError};
use crate::numeric::{parse_coordinate, parse_count};

/// Countries dropped because one source did not carry them. Never an error;
/// partial records are not usable downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinGaps {
    pub missing_population: usize,
    pub missing_capital: usize,
    /// Later counts rows repeating an already-joined country.
    pub duplicate_countries: usize,
}

impl JoinGaps {
    pub fn total(self) -> usize {
        self.missing_population + self.missing_capital + self.duplicate_countries
    }
}

/// The canonical dataset plus the gap counters observed while building it.
#[derive(Debug, Clone)]
pub struct JoinOutcome {
    pub records: Vec<CountryRecord>,
    pub gaps: JoinGaps,
}

/// Inner-joins the counts table, the population table, and the selected
/// capitals into one [`CountryRecord`] per country present in all three.
///
/// Output order is the counts table's input order; the first occurrence of a
/// country wins. Numeric fields are coerced here, and a non-numeric value
/// fails with the offending country and field named.
pub fn join_sources(
    counts: &RawTable,
    population: &RawTable,
    capitals: &BTreeMap<String, CapitalCoords>,
) -> Result<JoinOutcome> {
    let country_idx = require_column(counts, "counts", "country")?;
    let cases_idx = require_column(counts, "counts", "cases")?;
    let deaths_idx = require_column(counts, "counts", "deaths")?;
    let region_idx = require_column(counts, "counts", "region")?;
    let pop_country_idx = require_column(population, "population", "country")?;
    let pop_idx = require_column(population, "population", "population")?;

    let mut population_by_country: BTreeMap<&str, &str> = BTreeMap::new();
    for row in &population.rows {
        let country = field(row, pop_country_idx);
        population_by_country
            .entry(country)
            .or_insert_with(|| field(row, pop_idx));
    }

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut gaps = JoinGaps::default();
    let mut records = Vec::new();

    for row in &counts.rows {
        let country = field(row, country_idx);
        if !seen.insert(country) {
            gaps.duplicate_countries += 1;
            debug!(country = %country, "duplicate counts row, keeping first");
            continue;
        }

        let pop_value = population_by_country.get(country).copied();
        let coords = capitals.get(country);
        if pop_value.is_none() {
            gaps.missing_population += 1;
            debug!(country = %country, source = "population", "join gap");
        }
        if coords.is_none() {
            gaps.missing_capital += 1;
            debug!(country = %country, source = "capitals", "join gap");
        }
        let (Some(pop_value), Some(coords)) = (pop_value, coords) else {
            continue;
        };

        let cases = parse_count(field(row, cases_idx))
            .ok_or_else(|| numeric_error(country, "cases", field(row, cases_idx)))?;
        let deaths = parse_count(field(row, deaths_idx))
            .ok_or_else(|| numeric_error(country, "deaths", field(row, deaths_idx)))?;
        let pop_count = parse_count(pop_value)
            .ok_or_else(|| numeric_error(country, "population", pop_value))?;
        let latitude = parse_coordinate(&coords.latitude)
            .ok_or_else(|| numeric_error(country, "latitude", &coords.latitude))?;
        let longitude = parse_coordinate(&coords.longitude)
            .ok_or_else(|| numeric_error(country, "longitude", &coords.longitude))?;

        records.push(CountryRecord {
            country: country.to_string(),
            cases,
            deaths,
            region: normalize_region_label(field(row, region_idx)),
            population: pop_count,
            latitude,
            longitude,
        });
    }

    Ok(JoinOutcome { records, gaps })
}

fn field(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

fn numeric_error(country: &str, name: &'static str, value: &str) -> TransformError {
    TransformError::NumericField {
        country: country.to_string(),
        field: name,
        value: value.to_string(),
    }
}

fn require_column(table: &RawTable, label: &'static str, column: &'static str) -> Result<usize> {
    table
        .column_index(column)
        .ok_or(TransformError::MissingColumn {
            table: label,
            column,
        })
}
