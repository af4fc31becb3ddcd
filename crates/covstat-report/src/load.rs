//! Interchange file loader.
//!
//! Re-reads the persisted join so the derived views can be recomputed
//! without re-joining the raw sources.

use std::path::Path;

use csv::{ReaderBuilder, Trim};

use covstat_model::{CountryRecord, normalize_region_label};
use covstat_transform::{parse_coordinate, parse_count};

use crate::error::{ReportError, Result};
use crate::export::INTERCHANGE_HEADER;

/// Reads the interchange file fully into canonical records.
pub fn read_interchange(path: &Path) -> Result<Vec<CountryRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|source| csv_error(path, source))?;

    let headers = reader.headers().map_err(|source| csv_error(path, source))?;
    let matches = headers.len() == INTERCHANGE_HEADER.len()
        && headers
            .iter()
            .zip(INTERCHANGE_HEADER)
            .all(|(found, expected)| found.eq_ignore_ascii_case(expected));
    if !matches {
        return Err(ReportError::Header {
            path: path.to_path_buf(),
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|source| csv_error(path, source))?;
        let line = row.position().map_or(0, csv::Position::line);
        if row.len() != INTERCHANGE_HEADER.len() {
            return Err(ReportError::RowShape {
                path: path.to_path_buf(),
                line,
                expected: INTERCHANGE_HEADER.len(),
                found: row.len(),
            });
        }
        let country = field(&row, 0);
        records.push(CountryRecord {
            country: country.to_string(),
            cases: count_field(country, "cases", field(&row, 1))?,
            deaths: count_field(country, "deaths", field(&row, 2))?,
            region: normalize_region_label(field(&row, 3)),
            population: count_field(country, "population", field(&row, 4))?,
            latitude: coordinate_field(country, "latitude", field(&row, 5))?,
            longitude: coordinate_field(country, "longitude", field(&row, 6))?,
        });
    }
    Ok(records)
}

fn field<'a>(row: &'a csv::StringRecord, idx: usize) -> &'a str {
    row.get(idx).unwrap_or("")
}

fn count_field(country: &str, name: &'static str, value: &str) -> Result<u64> {
    parse_count(value).ok_or_else(|| numeric_error(country, name, value))
}

fn coordinate_field(country: &str, name: &'static str, value: &str) -> Result<f64> {
    parse_coordinate(value).ok_or_else(|| numeric_error(country, name, value))
}

fn numeric_error(country: &str, name: &'static str, value: &str) -> ReportError {
    ReportError::NumericField {
        country: country.to_string(),
        field: name,
        value: value.to_string(),
    }
}

fn csv_error(path: &Path, source: csv::Error) -> ReportError {
    ReportError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
