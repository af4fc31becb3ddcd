//! Capital selection from the world cities table.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use covstat_model::{CapitalCoords, RawTable};

use crate::error::{IngestError, Result};

/// The capital-flag value that marks a row as the primary capital.
pub const PRIMARY_FLAG: &str = "primary";

/// How to pick one capital when a country has several primary rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapitalPolicy {
    /// Keep the first primary row in input order. The default; matches the
    /// outputs the pipeline has historically produced.
    #[default]
    First,
    /// Pick uniformly among a country's primary rows, seeded so a run is
    /// reproducible.
    Random { seed: u64 },
}

/// Reduces the city table to one coordinate pair per country.
///
/// Only rows whose `capital` column equals [`PRIMARY_FLAG`] are candidates.
/// Coordinates stay uncoerced strings; the join parses them on consumption.
pub fn select_capitals(
    cities: &RawTable,
    policy: CapitalPolicy,
) -> Result<BTreeMap<String, CapitalCoords>> {
    let country_idx = require_column(cities, "country")?;
    let capital_idx = require_column(cities, "capital")?;
    let lat_idx = require_column(cities, "lat")?;
    let lng_idx = require_column(cities, "lng")?;

    // Candidate lists keep input order so First is well-defined.
    let mut candidates: BTreeMap<String, Vec<CapitalCoords>> = BTreeMap::new();
    for row in &cities.rows {
        let flag = row.get(capital_idx).map(String::as_str).unwrap_or("");
        if flag != PRIMARY_FLAG {
            continue;
        }
        let country = row.get(country_idx).map(String::as_str).unwrap_or("");
        if country.is_empty() {
            continue;
        }
        let coords = CapitalCoords {
            latitude: row.get(lat_idx).cloned().unwrap_or_default(),
            longitude: row.get(lng_idx).cloned().unwrap_or_default(),
        };
        candidates.entry(country.to_string()).or_default().push(coords);
    }

    let mut selected = BTreeMap::new();
    match policy {
        CapitalPolicy::First => {
            for (country, list) in candidates {
                if list.len() > 1 {
                    debug!(
                        country = %country,
                        candidates = list.len(),
                        "multiple primary capital rows, keeping first"
                    );
                }
                if let Some(first) = list.into_iter().next() {
                    selected.insert(country, first);
                }
            }
        }
        CapitalPolicy::Random { seed } => {
            let mut rng = StdRng::seed_from_u64(seed);
            for (country, list) in candidates {
                if let Some(choice) = list.choose(&mut rng) {
                    selected.insert(country, choice.clone());
                }
            }
        }
    }
    Ok(selected)
}

fn require_column(cities: &RawTable, name: &str) -> Result<usize> {
    cities
        .column_index(name)
        .ok_or_else(|| IngestError::MissingColumn {
            table: "cities".to_string(),
            column: name.to_string(),
        })
}
