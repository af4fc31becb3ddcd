//! Source-specific cleanup of raw scraped tables.
//!
//! The scraping collaborator hands over rows exactly as the site renders
//! them; a few labels need fixing before they can act as join keys.

use tracing::debug;

use covstat_model::RawTable;

use crate::error::{IngestError, Result};

/// Rows that are not countries (ships, aggregates) and must not enter the join.
const NON_COUNTRY_ROWS: &[&str] = &["MS Zaandam"];

/// Source labels rewritten to their canonical country name.
const COUNTRY_ALIASES: &[(&str, &str)] = &[("Japan (+Diamond Princess)", "Japan")];

/// Returns a cleaned copy of the counts table.
///
/// Pure transformation: the input table is never mutated.
pub fn scrub_counts(counts: &RawTable) -> Result<RawTable> {
    let country_idx = counts
        .column_index("country")
        .ok_or_else(|| IngestError::MissingColumn {
            table: "counts".to_string(),
            column: "country".to_string(),
        })?;

    let mut rows = Vec::with_capacity(counts.rows.len());
    for row in &counts.rows {
        let country = row.get(country_idx).map(String::as_str).unwrap_or("");
        if NON_COUNTRY_ROWS.contains(&country) {
            debug!(country = %country, "dropping non-country row");
            continue;
        }
        let mut row = row.clone();
        if let Some((_, canonical)) = COUNTRY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == country)
        {
            row[country_idx] = (*canonical).to_string();
        }
        rows.push(row);
    }
    Ok(RawTable::new(counts.headers.clone(), rows))
}
