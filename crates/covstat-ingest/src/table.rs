//! Delimited text parsing into raw string tables.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;

use covstat_model::RawTable;

use crate::error::{IngestError, Result};

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Parses raw delimited text with a header row into a [`RawTable`].
///
/// Fields are whitespace-trimmed strings; no type coercion happens here.
/// Rows whose field count differs from the header's fail with
/// [`IngestError::RowShape`]; all-empty rows are skipped.
pub fn parse_table(text: &str) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_cell).collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, csv::Position::line);
        if record.len() != headers.len() {
            return Err(IngestError::RowShape {
                line,
                expected: headers.len(),
                found: record.len(),
            });
        }
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        rows.push(row);
    }
    Ok(RawTable::new(headers, rows))
}

/// Reads a delimited file fully into memory and parses it.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let text = fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&text)
}

#[cfg(test)]
mod tests {
    use super::parse_table;
    use crate::error::IngestError;

    #[test]
    fn parses_and_trims() {
        let table = parse_table("country, cases ,deaths\nNorway , 100, 10\n").expect("parse");
        assert_eq!(table.headers, vec!["country", "cases", "deaths"]);
        assert_eq!(table.rows, vec![vec!["Norway", "100", "10"]]);
    }

    #[test]
    fn rejects_short_row() {
        let err = parse_table("a,b,c\n1,2\n").expect_err("short row");
        match err {
            IngestError::RowShape {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn skips_blank_rows() {
        let table = parse_table("a,b\n1,2\n,\n3,4\n").expect("parse");
        assert_eq!(table.rows.len(), 2);
    }
}
