//! Interchange file writer.

use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};

use covstat_model::CountryRecord;
use covstat_transform::format_numeric;

use crate::error::{ReportError, Result};

/// Column order of the interchange format.
pub const INTERCHANGE_HEADER: [&str; 7] = [
    "country",
    "cases",
    "deaths",
    "region",
    "population",
    "latitude",
    "longitude",
];

/// Default interchange file name.
pub const DEFAULT_INTERCHANGE_FILE: &str = "coronavirus_data.csv";

/// Writes the canonical dataset as the delimited interchange file.
///
/// The format never quotes, so a string field containing the delimiter is
/// rejected rather than escaped. Region normalization upstream exists to keep
/// labels free of the delimiter.
pub fn write_interchange(path: &Path, records: &[CountryRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_path(path)
        .map_err(|source| csv_error(path, source))?;

    writer
        .write_record(INTERCHANGE_HEADER)
        .map_err(|source| csv_error(path, source))?;

    for record in records {
        reject_delimiter(&record.country, "country", &record.country)?;
        reject_delimiter(&record.country, "region", &record.region)?;
        let row = [
            record.country.clone(),
            record.cases.to_string(),
            record.deaths.to_string(),
            record.region.clone(),
            record.population.to_string(),
            format_numeric(record.latitude),
            format_numeric(record.longitude),
        ];
        writer
            .write_record(&row)
            .map_err(|source| csv_error(path, source))?;
    }

    writer.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn reject_delimiter(country: &str, field: &'static str, value: &str) -> Result<()> {
    if value.contains(',') {
        return Err(ReportError::DelimiterInField {
            country: country.to_string(),
            field,
        });
    }
    Ok(())
}

fn csv_error(path: &Path, source: csv::Error) -> ReportError {
    ReportError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
