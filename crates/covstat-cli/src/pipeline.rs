//! Pipeline stages behind the CLI subcommands.
//!
//! The pipeline is batch-oriented: each stage fully consumes its input
//! before the next starts.
//!
//! 1. **Ingest**: read and scrub the three source tables, select capitals
//! 2. **Join**: inner-join into the canonical dataset
//! 3. **Export**: persist the interchange file
//!
//! The derived views (`regions`, `countries`, `top`) recompute from the
//! stored interchange file without re-joining.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use covstat_ingest::{read_table, scrub_counts, select_capitals};
use covstat_model::{
    CapitalCoords, CountryRecord, NormalizedCountry, RankedCountry, RawTable, RegionSummary,
};
use covstat_report::{read_interchange, write_interchange};
use covstat_transform::{aggregate_regions, join_sources, normalize_countries, rank_top_k};

use crate::types::{BuildReport, BuildRequest};

/// Joins the three sources and writes the interchange file.
pub fn run_build(request: &BuildRequest) -> Result<BuildReport> {
    let build_span = info_span!("build", output = %request.output.display());
    let _build_guard = build_span.enter();

    let ingest_start = Instant::now();
    let (counts, population, capitals) =
        info_span!("ingest").in_scope(|| ingest_sources(request))?;
    info!(
        counts_rows = counts.rows.len(),
        population_rows = population.rows.len(),
        capital_count = capitals.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let join_start = Instant::now();
    let outcome = info_span!("join")
        .in_scope(|| join_sources(&counts, &population, &capitals))
        .context("join sources")?;
    info!(
        joined = outcome.records.len(),
        dropped = outcome.gaps.total(),
        duration_ms = join_start.elapsed().as_millis(),
        "join complete"
    );

    let export_start = Instant::now();
    info_span!("export")
        .in_scope(|| write_interchange(&request.output, &outcome.records))
        .with_context(|| format!("write {}", request.output.display()))?;
    info!(
        record_count = outcome.records.len(),
        duration_ms = export_start.elapsed().as_millis(),
        "export complete"
    );

    let regions = aggregate_regions(&outcome.records);
    Ok(BuildReport {
        output: request.output.clone(),
        counts_rows: counts.rows.len(),
        joined: outcome.records.len(),
        gaps: outcome.gaps,
        region_count: regions.len(),
    })
}

fn ingest_sources(
    request: &BuildRequest,
) -> Result<(RawTable, RawTable, BTreeMap<String, CapitalCoords>)> {
    let counts = read_table(&request.counts)
        .with_context(|| format!("read counts {}", request.counts.display()))?;
    let counts = scrub_counts(&counts).context("scrub counts")?;
    let population = read_table(&request.population)
        .with_context(|| format!("read population {}", request.population.display()))?;
    let cities = read_table(&request.cities)
        .with_context(|| format!("read cities {}", request.cities.display()))?;
    let capitals = select_capitals(&cities, request.capital_policy).context("select capitals")?;
    Ok((counts, population, capitals))
}

/// Loads the persisted canonical dataset.
pub fn load_dataset(data: &Path) -> Result<Vec<CountryRecord>> {
    read_interchange(data).with_context(|| format!("read interchange {}", data.display()))
}

/// Region summaries recomputed from the interchange file.
pub fn run_regions(data: &Path) -> Result<Vec<RegionSummary>> {
    let records = load_dataset(data)?;
    Ok(aggregate_regions(&records))
}

/// Per-capita metrics, optionally restricted to the given country names.
/// Unknown names are ignored.
pub fn run_countries(data: &Path, countries: &[String]) -> Result<Vec<NormalizedCountry>> {
    let records = load_dataset(data)?;
    let restriction: Option<BTreeSet<String>> = if countries.is_empty() {
        None
    } else {
        Some(countries.iter().cloned().collect())
    };
    normalize_countries(&records, restriction.as_ref()).context("normalize countries")
}

/// The k countries with the highest deaths per capita among those with
/// population at least `min_population`.
pub fn run_top(data: &Path, k: usize, min_population: u64) -> Result<Vec<RankedCountry>> {
    let records = load_dataset(data)?;
    rank_top_k(&records, k, min_population).context("rank countries")
}
