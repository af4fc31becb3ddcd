use std::path::PathBuf;

use covstat_ingest::CapitalPolicy;
use covstat_transform::JoinGaps;

/// Everything the build stage needs, decoupled from clap.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub counts: PathBuf,
    pub population: PathBuf,
    pub cities: PathBuf,
    pub output: PathBuf,
    pub capital_policy: CapitalPolicy,
}

/// What a build run produced.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output: PathBuf,
    /// Data rows in the scrubbed counts source.
    pub counts_rows: usize,
    /// Countries present in all three sources.
    pub joined: usize,
    pub gaps: JoinGaps,
    /// Distinct normalized region labels in the joined dataset.
    pub region_count: usize,
}
