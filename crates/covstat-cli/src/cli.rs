//! CLI argument definitions for covstat.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use covstat_report::DEFAULT_INTERCHANGE_FILE;

#[derive(Parser)]
#[command(
    name = "covstat",
    version,
    about = "Join, aggregate, and rank per-country coronavirus statistics",
    long_about = "Joins per-country case counts, population figures, and capital\n\
                  coordinates into one canonical dataset, persists it as flat CSV,\n\
                  and recomputes regional aggregates, per-capita metrics, and\n\
                  top-k mortality rankings from the stored file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Join the three sources and write the interchange file.
    Build(BuildArgs),

    /// Summarize cases, deaths, and population by region.
    Regions(RegionsArgs),

    /// Per-capita case and death rates per country.
    Countries(CountriesArgs),

    /// Rank countries by deaths per capita.
    Top(TopArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Counts source: country, cases, deaths, region.
    #[arg(value_name = "COUNTS_CSV")]
    pub counts: PathBuf,

    /// Population source: country, population.
    #[arg(value_name = "POPULATION_CSV")]
    pub population: PathBuf,

    /// City source with capital flags and coordinates.
    #[arg(value_name = "CITIES_CSV")]
    pub cities: PathBuf,

    /// Where to write the interchange file.
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_INTERCHANGE_FILE
    )]
    pub output: PathBuf,

    /// How to pick a capital when a country has several primary rows.
    #[arg(long = "capital-policy", value_enum, default_value = "first")]
    pub capital_policy: CapitalPolicyArg,

    /// Seed for `--capital-policy random`.
    #[arg(long = "capital-seed", value_name = "N", default_value_t = 0)]
    pub capital_seed: u64,
}

#[derive(Parser)]
pub struct RegionsArgs {
    /// Interchange file produced by `build`.
    #[arg(
        long = "data",
        value_name = "PATH",
        default_value = DEFAULT_INTERCHANGE_FILE
    )]
    pub data: PathBuf,
}

#[derive(Parser)]
pub struct CountriesArgs {
    /// Interchange file produced by `build`.
    #[arg(
        long = "data",
        value_name = "PATH",
        default_value = DEFAULT_INTERCHANGE_FILE
    )]
    pub data: PathBuf,

    /// Restrict to these countries (repeatable). Unknown names are ignored.
    #[arg(long = "country", value_name = "NAME")]
    pub countries: Vec<String>,
}

#[derive(Parser)]
pub struct TopArgs {
    /// Number of countries to select.
    #[arg(long)]
    pub k: usize,

    /// Minimum population a country must have to be eligible.
    #[arg(long = "min-population", value_name = "N", default_value_t = 0)]
    pub min_population: u64,

    /// Interchange file produced by `build`.
    #[arg(
        long = "data",
        value_name = "PATH",
        default_value = DEFAULT_INTERCHANGE_FILE
    )]
    pub data: PathBuf,
}

/// CLI capital selection choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum CapitalPolicyArg {
    First,
    Random,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
