use anyhow::Result;

use covstat_cli::pipeline;
use covstat_cli::types::BuildRequest;
use covstat_ingest::CapitalPolicy;

use crate::cli::{BuildArgs, CapitalPolicyArg, CountriesArgs, RegionsArgs, TopArgs};
use crate::summary;

pub fn run_build(args: &BuildArgs) -> Result<()> {
    let request = BuildRequest {
        counts: args.counts.clone(),
        population: args.population.clone(),
        cities: args.cities.clone(),
        output: args.output.clone(),
        capital_policy: capital_policy(args),
    };
    let report = pipeline::run_build(&request)?;
    summary::print_build_report(&report);
    Ok(())
}

pub fn run_regions(args: &RegionsArgs) -> Result<()> {
    let summaries = pipeline::run_regions(&args.data)?;
    summary::print_region_table(&summaries);
    Ok(())
}

pub fn run_countries(args: &CountriesArgs) -> Result<()> {
    let normalized = pipeline::run_countries(&args.data, &args.countries)?;
    summary::print_country_table(&normalized);
    Ok(())
}

pub fn run_top(args: &TopArgs) -> Result<()> {
    let ranked = pipeline::run_top(&args.data, args.k, args.min_population)?;
    summary::print_top_table(&ranked);
    Ok(())
}

fn capital_policy(args: &BuildArgs) -> CapitalPolicy {
    match args.capital_policy {
        CapitalPolicyArg::First => CapitalPolicy::First,
        CapitalPolicyArg::Random => CapitalPolicy::Random {
            seed: args.capital_seed,
        },
    }
}
