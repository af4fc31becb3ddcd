use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use covstat_cli::types::BuildReport;
use covstat_model::{NormalizedCountry, RankedCountry, RegionSummary};
use covstat_transform::format_numeric;

pub fn print_build_report(report: &BuildReport) {
    println!("Interchange: {}", report.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Counts rows"),
        header_cell("Joined"),
        header_cell("No population"),
        header_cell("No capital"),
        header_cell("Duplicates"),
        header_cell("Regions"),
    ]);
    apply_table_style(&mut table);
    for index in 0..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(report.counts_rows),
        Cell::new(report.joined)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        gap_cell(report.gaps.missing_population),
        gap_cell(report.gaps.missing_capital),
        gap_cell(report.gaps.duplicate_countries),
        Cell::new(report.region_count),
    ]);
    println!("{table}");
}

pub fn print_region_table(summaries: &[RegionSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Region"),
        header_cell("Cases"),
        header_cell("Deaths"),
        header_cell("Population"),
    ]);
    apply_table_style(&mut table);
    for index in 1..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total_cases = 0u64;
    let mut total_deaths = 0u64;
    let mut total_population = 0u64;
    for summary in summaries {
        total_cases += summary.total_cases;
        total_deaths += summary.total_deaths;
        total_population += summary.total_population;
        table.add_row(vec![
            Cell::new(&summary.region),
            Cell::new(summary.total_cases),
            Cell::new(summary.total_deaths),
            Cell::new(summary.total_population),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_cases).add_attribute(Attribute::Bold),
        Cell::new(total_deaths).add_attribute(Attribute::Bold),
        Cell::new(total_population).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_country_table(countries: &[NormalizedCountry]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Country"),
        header_cell("Cases per capita"),
        header_cell("Deaths per capita"),
        header_cell("Population"),
    ]);
    apply_table_style(&mut table);
    for index in 1..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for country in countries {
        table.add_row(vec![
            Cell::new(&country.country),
            Cell::new(format_numeric(country.cases_per_capita)),
            Cell::new(format_numeric(country.deaths_per_capita)),
            Cell::new(country.population),
        ]);
    }
    println!("{table}");
}

pub fn print_top_table(ranked: &[RankedCountry]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rank"),
        header_cell("Country"),
        header_cell("Deaths per capita"),
        header_cell("Latitude"),
        header_cell("Longitude"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for index in 2..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (index, entry) in ranked.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&entry.country),
            Cell::new(format_numeric(entry.deaths_per_capita)),
            Cell::new(format_numeric(entry.latitude)),
            Cell::new(format_numeric(entry.longitude)),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn gap_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
