use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{info, warn};
use serde::Serialize;
use similar::TextDiff;

use crate::{
    cli::MergeArgs,
    gdp, population,
    rewrite::{self, Rewrite},
};

/// Summary of one merge pass, serialized when `--report` is given.
#[derive(Debug, Serialize)]
pub struct MergeReport {
    pub year: String,
    pub entries_matched: usize,
    pub populations_filled: usize,
    pub gdps_filled: usize,
    pub missing_population: Vec<String>,
    pub missing_gdp: Vec<String>,
}

pub fn execute(args: &MergeArgs) -> Result<()> {
    let population = population::load_population(&args.population, &args.year)?;
    let gdp = gdp::load_gdp(&args.gdp, &args.year, args.gdp_skip_rows)?;

    let js = fs::read_to_string(&args.target)
        .with_context(|| format!("Reading target file {:?}", args.target))?;
    let Rewrite { text, countries } = rewrite::fill_placeholders(&js, &population, &gdp);

    if countries.is_empty() {
        warn!("No placeholder entries found in {:?}", args.target);
    }

    let report = build_report(&args.year, &countries, &population, &gdp);
    info!(
        "Matched {} placeholder entry(s): filled {} population value(s), {} GDP value(s)",
        report.entries_matched, report.populations_filled, report.gdps_filled
    );
    for name in &report.missing_population {
        warn!("No {} population for '{name}'; leaving 0", args.year);
    }
    for name in &report.missing_gdp {
        warn!("No {} GDP for '{name}'; leaving 0", args.year);
    }

    if args.dry_run {
        print_diff(&js, &text, &args.target);
    } else {
        fs::write(&args.target, &text)
            .with_context(|| format!("Writing target file {:?}", args.target))?;
        info!("Rewrote {:?}", args.target);
    }

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&report).context("Serializing merge report")?;
        fs::write(path, json).with_context(|| format!("Writing report to {path:?}"))?;
        info!("Merge report written to {path:?}");
    }
    Ok(())
}

fn build_report(
    year: &str,
    countries: &[String],
    population: &HashMap<String, i64>,
    gdp: &HashMap<String, f64>,
) -> MergeReport {
    let missing_population: Vec<String> = countries
        .iter()
        .filter(|name| !population.contains_key(name.as_str()))
        .cloned()
        .sorted()
        .collect();
    let missing_gdp: Vec<String> = countries
        .iter()
        .filter(|name| !gdp.contains_key(name.as_str()))
        .cloned()
        .sorted()
        .collect();
    MergeReport {
        year: year.to_string(),
        entries_matched: countries.len(),
        populations_filled: countries.len() - missing_population.len(),
        gdps_filled: countries.len() - missing_gdp.len(),
        missing_population,
        missing_gdp,
    }
}

fn print_diff(before: &str, after: &str, path: &Path) {
    if before == after {
        info!("Dry run: no changes for {:?}", path);
        return;
    }
    let diff = TextDiff::from_lines(before, after);
    let display = path.display().to_string();
    print!(
        "{}",
        diff.unified_diff()
            .context_radius(2)
            .header(&format!("{display} (current)"), &format!("{display} (merged)"))
    );
}
