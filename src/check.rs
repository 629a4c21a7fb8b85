use std::fs;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::{cli::CheckArgs, gdp, population, rewrite};

/// Reports which entries in the target file are still at placeholder zero,
/// and when CSVs are supplied, which of those have no data to fill them.
pub fn execute(args: &CheckArgs) -> Result<()> {
    let js = fs::read_to_string(&args.target)
        .with_context(|| format!("Reading target file {:?}", args.target))?;
    let placeholders = rewrite::placeholder_countries(&js);
    if placeholders.is_empty() {
        info!("✓ {:?} has no placeholder entries", args.target);
        return Ok(());
    }
    info!(
        "{} placeholder entry(s) remaining in {:?}",
        placeholders.len(),
        args.target
    );
    for name in &placeholders {
        info!("  {name}");
    }

    let population = match &args.population {
        Some(path) => Some(population::load_population(path, &args.year)?),
        None => None,
    };
    let gdp = match &args.gdp {
        Some(path) => Some(gdp::load_gdp(path, &args.year, args.gdp_skip_rows)?),
        None => None,
    };
    if population.is_none() && gdp.is_none() {
        return Ok(());
    }

    let mut fillable = 0usize;
    for name in &placeholders {
        let has_population = population
            .as_ref()
            .is_some_and(|lookup| lookup.contains_key(name));
        let has_gdp = gdp.as_ref().is_some_and(|lookup| lookup.contains_key(name));
        if has_population || has_gdp {
            fillable += 1;
        } else {
            warn!("'{name}' has no {} data in the supplied CSV(s)", args.year);
        }
    }
    info!(
        "{} of {} placeholder entry(s) would be filled by a merge",
        fillable,
        placeholders.len()
    );
    Ok(())
}
