use std::{collections::HashMap, path::Path};

use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};

use crate::data::trim_quotes;

/// Loads the GDP lookup: country name -> GDP in current US$ for `year`.
///
/// World Bank exports open with a metadata preamble whose records are shorter
/// than the data rows, so the reader runs in flexible mode. `skip_rows`
/// records are discarded unconditionally, the next record is the header, and
/// the value column is located by the header label matching `year`.
///
/// Empty or unparseable cells leave the country out of the lookup entirely;
/// the rewriter later injects 0 for absent countries, so the written value is
/// the same, but the condition is logged instead of being folded into a real
/// zero.
pub fn load_gdp(path: &Path, year: &str, skip_rows: usize) -> Result<HashMap<String, f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Opening GDP file {path:?}"))?;

    let mut records = reader.records();
    for _ in 0..skip_rows {
        if records
            .next()
            .transpose()
            .context("Reading GDP metadata preamble")?
            .is_none()
        {
            break;
        }
    }
    let header = records
        .next()
        .transpose()
        .context("Reading GDP header row")?
        .ok_or_else(|| anyhow!("GDP file {path:?} ends before the header row"))?;
    let value_idx = header
        .iter()
        .position(|label| trim_quotes(label) == year)
        .ok_or_else(|| anyhow!("GDP header in {path:?} has no '{year}' column"))?;

    let mut lookup = HashMap::new();
    for (row_idx, record) in records.enumerate() {
        let record = record
            .with_context(|| format!("Reading GDP row {}", row_idx + skip_rows + 2))?;
        let name = trim_quotes(record.get(0).unwrap_or("")).to_string();
        if name.is_empty() {
            continue;
        }
        let raw = record.get(value_idx).unwrap_or("").trim();
        if raw.is_empty() {
            debug!("No {year} GDP for '{name}'");
            continue;
        }
        match raw.parse::<f64>() {
            Ok(value) => {
                lookup.insert(name, value);
            }
            Err(_) => warn!("Ignoring unparseable {year} GDP '{raw}' for '{name}'"),
        }
    }
    info!(
        "Loaded {} GDP value(s) for {} from {:?}",
        lookup.len(),
        year,
        path
    );
    Ok(lookup)
}
