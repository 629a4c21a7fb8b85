use std::{collections::HashMap, path::Path};

use anyhow::{Context, Result};
use log::info;

use crate::data::trim_quotes;

/// Loads the population lookup: country name -> population for `year`.
///
/// Column layout is fixed: name in column 0, year in column 2, value in
/// column 3. The header row is skipped, rows for other years are ignored
/// outright, and a later row for the same country overwrites an earlier one.
pub fn load_population(path: &Path, year: &str) -> Result<HashMap<String, i64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Opening population file {path:?}"))?;

    let mut lookup = HashMap::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("Reading population row {}", row_idx + 2))?;
        if record.get(2).map(str::trim) != Some(year) {
            continue;
        }
        let name = trim_quotes(record.get(0).unwrap_or("")).to_string();
        let raw = record.get(3).unwrap_or("").trim();
        let value: i64 = raw.parse().with_context(|| {
            format!("Parsing population '{raw}' for '{name}' (row {})", row_idx + 2)
        })?;
        lookup.insert(name, value);
    }
    info!(
        "Loaded {} population value(s) for {} from {:?}",
        lookup.len(),
        year,
        path
    );
    Ok(lookup)
}
