use std::{collections::HashMap, sync::LazyLock};

use regex::{Captures, Regex};

use crate::data::format_stat;

/// Matches a country entry whose statistics are still at their placeholder
/// zeros: quoted name, open brace, `capital: '...'`, then `population: 0`
/// and `gdp: 0`. A filled entry no longer matches, which is what makes a
/// re-run leave it untouched.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"'([^']+)': \{\s+capital: '([^']+)',\s+population: 0,\s+gdp: 0,")
        .expect("placeholder pattern is valid")
});

/// Result of a substitution pass over the database text.
pub struct Rewrite {
    /// The full text with every placeholder entry rewritten.
    pub text: String,
    /// Country names of the entries that matched, in document order.
    pub countries: Vec<String>,
}

/// Replaces every placeholder entry with the looked-up population and GDP,
/// preserving the country name and capital verbatim. Countries absent from a
/// lookup get an explicit 0 for that field.
pub fn fill_placeholders(
    js: &str,
    population: &HashMap<String, i64>,
    gdp: &HashMap<String, f64>,
) -> Rewrite {
    let mut countries = Vec::new();
    let text = PLACEHOLDER
        .replace_all(js, |caps: &Captures| {
            let name = &caps[1];
            let capital = &caps[2];
            let pop = population.get(name).copied().unwrap_or(0);
            let gdp_value = gdp.get(name).copied().unwrap_or(0.0);
            countries.push(name.to_string());
            format!(
                "'{name}': {{\n    capital: '{capital}',\n    population: {pop},\n    gdp: {},",
                format_stat(gdp_value)
            )
        })
        .into_owned();
    Rewrite { text, countries }
}

/// Country names of all placeholder entries in the text, in document order.
pub fn placeholder_countries(js: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(js)
        .map(|caps| caps[1].to_string())
        .collect()
}
