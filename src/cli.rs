use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Merge country statistics into a JavaScript database", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fill placeholder population/gdp fields in the target file from CSV data
    Merge(MergeArgs),
    /// Report placeholder entries remaining in the target file
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Population CSV with country, year, and population columns
    #[arg(short = 'p', long = "population")]
    pub population: PathBuf,
    /// World Bank GDP CSV with a metadata preamble and per-year columns
    #[arg(short = 'g', long = "gdp")]
    pub gdp: PathBuf,
    /// JavaScript file holding the country database, rewritten in place
    #[arg(short = 't', long = "target")]
    pub target: PathBuf,
    /// Year to select from both datasets
    #[arg(long, default_value = "2023")]
    pub year: String,
    /// Number of metadata rows before the GDP header row
    #[arg(long = "gdp-skip-rows", default_value_t = 5)]
    pub gdp_skip_rows: usize,
    /// Print a unified diff of the changes instead of writing the target
    #[arg(long = "dry-run")]
    pub dry_run: bool,
    /// Write a JSON merge summary to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// JavaScript file holding the country database
    #[arg(short = 't', long = "target")]
    pub target: PathBuf,
    /// Population CSV to cross-check placeholder entries against
    #[arg(short = 'p', long = "population")]
    pub population: Option<PathBuf>,
    /// World Bank GDP CSV to cross-check placeholder entries against
    #[arg(short = 'g', long = "gdp")]
    pub gdp: Option<PathBuf>,
    /// Year to select from both datasets
    #[arg(long, default_value = "2023")]
    pub year: String,
    /// Number of metadata rows before the GDP header row
    #[arg(long = "gdp-skip-rows", default_value_t = 5)]
    pub gdp_skip_rows: usize,
}
