//! Command-line parsing for the sales CSV pipeline.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the transformation/aggregation code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sales", version, about = "Sales CSV cleaning and analysis pipeline")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full pipeline: profile, clean, aggregate, print the report, export CSVs.
    Report(ReportArgs),
    /// Profile the raw CSV only (no cleaning, no exports).
    Inspect(ReportArgs),
}

/// Common options for reporting and inspection.
#[derive(Debug, Parser, Clone)]
pub struct ReportArgs {
    /// Input sales CSV.
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Destination directory for the derived CSV files.
    #[arg(short = 'o', long, default_value = "outputs")]
    pub output_dir: PathBuf,

    /// Number of rows in the top-customer and top-product tables.
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    /// Revenue threshold for the high-value order listing.
    #[arg(long, default_value_t = 500.0)]
    pub high_value: f64,
}
