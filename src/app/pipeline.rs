//! Shared pipeline logic used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load -> profile -> clean -> aggregate
//!
//! The CLI can then focus on presentation (printing and export paths), and a
//! future front-end can reuse the same stages.

use crate::clean::{CleanedData, clean_orders};
use crate::domain::ReportConfig;
use crate::error::AppError;
use crate::io::ingest::{IngestedData, load_orders};
use crate::stats::{AggregationResults, aggregate_orders};

/// All computed outputs of a single `sales report` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedData,
    pub cleaned: CleanedData,
    pub aggregates: AggregationResults,
}

/// Execute the full pipeline and return the computed outputs.
///
/// Exports are deliberately not part of this function: stages here are pure
/// with respect to the filesystem (beyond reading the input), which keeps
/// them reusable for an inspect-style front-end.
pub fn run_report(config: &ReportConfig) -> Result<RunOutput, AppError> {
    // 1) Load + profile the raw CSV.
    let ingest = load_orders(config)?;

    // 2) Clean and enrich every row.
    let cleaned = clean_orders(&ingest.rows)?;

    // 3) Compute aggregations, filters, pivot, and correlation.
    let aggregates = aggregate_orders(&cleaned.records, config);

    Ok(RunOutput {
        ingest,
        cleaned,
        aggregates,
    })
}
