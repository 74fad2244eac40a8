//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during aggregation
//! - exported to CSV
//! - reloaded later by downstream consumers (e.g., chart renderers)

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

/// Exact column keys the input CSV header must contain.
///
/// Extra columns are tolerated and ignored; a missing column is a fatal
/// input error reported by name before any row is parsed.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "order_id",
    "date",
    "customer_id",
    "customer_name",
    "product",
    "category",
    "region",
    "quantity",
    "price",
    "status",
];

/// A raw row of CSV input.
///
/// Numeric fields are parsed at load time (so bad numbers fail with a line
/// number); the date stays raw text until the cleaning stage, which owns
/// date parsing. Text fields are deliberately unvalidated: category, region
/// and status are open vocabularies, and `order_id` uniqueness is not
/// enforced.
#[derive(Debug, Clone)]
pub struct OrderRow {
    /// 1-based CSV line number, for error messages.
    pub line: usize,

    pub order_id: String,
    pub date: String,
    pub customer_id: Option<String>,
    pub customer_name: String,
    pub product: String,
    pub category: String,
    pub region: String,
    pub quantity: Option<f64>,
    pub price: f64,
    pub status: String,
}

/// A cleaned, enriched order record.
///
/// Field order matters: the cleaned-records export serializes fields in
/// declaration order, and downstream consumers expect the input columns
/// first, then the derived ones.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub date: NaiveDate,
    pub customer_id: Option<String>,
    pub customer_name: String,
    pub product: String,
    pub category: String,
    pub region: String,
    /// Never missing after cleaning (absent input quantity defaults to 1).
    pub quantity: f64,
    pub price: f64,
    pub status: String,
    /// Always recomputed as `quantity * price`, never read from input.
    pub revenue: f64,
    pub month: u32,
    pub day_name: String,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,

    /// Truncation for the top-customer / top-product tables.
    pub top_n: usize,
    /// Revenue cut-off for the high-value order listing.
    pub high_value_threshold: f64,
}
