//! Cleaning and enrichment of raw order rows.
//!
//! Policy (in order):
//! - missing `quantity` becomes the literal constant 1
//! - `date` text is parsed to a calendar date; an unparseable value is fatal,
//!   there is no per-row fallback
//! - `revenue`, `month` and `day_name` are derived for every row
//!
//! Everything else passes through untouched: duplicate rows survive, enum-like
//! text fields keep whatever the file said.

use chrono::{Datelike, NaiveDate};

use crate::domain::{OrderRecord, OrderRow};
use crate::error::AppError;

/// Counters describing what cleaning changed.
#[derive(Debug, Clone)]
pub struct CleaningSummary {
    pub rows: usize,
    /// Rows whose quantity was absent and got the default of 1.
    pub quantity_filled: usize,
}

/// Cleaning output: enriched records + the summary for reporting.
#[derive(Debug, Clone)]
pub struct CleanedData {
    pub records: Vec<OrderRecord>,
    pub summary: CleaningSummary,
}

/// Clean every row, deriving revenue/month/day_name.
pub fn clean_orders(rows: &[OrderRow]) -> Result<CleanedData, AppError> {
    let mut records = Vec::with_capacity(rows.len());
    let mut quantity_filled = 0usize;

    for row in rows {
        let quantity = match row.quantity {
            Some(q) => q,
            None => {
                quantity_filled += 1;
                1.0
            }
        };

        let date = parse_date(&row.date)
            .map_err(|e| AppError::data(format!("Invalid `date` on line {}: {e}", row.line)))?;

        let revenue = quantity * row.price;

        records.push(OrderRecord {
            order_id: row.order_id.clone(),
            date,
            customer_id: row.customer_id.clone(),
            customer_name: row.customer_name.clone(),
            product: row.product.clone(),
            category: row.category.clone(),
            region: row.region.clone(),
            quantity,
            price: row.price,
            status: row.status.clone(),
            revenue,
            month: date.month(),
            day_name: date.format("%A").to_string(),
        });
    }

    let summary = CleaningSummary {
        rows: records.len(),
        quantity_filled,
    };

    Ok(CleanedData { records, summary })
}

/// Parse a calendar date from text.
///
/// We recommend ISO dates (`YYYY-MM-DD`), but spreadsheet exports often use
/// `DD/MM/YYYY` or `DD-MM-YYYY`. We accept a small set of common formats to
/// reduce friction while keeping parsing deterministic.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    const FMTS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];
    for fmt in FMTS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    Err(format!(
        "Invalid date '{s}'. Expected one of: YYYY-MM-DD, DD/MM/YYYY, DD-MM-YYYY, YYYY/MM/DD."
    ))
}
