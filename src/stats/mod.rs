//! Aggregations, filters, and the pivot over the cleaned record set.
//!
//! Responsibilities:
//!
//! - grouped rollups (category, status, customer, region, product, month)
//! - fixed row filters for the console report
//! - the category × region revenue pivot
//! - assembling everything into one [`AggregationResults`]

pub mod filters;
pub mod groupings;
pub mod pivot;

pub use filters::*;
pub use groupings::*;
pub use pivot::*;

use crate::domain::{OrderRecord, ReportConfig};
use crate::math::{CorrelationMatrix, correlation_matrix};

/// Every derived summary of one pipeline run.
///
/// All fields are pure functions of the cleaned record set (plus the
/// `top_n` / threshold knobs); computing them mutates nothing.
#[derive(Debug, Clone)]
pub struct AggregationResults {
    pub revenue_by_category: Vec<CategoryRevenue>,
    pub orders_by_status: Vec<StatusCount>,
    pub top_customers: Vec<CustomerSpend>,
    pub revenue_by_region: Vec<RegionSummary>,
    pub top_products: Vec<ProductSummary>,
    pub monthly_revenue: Vec<MonthRevenue>,
    pub overall: OverallStats,
    pub high_value: Vec<OrderRecord>,
    pub electronics_north: Vec<OrderRecord>,
    pub attention: Vec<OrderRecord>,
    pub pivot: RevenuePivot,
    pub correlation: CorrelationMatrix,
}

/// Compute the full set of aggregations for one run.
pub fn aggregate_orders(records: &[OrderRecord], config: &ReportConfig) -> AggregationResults {
    let correlation = correlation_matrix(&[
        ("quantity", records.iter().map(|r| r.quantity).collect()),
        ("price", records.iter().map(|r| r.price).collect()),
        ("revenue", records.iter().map(|r| r.revenue).collect()),
    ]);

    AggregationResults {
        revenue_by_category: revenue_by_category(records),
        orders_by_status: orders_by_status(records),
        top_customers: top_customers(records, config.top_n),
        revenue_by_region: revenue_by_region(records),
        top_products: top_products(records, config.top_n),
        monthly_revenue: monthly_revenue(records),
        overall: overall_stats(records),
        high_value: high_value_orders(records, config.high_value_threshold),
        electronics_north: electronics_in_north(records),
        attention: attention_orders(records),
        pivot: revenue_pivot(records),
        correlation,
    }
}
