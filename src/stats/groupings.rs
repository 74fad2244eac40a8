//! Grouped aggregations over the cleaned record set.
//!
//! Every function here is a pure function of its input slice. Grouping uses
//! ordered maps (key-ascending) so equal inputs always produce identical
//! output, and descending sorts are stable, which makes the tie-break on
//! equal measures "key ascending" rather than arbitrary.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::domain::OrderRecord;

/// Total revenue for one category.
#[derive(Debug, Clone)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: f64,
}

/// Row count for one status value.
#[derive(Debug, Clone)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// Spending summary for one customer (identified customers only).
#[derive(Debug, Clone)]
pub struct CustomerSpend {
    pub customer_name: String,
    pub revenue: f64,
    pub num_orders: usize,
}

/// Per-region rollup.
#[derive(Debug, Clone)]
pub struct RegionSummary {
    pub region: String,
    pub revenue: f64,
    pub num_orders: usize,
    pub quantity: f64,
    /// `revenue / num_orders`; a region cannot appear with zero orders.
    pub avg_order_value: f64,
}

/// Per-product rollup.
#[derive(Debug, Clone)]
pub struct ProductSummary {
    pub product: String,
    pub quantity: f64,
    pub times_ordered: usize,
    pub revenue: f64,
}

/// Revenue total for one calendar month.
#[derive(Debug, Clone)]
pub struct MonthRevenue {
    pub month: u32,
    pub revenue: f64,
}

/// Whole-dataset statistics.
#[derive(Debug, Clone)]
pub struct OverallStats {
    pub total_revenue: f64,
    /// Mean revenue per order.
    pub avg_order_value: f64,
    pub total_orders: usize,
    pub total_items: f64,
}

/// Sum of revenue per category, descending by revenue.
pub fn revenue_by_category(records: &[OrderRecord]) -> Vec<CategoryRevenue> {
    let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();
    for r in records {
        *by_category.entry(r.category.as_str()).or_insert(0.0) += r.revenue;
    }

    let mut out: Vec<CategoryRevenue> = by_category
        .into_iter()
        .map(|(category, revenue)| CategoryRevenue {
            category: category.to_string(),
            revenue,
        })
        .collect();
    out.sort_by(|a, b| desc(a.revenue, b.revenue));
    out
}

/// Row count per status, descending by count.
pub fn orders_by_status(records: &[OrderRecord]) -> Vec<StatusCount> {
    let mut by_status: BTreeMap<&str, usize> = BTreeMap::new();
    for r in records {
        *by_status.entry(r.status.as_str()).or_insert(0) += 1;
    }

    let mut out: Vec<StatusCount> = by_status
        .into_iter()
        .map(|(status, count)| StatusCount {
            status: status.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

/// Top spenders among rows that carry a customer id, descending by revenue,
/// truncated to `top_n`.
///
/// Rows without a customer id are excluded rather than lumped together: an
/// anonymous order cannot be attributed to anyone's spending.
pub fn top_customers(records: &[OrderRecord], top_n: usize) -> Vec<CustomerSpend> {
    let mut by_name: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for r in records.iter().filter(|r| r.customer_id.is_some()) {
        let entry = by_name.entry(r.customer_name.as_str()).or_insert((0.0, 0));
        entry.0 += r.revenue;
        entry.1 += 1;
    }

    let mut out: Vec<CustomerSpend> = by_name
        .into_iter()
        .map(|(customer_name, (revenue, num_orders))| CustomerSpend {
            customer_name: customer_name.to_string(),
            revenue,
            num_orders,
        })
        .collect();
    out.sort_by(|a, b| desc(a.revenue, b.revenue));
    out.truncate(top_n);
    out
}

/// Per-region revenue/order/quantity rollup, region-ascending.
pub fn revenue_by_region(records: &[OrderRecord]) -> Vec<RegionSummary> {
    let mut by_region: BTreeMap<&str, (f64, usize, f64)> = BTreeMap::new();
    for r in records {
        let entry = by_region.entry(r.region.as_str()).or_insert((0.0, 0, 0.0));
        entry.0 += r.revenue;
        entry.1 += 1;
        entry.2 += r.quantity;
    }

    by_region
        .into_iter()
        .map(|(region, (revenue, num_orders, quantity))| RegionSummary {
            region: region.to_string(),
            revenue,
            num_orders,
            quantity,
            // num_orders >= 1 by construction: a region only exists here
            // because at least one record carried it.
            avg_order_value: revenue / num_orders as f64,
        })
        .collect()
}

/// Most-ordered products, descending by order count, truncated to `top_n`.
pub fn top_products(records: &[OrderRecord], top_n: usize) -> Vec<ProductSummary> {
    let mut by_product: BTreeMap<&str, (f64, usize, f64)> = BTreeMap::new();
    for r in records {
        let entry = by_product.entry(r.product.as_str()).or_insert((0.0, 0, 0.0));
        entry.0 += r.quantity;
        entry.1 += 1;
        entry.2 += r.revenue;
    }

    let mut out: Vec<ProductSummary> = by_product
        .into_iter()
        .map(|(product, (quantity, times_ordered, revenue))| ProductSummary {
            product: product.to_string(),
            quantity,
            times_ordered,
            revenue,
        })
        .collect();
    out.sort_by(|a, b| b.times_ordered.cmp(&a.times_ordered));
    out.truncate(top_n);
    out
}

/// Sum of revenue per calendar month, month-ascending.
pub fn monthly_revenue(records: &[OrderRecord]) -> Vec<MonthRevenue> {
    let mut by_month: BTreeMap<u32, f64> = BTreeMap::new();
    for r in records {
        *by_month.entry(r.month).or_insert(0.0) += r.revenue;
    }

    by_month
        .into_iter()
        .map(|(month, revenue)| MonthRevenue { month, revenue })
        .collect()
}

/// Whole-dataset totals and means.
pub fn overall_stats(records: &[OrderRecord]) -> OverallStats {
    let total_revenue: f64 = records.iter().map(|r| r.revenue).sum();
    let total_items: f64 = records.iter().map(|r| r.quantity).sum();
    let total_orders = records.len();
    let avg_order_value = if total_orders == 0 {
        0.0
    } else {
        total_revenue / total_orders as f64
    };

    OverallStats {
        total_revenue,
        avg_order_value,
        total_orders,
        total_items,
    }
}

fn desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
