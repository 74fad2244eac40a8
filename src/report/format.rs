//! Console rendering of the profile, cleaning summary, and aggregations.

use std::path::Path;

use crate::clean::CleaningSummary;
use crate::domain::OrderRecord;
use crate::io::ingest::DatasetProfile;
use crate::math::CorrelationMatrix;
use crate::stats::{AggregationResults, RevenuePivot};

/// Format the raw-data profile (diagnostics pass).
pub fn format_profile(input_path: &Path, profile: &DatasetProfile) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Dataset profile: {} ===\n", input_path.display()));
    out.push_str(&format!(
        "Rows: {} | Columns: {}\n",
        profile.n_rows, profile.n_cols
    ));
    out.push_str(&format!("Duplicate rows: {}\n", profile.duplicate_rows));

    out.push_str("\nColumns:\n");
    out.push_str(&format!(
        "{:<16} {:<9} {:>8}\n",
        "column", "type", "missing"
    ));
    out.push_str(&format!("{:-<16} {:-<9} {:-<8}\n", "", "", ""));
    for col in &profile.columns {
        out.push_str(&format!(
            "{:<16} {:<9} {:>8}\n",
            truncate(&col.name, 16),
            col.dtype.display_name(),
            col.missing
        ));
    }

    let numeric: Vec<_> = profile
        .columns
        .iter()
        .filter_map(|c| c.numeric.as_ref().map(|n| (c.name.as_str(), n)))
        .collect();
    if !numeric.is_empty() {
        out.push_str("\nNumeric columns:\n");
        out.push_str(&format!(
            "{:<16} {:>12} {:>12} {:>12} {:>12}\n",
            "column", "min", "mean", "max", "std"
        ));
        out.push_str(&format!(
            "{:-<16} {:-<12} {:-<12} {:-<12} {:-<12}\n",
            "", "", "", "", ""
        ));
        for (name, n) in numeric {
            out.push_str(&format!(
                "{:<16} {:>12.2} {:>12.2} {:>12.2} {:>12.2}\n",
                truncate(name, 16),
                n.min,
                n.mean,
                n.max,
                n.std
            ));
        }
    }

    if !profile.preview.is_empty() {
        out.push_str("\nFirst rows:\n");
        for row in &profile.preview {
            out.push_str(&format!("  {}\n", row.join(" | ")));
        }
    }

    out
}

/// Format the cleaning summary.
pub fn format_cleaning(summary: &CleaningSummary) -> String {
    let mut out = String::new();
    out.push_str("=== Cleaning ===\n");
    out.push_str(&format!("Rows cleaned: {}\n", summary.rows));
    out.push_str(&format!(
        "Missing quantity filled with 1: {}\n",
        summary.quantity_filled
    ));
    out.push_str("Derived columns: revenue, month, day_name\n");
    out
}

/// Format the grouped aggregations and overall statistics.
pub fn format_summary(agg: &AggregationResults) -> String {
    let mut out = String::new();

    out.push_str("=== Summary ===\n");

    out.push_str("Revenue by category:\n");
    out.push_str(&format!("{:<20} {:>14}\n", "category", "revenue"));
    for c in &agg.revenue_by_category {
        out.push_str(&format!(
            "{:<20} {:>14}\n",
            truncate(&c.category, 20),
            fmt_money(c.revenue)
        ));
    }

    out.push_str("\nOrders by status:\n");
    out.push_str(&format!("{:<14} {:>8}\n", "status", "orders"));
    for s in &agg.orders_by_status {
        out.push_str(&format!("{:<14} {:>8}\n", truncate(&s.status, 14), s.count));
    }

    out.push_str(&format!("\nTop {} customers by spending:\n", agg.top_customers.len()));
    out.push_str(&format!(
        "{:<24} {:>14} {:>12}\n",
        "customer", "revenue", "num_orders"
    ));
    for c in &agg.top_customers {
        out.push_str(&format!(
            "{:<24} {:>14} {:>12}\n",
            truncate(&c.customer_name, 24),
            fmt_money(c.revenue),
            c.num_orders
        ));
    }

    out.push_str("\nRevenue by region:\n");
    out.push_str(&format!(
        "{:<12} {:>14} {:>12} {:>10} {:>16}\n",
        "region", "revenue", "num_orders", "quantity", "avg_order_value"
    ));
    for r in &agg.revenue_by_region {
        out.push_str(&format!(
            "{:<12} {:>14} {:>12} {:>10.0} {:>16}\n",
            truncate(&r.region, 12),
            fmt_money(r.revenue),
            r.num_orders,
            r.quantity,
            fmt_money(r.avg_order_value)
        ));
    }

    out.push_str(&format!("\nTop {} most popular products:\n", agg.top_products.len()));
    out.push_str(&format!(
        "{:<20} {:>10} {:>14} {:>14}\n",
        "product", "quantity", "times_ordered", "revenue"
    ));
    for p in &agg.top_products {
        out.push_str(&format!(
            "{:<20} {:>10.0} {:>14} {:>14}\n",
            truncate(&p.product, 20),
            p.quantity,
            p.times_ordered,
            fmt_money(p.revenue)
        ));
    }

    out.push_str("\nRevenue by month:\n");
    out.push_str(&format!("{:<6} {:>14}\n", "month", "revenue"));
    for m in &agg.monthly_revenue {
        out.push_str(&format!("{:<6} {:>14}\n", m.month, fmt_money(m.revenue)));
    }

    out.push_str("\nOverall statistics:\n");
    out.push_str(&format!("  Total revenue: ${}\n", fmt_money(agg.overall.total_revenue)));
    out.push_str(&format!(
        "  Average order value: ${}\n",
        fmt_money(agg.overall.avg_order_value)
    ));
    out.push_str(&format!("  Total orders: {}\n", agg.overall.total_orders));
    out.push_str(&format!("  Total items sold: {:.0}\n", agg.overall.total_items));

    out
}

/// Format the three fixed row listings.
pub fn format_filters(agg: &AggregationResults, high_value_threshold: f64) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== High value orders (revenue > {}) ===\n",
        fmt_money(high_value_threshold)
    ));
    out.push_str(&format_order_listing(&agg.high_value));

    out.push_str("\n=== Electronics in North region ===\n");
    out.push_str(&format_order_listing(&agg.electronics_north));

    out.push_str("\n=== Orders that are Pending or Cancelled ===\n");
    out.push_str(&format_order_listing(&agg.attention));

    out
}

fn format_order_listing(records: &[OrderRecord]) -> String {
    if records.is_empty() {
        return "(none)\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<10} {:<20} {:<24} {:<11} {:>14}\n",
        "order_id", "product", "customer", "status", "revenue"
    ));
    for r in records {
        out.push_str(&format!(
            "{:<10} {:<20} {:<24} {:<11} {:>14}\n",
            truncate(&r.order_id, 10),
            truncate(&r.product, 20),
            truncate(&r.customer_name, 24),
            truncate(&r.status, 11),
            fmt_money(r.revenue)
        ));
    }
    out
}

/// Format the category × region pivot.
pub fn format_pivot(pivot: &RevenuePivot) -> String {
    let mut out = String::new();

    out.push_str("=== Pivot: revenue by category and region ===\n");
    out.push_str(&format!("{:<16}", "category"));
    for region in &pivot.regions {
        out.push_str(&format!(" {:>12}", truncate(region, 12)));
    }
    out.push('\n');

    for (row, category) in pivot.categories.iter().enumerate() {
        out.push_str(&format!("{:<16}", truncate(category, 16)));
        for col in 0..pivot.regions.len() {
            out.push_str(&format!(" {:>12.2}", pivot.cells[row][col]));
        }
        out.push('\n');
    }

    out
}

/// Format the correlation matrix.
pub fn format_correlation(corr: &CorrelationMatrix) -> String {
    let mut out = String::new();

    out.push_str("=== Correlation (quantity, price, revenue) ===\n");
    out.push_str(&format!("{:<10}", ""));
    for label in &corr.labels {
        out.push_str(&format!(" {:>10}", label));
    }
    out.push('\n');

    for (i, label) in corr.labels.iter().enumerate() {
        out.push_str(&format!("{:<10}", label));
        for j in 0..corr.labels.len() {
            out.push_str(&format!(" {:>10.3}", corr.matrix[(i, j)]));
        }
        out.push('\n');
    }

    out
}

/// `1234567.891` -> `1,234,567.89`.
fn fmt_money(v: f64) -> String {
    let fixed = format!("{:.2}", v.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if v < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_money_groups_thousands() {
        assert_eq!(fmt_money(0.0), "0.00");
        assert_eq!(fmt_money(999.5), "999.50");
        assert_eq!(fmt_money(1234.0), "1,234.00");
        assert_eq!(fmt_money(1234567.891), "1,234,567.89");
        assert_eq!(fmt_money(-1234.5), "-1,234.50");
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate("Laptop", 10), "Laptop");
        assert_eq!(truncate("A very long product name", 10), "A very lo.");
    }
}
