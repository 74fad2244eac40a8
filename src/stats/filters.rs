//! Fixed row filters surfaced in the console report.
//!
//! These are listings, not aggregations: each returns the matching records
//! in input order, untouched.

use crate::domain::OrderRecord;

/// Statuses that flag an order as needing attention.
const ATTENTION_STATUSES: [&str; 2] = ["Pending", "Cancelled"];

/// Orders whose revenue exceeds `threshold` (strictly greater).
pub fn high_value_orders(records: &[OrderRecord], threshold: f64) -> Vec<OrderRecord> {
    records
        .iter()
        .filter(|r| r.revenue > threshold)
        .cloned()
        .collect()
}

/// Electronics orders from the North region.
///
/// The category/region literals are exact-match on purpose: the source data
/// uses these spellings, and the pipeline does not normalize enum text.
pub fn electronics_in_north(records: &[OrderRecord]) -> Vec<OrderRecord> {
    records
        .iter()
        .filter(|r| r.category == "Electronics" && r.region == "North")
        .cloned()
        .collect()
}

/// Orders that are Pending or Cancelled.
pub fn attention_orders(records: &[OrderRecord]) -> Vec<OrderRecord> {
    records
        .iter()
        .filter(|r| ATTENTION_STATUSES.contains(&r.status.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(category: &str, region: &str, status: &str, revenue: f64) -> OrderRecord {
        OrderRecord {
            order_id: "1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            customer_id: None,
            customer_name: "Ada".to_string(),
            product: "Laptop".to_string(),
            category: category.to_string(),
            region: region.to_string(),
            quantity: 1.0,
            price: revenue,
            status: status.to_string(),
            revenue,
            month: 1,
            day_name: "Friday".to_string(),
        }
    }

    #[test]
    fn high_value_is_strictly_greater_than_threshold() {
        let records = vec![
            record("Electronics", "North", "Completed", 500.0),
            record("Electronics", "North", "Completed", 500.01),
        ];
        let out = high_value_orders(&records, 500.0);
        assert_eq!(out.len(), 1);
        assert!((out[0].revenue - 500.01).abs() < 1e-9);
    }

    #[test]
    fn electronics_in_north_requires_both_fields() {
        let records = vec![
            record("Electronics", "North", "Completed", 10.0),
            record("Electronics", "South", "Completed", 10.0),
            record("Furniture", "North", "Completed", 10.0),
            record("electronics", "North", "Completed", 10.0),
        ];
        let out = electronics_in_north(&records);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].category, "Electronics");
        assert_eq!(out[0].region, "North");
    }

    #[test]
    fn attention_orders_match_pending_and_cancelled_only() {
        let records = vec![
            record("A", "X", "Pending", 1.0),
            record("A", "X", "Cancelled", 1.0),
            record("A", "X", "Completed", 1.0),
        ];
        let out = attention_orders(&records);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].status, "Pending");
        assert_eq!(out[1].status, "Cancelled");
    }
}
