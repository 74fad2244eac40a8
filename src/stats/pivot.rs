//! Category × region revenue pivot.

use std::collections::BTreeSet;

use crate::domain::OrderRecord;

/// Two-dimensional revenue summary: one row per category, one column per
/// region, cells sum revenue, absent combinations hold 0.
#[derive(Debug, Clone)]
pub struct RevenuePivot {
    /// Row labels, ascending.
    pub categories: Vec<String>,
    /// Column labels, ascending.
    pub regions: Vec<String>,
    /// Row-major cells, aligned with `categories` × `regions`.
    pub cells: Vec<Vec<f64>>,
}

impl RevenuePivot {
    /// Cell lookup by label; `None` when either label is unknown.
    pub fn value(&self, category: &str, region: &str) -> Option<f64> {
        let row = self.categories.iter().position(|c| c == category)?;
        let col = self.regions.iter().position(|r| r == region)?;
        Some(self.cells[row][col])
    }
}

/// Build the revenue pivot over the cleaned record set.
pub fn revenue_pivot(records: &[OrderRecord]) -> RevenuePivot {
    let categories: Vec<String> = records
        .iter()
        .map(|r| r.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let regions: Vec<String> = records
        .iter()
        .map(|r| r.region.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut cells = vec![vec![0.0; regions.len()]; categories.len()];
    for r in records {
        // Both positions exist: the label sets were built from these records.
        let row = categories.iter().position(|c| *c == r.category).unwrap_or(0);
        let col = regions.iter().position(|g| *g == r.region).unwrap_or(0);
        cells[row][col] += r.revenue;
    }

    RevenuePivot {
        categories,
        regions,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(category: &str, region: &str, revenue: f64) -> OrderRecord {
        OrderRecord {
            order_id: "1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            customer_id: None,
            customer_name: "Ada".to_string(),
            product: "Pen".to_string(),
            category: category.to_string(),
            region: region.to_string(),
            quantity: 1.0,
            price: revenue,
            status: "Completed".to_string(),
            revenue,
            month: 1,
            day_name: "Friday".to_string(),
        }
    }

    #[test]
    fn cells_sum_revenue_and_missing_combinations_are_zero() {
        let records = vec![
            record("A", "X", 10.0),
            record("A", "Y", 10.0),
            record("B", "X", 7.0),
            record("A", "X", 2.5),
        ];
        let pivot = revenue_pivot(&records);

        assert_eq!(pivot.categories, vec!["A", "B"]);
        assert_eq!(pivot.regions, vec!["X", "Y"]);
        assert!((pivot.value("A", "X").unwrap() - 12.5).abs() < 1e-12);
        assert!((pivot.value("A", "Y").unwrap() - 10.0).abs() < 1e-12);
        assert!((pivot.value("B", "X").unwrap() - 7.0).abs() < 1e-12);
        // B never sold in Y, yet the combination is present and zero.
        assert!((pivot.value("B", "Y").unwrap() - 0.0).abs() < 1e-12);
    }

    #[test]
    fn every_combination_is_present() {
        let records = vec![
            record("A", "X", 1.0),
            record("B", "Y", 1.0),
            record("C", "Z", 1.0),
        ];
        let pivot = revenue_pivot(&records);
        assert_eq!(pivot.cells.len(), 3);
        assert!(pivot.cells.iter().all(|row| row.len() == 3));
    }
}
