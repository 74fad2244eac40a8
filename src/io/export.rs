//! Export of the cleaned record set and the category revenue summary.
//!
//! Two files, both CSV, both easy to consume in spreadsheets or downstream
//! scripts (the chart renderer reads the cleaned-records file). Nothing else
//! is persisted; every other aggregation lives only in console output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::OrderRecord;
use crate::error::AppError;
use crate::stats::CategoryRevenue;

/// File name of the cleaned-records export.
pub const CLEANED_FILE: &str = "sales_data_cleaned.csv";
/// File name of the category revenue export.
pub const CATEGORY_FILE: &str = "revenue_by_category.csv";

/// Write all cleaned records to `<output_dir>/sales_data_cleaned.csv`.
///
/// Columns are the input columns plus revenue, month and day_name, one row
/// per input row, in input order.
pub fn write_cleaned_csv(output_dir: &Path, records: &[OrderRecord]) -> Result<PathBuf, AppError> {
    let path = prepare_output_path(output_dir, CLEANED_FILE)?;
    let file = fs::File::create(&path)
        .map_err(|e| AppError::output(format!("Failed to create '{}': {e}", path.display())))?;
    write_cleaned_to(file, records)
        .map_err(|e| AppError::output(format!("Failed to write '{}': {e}", path.display())))?;
    Ok(path)
}

/// Write the category revenue summary to `<output_dir>/revenue_by_category.csv`,
/// one row per distinct category, descending by revenue.
pub fn write_category_revenue_csv(
    output_dir: &Path,
    rows: &[CategoryRevenue],
) -> Result<PathBuf, AppError> {
    let path = prepare_output_path(output_dir, CATEGORY_FILE)?;
    let file = fs::File::create(&path)
        .map_err(|e| AppError::output(format!("Failed to create '{}': {e}", path.display())))?;
    write_category_revenue_to(file, rows)
        .map_err(|e| AppError::output(format!("Failed to write '{}': {e}", path.display())))?;
    Ok(path)
}

/// Serialize cleaned records into any writer (testable without a filesystem).
pub fn write_cleaned_to<W: std::io::Write>(
    writer: W,
    records: &[OrderRecord],
) -> Result<(), String> {
    let mut w = csv::Writer::from_writer(writer);
    for record in records {
        w.serialize(record).map_err(|e| e.to_string())?;
    }
    w.flush().map_err(|e| e.to_string())
}

/// Serialize the category summary into any writer.
pub fn write_category_revenue_to<W: std::io::Write>(
    writer: W,
    rows: &[CategoryRevenue],
) -> Result<(), String> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(["category", "revenue"])
        .map_err(|e| e.to_string())?;
    for row in rows {
        w.write_record([row.category.as_str(), &row.revenue.to_string()])
            .map_err(|e| e.to_string())?;
    }
    w.flush().map_err(|e| e.to_string())
}

fn prepare_output_path(output_dir: &Path, file_name: &str) -> Result<PathBuf, AppError> {
    fs::create_dir_all(output_dir).map_err(|e| {
        AppError::output(format!(
            "Failed to create output directory '{}': {e}",
            output_dir.display()
        ))
    })?;
    Ok(output_dir.join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> OrderRecord {
        OrderRecord {
            order_id: "1001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            customer_id: Some("C01".to_string()),
            customer_name: "Ada".to_string(),
            product: "Laptop".to_string(),
            category: "Electronics".to_string(),
            region: "North".to_string(),
            quantity: 1.0,
            price: 999.5,
            status: "Completed".to_string(),
            revenue: 999.5,
            month: 1,
            day_name: "Friday".to_string(),
        }
    }

    #[test]
    fn cleaned_export_has_input_columns_then_derived_columns() {
        let mut buf = Vec::new();
        write_cleaned_to(&mut buf, &[record()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "order_id,date,customer_id,customer_name,product,category,region,quantity,price,status,revenue,month,day_name"
        );
        assert_eq!(
            lines.next().unwrap(),
            "1001,2024-01-05,C01,Ada,Laptop,Electronics,North,1.0,999.5,Completed,999.5,1,Friday"
        );
    }

    #[test]
    fn absent_customer_id_exports_as_empty_field() {
        let mut row = record();
        row.customer_id = None;

        let mut buf = Vec::new();
        write_cleaned_to(&mut buf, &[row]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.lines().nth(1).unwrap().starts_with("1001,2024-01-05,,Ada,"));
    }

    #[test]
    fn exports_are_byte_identical_across_runs() {
        let records = [record()];
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_cleaned_to(&mut first, &records).unwrap();
        write_cleaned_to(&mut second, &records).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn category_export_is_two_columns() {
        let rows = vec![
            CategoryRevenue {
                category: "Electronics".to_string(),
                revenue: 1500.0,
            },
            CategoryRevenue {
                category: "Stationery".to_string(),
                revenue: 20.5,
            },
        ];

        let mut buf = Vec::new();
        write_category_revenue_to(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines, vec!["category,revenue", "Electronics,1500", "Stationery,20.5"]);
    }
}
