//! CSV ingest, schema validation, and raw-data profiling.
//!
//! This module turns the input sales CSV into typed [`OrderRow`]s and a
//! read-only [`DatasetProfile`] computed from the raw text records.
//!
//! Design goals:
//! - **Strict schema** for required columns (clear errors + exit code 2)
//! - **Fail fast** on malformed numbers (clear errors + exit code 3)
//! - **Deterministic behavior** (no locale or inference surprises)
//! - **Separation of concerns**: no cleaning or aggregation logic here

use std::collections::{HashMap, HashSet};
use std::fs::File;

use csv::StringRecord;

use crate::clean::parse_date;
use crate::domain::{OrderRow, REQUIRED_COLUMNS, ReportConfig};
use crate::error::AppError;

/// How many raw rows the profile keeps for the first-rows preview.
const PREVIEW_ROWS: usize = 5;

/// Inferred type of a raw CSV column, the way a dynamically-typed loader
/// would report it. Inference only informs diagnostics output; the typed
/// schema in [`OrderRow`] is what actually governs parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    Date,
    Text,
}

impl ColumnType {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Date => "date",
            ColumnType::Text => "text",
        }
    }
}

/// min/mean/max/std over the parseable values of a numeric column.
#[derive(Debug, Clone)]
pub struct NumericSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation (NaN when fewer than two values).
    pub std: f64,
}

/// Per-column diagnostics.
#[derive(Debug, Clone)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: ColumnType,
    /// Count of empty cells in this column.
    pub missing: usize,
    /// Present only for integer/float columns.
    pub numeric: Option<NumericSummary>,
}

/// Read-only diagnostics over the raw records, computed before cleaning.
#[derive(Debug, Clone)]
pub struct DatasetProfile {
    pub n_rows: usize,
    pub n_cols: usize,
    pub columns: Vec<ColumnProfile>,
    /// Rows identical to an earlier row (occurrences after the first).
    pub duplicate_rows: usize,
    /// First rows of the file, verbatim.
    pub preview: Vec<Vec<String>>,
}

/// Ingest output: typed rows + raw-data profile.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub rows: Vec<OrderRow>,
    pub profile: DatasetProfile,
    pub rows_read: usize,
}

/// Load the input CSV into typed order rows, validating the schema first.
pub fn load_orders(config: &ReportConfig) -> Result<IngestedData, AppError> {
    let file = File::open(&config.input_path).map_err(|e| {
        AppError::input(format!(
            "Failed to open CSV '{}': {e}",
            config.input_path.display()
        ))
    })?;
    read_orders(file)
}

/// Reader-based ingest entry point (testable without touching the filesystem).
pub fn read_orders<R: std::io::Read>(reader: R) -> Result<IngestedData, AppError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    ensure_required_columns_exist(&header_map)?;

    // Materialize raw records once: the profile wants the untyped text, and
    // row parsing wants the same records right after.
    let mut records = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        // +2 because records() starts after the header and CSV line numbers
        // are 1-based.
        let line = idx + 2;
        let record =
            result.map_err(|e| AppError::input(format!("CSV parse error on line {line}: {e}")))?;
        records.push(record);
    }

    if records.is_empty() {
        return Err(AppError::data("CSV contains a header but no data rows."));
    }

    let profile = profile_records(&headers, &records);

    let mut rows = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        let line = idx + 2;
        rows.push(parse_row(record, &header_map, line)?);
    }

    let rows_read = rows.len();
    Ok(IngestedData {
        rows,
        profile,
        rows_read,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header (e.g. "﻿order_id"). If we don't strip it, schema validation
    // will incorrectly report missing columns.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn ensure_required_columns_exist(header_map: &HashMap<String, usize>) -> Result<(), AppError> {
    for name in REQUIRED_COLUMNS {
        if !header_map.contains_key(name) {
            return Err(AppError::input(format!(
                "Missing required column: `{name}`"
            )));
        }
    }
    Ok(())
}

fn parse_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    line: usize,
) -> Result<OrderRow, AppError> {
    let order_id = get_text(record, header_map, "order_id");
    let date = get_text(record, header_map, "date");
    let customer_id = get_optional(record, header_map, "customer_id").map(str::to_string);
    let customer_name = get_text(record, header_map, "customer_name");
    let product = get_text(record, header_map, "product");
    let category = get_text(record, header_map, "category");
    let region = get_text(record, header_map, "region");
    let status = get_text(record, header_map, "status");

    let quantity = match get_optional(record, header_map, "quantity") {
        None => None,
        Some(s) => Some(parse_f64(s).map_err(|e| {
            AppError::data(format!("Invalid `quantity` on line {line}: {e}"))
        })?),
    };

    let price = match get_optional(record, header_map, "price") {
        None => {
            return Err(AppError::data(format!("Missing `price` value on line {line}.")));
        }
        Some(s) => parse_f64(s)
            .map_err(|e| AppError::data(format!("Invalid `price` on line {line}: {e}")))?,
    };

    Ok(OrderRow {
        line,
        order_id,
        date,
        customer_id,
        customer_name,
        product,
        category,
        region,
        quantity,
        price,
        status,
    })
}

fn profile_records(headers: &StringRecord, records: &[StringRecord]) -> DatasetProfile {
    let names: Vec<String> = headers
        .iter()
        .map(|h| h.trim().trim_start_matches('\u{feff}').to_string())
        .collect();

    let columns = names
        .iter()
        .enumerate()
        .map(|(col, name)| profile_column(name, col, records))
        .collect();

    let mut seen = HashSet::new();
    let mut duplicate_rows = 0usize;
    for record in records {
        // \x1f never occurs in field text, so the join is collision-free.
        let key = record.iter().collect::<Vec<_>>().join("\u{1f}");
        if !seen.insert(key) {
            duplicate_rows += 1;
        }
    }

    let preview = records
        .iter()
        .take(PREVIEW_ROWS)
        .map(|r| r.iter().map(str::to_string).collect())
        .collect();

    DatasetProfile {
        n_rows: records.len(),
        n_cols: names.len(),
        columns,
        duplicate_rows,
        preview,
    }
}

fn profile_column(name: &str, col: usize, records: &[StringRecord]) -> ColumnProfile {
    let mut missing = 0usize;
    let mut values: Vec<&str> = Vec::new();
    for record in records {
        match record.get(col).map(str::trim).filter(|s| !s.is_empty()) {
            Some(v) => values.push(v),
            None => missing += 1,
        }
    }

    let dtype = infer_column_type(&values);
    let numeric = match dtype {
        ColumnType::Integer | ColumnType::Float => {
            let parsed: Vec<f64> = values.iter().filter_map(|v| v.parse::<f64>().ok()).collect();
            summarize_numeric(&parsed)
        }
        _ => None,
    };

    ColumnProfile {
        name: name.to_string(),
        dtype,
        missing,
        numeric,
    }
}

fn infer_column_type(values: &[&str]) -> ColumnType {
    if values.is_empty() {
        return ColumnType::Text;
    }
    if values.iter().all(|v| v.parse::<i64>().is_ok()) {
        return ColumnType::Integer;
    }
    if values.iter().all(|v| v.parse::<f64>().is_ok()) {
        return ColumnType::Float;
    }
    if values.iter().all(|v| parse_date(v).is_ok()) {
        return ColumnType::Date;
    }
    ColumnType::Text
}

fn summarize_numeric(values: &[f64]) -> Option<NumericSummary> {
    if values.is_empty() {
        return None;
    }

    let n = values.len() as f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
        sum += v;
    }
    let mean = sum / n;

    let std = if values.len() < 2 {
        f64::NAN
    } else {
        let ss: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
        (ss / (n - 1.0)).sqrt()
    };

    Some(NumericSummary {
        min,
        max,
        mean,
        std,
    })
}

fn get_text(record: &StringRecord, header_map: &HashMap<String, usize>, name: &str) -> String {
    get_optional(record, header_map, name)
        .unwrap_or_default()
        .to_string()
}

fn get_optional<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Option<&'a str> {
    let idx = header_map.get(name)?;
    record.get(*idx).map(str::trim).filter(|s| !s.is_empty())
}

fn parse_f64(s: &str) -> Result<f64, String> {
    let v = s
        .parse::<f64>()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if !v.is_finite() {
        return Err(format!("'{s}' is not a finite number"));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CSV: &str = "\
order_id,date,customer_id,customer_name,product,category,region,quantity,price,status
1001,2024-01-05,C01,Ada,Laptop,Electronics,North,,999.5,Completed
1002,2024-01-06,C02,Grace,Desk,Furniture,South,2,150,Pending
1002,2024-01-06,C02,Grace,Desk,Furniture,South,2,150,Pending
";

    #[test]
    fn read_orders_parses_typed_rows() {
        let data = read_orders(Cursor::new(CSV)).unwrap();
        assert_eq!(data.rows_read, 3);

        let first = &data.rows[0];
        assert_eq!(first.line, 2);
        assert_eq!(first.order_id, "1001");
        assert_eq!(first.quantity, None);
        assert!((first.price - 999.5).abs() < 1e-12);
        assert_eq!(first.customer_id.as_deref(), Some("C01"));
    }

    #[test]
    fn missing_column_is_named_input_error() {
        let csv = "order_id,date\n1,2024-01-01\n";
        let err = read_orders(Cursor::new(csv)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("customer_id"));
    }

    #[test]
    fn header_only_file_is_a_data_error() {
        let csv = "order_id,date,customer_id,customer_name,product,category,region,quantity,price,status\n";
        let err = read_orders(Cursor::new(csv)).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn bad_price_reports_line_number() {
        let csv = "\
order_id,date,customer_id,customer_name,product,category,region,quantity,price,status
1001,2024-01-05,C01,Ada,Laptop,Electronics,North,1,abc,Completed
";
        let err = read_orders(Cursor::new(csv)).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn profile_counts_missing_and_duplicates() {
        let data = read_orders(Cursor::new(CSV)).unwrap();
        let profile = &data.profile;

        assert_eq!(profile.n_rows, 3);
        assert_eq!(profile.n_cols, 10);
        assert_eq!(profile.duplicate_rows, 1);

        let quantity = profile
            .columns
            .iter()
            .find(|c| c.name == "quantity")
            .unwrap();
        assert_eq!(quantity.missing, 1);
        assert_eq!(quantity.dtype, ColumnType::Integer);

        let date = profile.columns.iter().find(|c| c.name == "date").unwrap();
        assert_eq!(date.dtype, ColumnType::Date);
        assert_eq!(date.missing, 0);

        let status = profile.columns.iter().find(|c| c.name == "status").unwrap();
        assert_eq!(status.dtype, ColumnType::Text);
    }

    #[test]
    fn numeric_summary_matches_hand_computation() {
        let data = read_orders(Cursor::new(CSV)).unwrap();
        let price = data
            .profile
            .columns
            .iter()
            .find(|c| c.name == "price")
            .unwrap();
        let numeric = price.numeric.as_ref().unwrap();

        assert!((numeric.min - 150.0).abs() < 1e-9);
        assert!((numeric.max - 999.5).abs() < 1e-9);
        assert!((numeric.mean - (999.5 + 150.0 + 150.0) / 3.0).abs() < 1e-9);
        assert!(numeric.std.is_finite());
    }

    #[test]
    fn bom_on_first_header_is_stripped() {
        let csv = format!("\u{feff}{CSV}");
        let data = read_orders(Cursor::new(csv.as_bytes().to_vec())).unwrap();
        assert_eq!(data.rows_read, 3);
        assert_eq!(data.profile.columns[0].name, "order_id");
    }
}
