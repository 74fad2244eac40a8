//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the input schema (`REQUIRED_COLUMNS`, `OrderRow`)
//! - cleaned, enriched records (`OrderRecord`)
//! - run configuration (`ReportConfig`)

pub mod types;

pub use types::*;
