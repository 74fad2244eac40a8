//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the aggregation code stays clean and testable
//! - output changes are localized (console text is not a stable contract)

pub mod format;

pub use format::*;
