//! Input/output helpers.
//!
//! - CSV ingest + schema validation + raw-data profiling (`ingest`)
//! - derived CSV exports (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
