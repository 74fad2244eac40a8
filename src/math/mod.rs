//! Mathematical utilities: Pearson correlation.

pub mod corr;

pub use corr::*;
