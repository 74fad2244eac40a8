//! `sales-insights` library crate.
//!
//! The binary (`sales`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., future notebooks or a reporting daemon)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod clean;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod report;
pub mod stats;
