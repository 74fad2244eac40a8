//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the load → clean → aggregate pipeline
//! - prints the report sections
//! - writes the two exports

use clap::Parser;

use crate::cli::{Command, ReportArgs};
use crate::domain::ReportConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `sales` binary.
pub fn run() -> Result<(), AppError> {
    // We want `sales --input data.csv` to behave like `sales report --input data.csv`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the shorter invocation.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Report(args) => handle_report(args),
        Command::Inspect(args) => handle_inspect(args),
    }
}

fn handle_report(args: ReportArgs) -> Result<(), AppError> {
    let config = report_config_from_args(&args);
    let run = pipeline::run_report(&config)?;

    println!(
        "{}",
        crate::report::format_profile(&config.input_path, &run.ingest.profile)
    );
    println!("{}", crate::report::format_cleaning(&run.cleaned.summary));
    println!("{}", crate::report::format_summary(&run.aggregates));
    println!(
        "{}",
        crate::report::format_filters(&run.aggregates, config.high_value_threshold)
    );
    println!("{}", crate::report::format_pivot(&run.aggregates.pivot));
    println!(
        "{}",
        crate::report::format_correlation(&run.aggregates.correlation)
    );

    let cleaned_path =
        crate::io::export::write_cleaned_csv(&config.output_dir, &run.cleaned.records)?;
    println!("Cleaned records saved to: {}", cleaned_path.display());

    let category_path = crate::io::export::write_category_revenue_csv(
        &config.output_dir,
        &run.aggregates.revenue_by_category,
    )?;
    println!("Category summary saved to: {}", category_path.display());

    Ok(())
}

fn handle_inspect(args: ReportArgs) -> Result<(), AppError> {
    let config = report_config_from_args(&args);
    let ingest = crate::io::ingest::load_orders(&config)?;
    println!(
        "{}",
        crate::report::format_profile(&config.input_path, &ingest.profile)
    );
    Ok(())
}

pub fn report_config_from_args(args: &ReportArgs) -> ReportConfig {
    ReportConfig {
        input_path: args.input.clone(),
        output_dir: args.output_dir.clone(),
        top_n: args.top,
        high_value_threshold: args.high_value,
    }
}

/// Rewrite argv so `sales` defaults to `sales report`.
///
/// Rules:
/// - `sales`                     -> `sales report`
/// - `sales --input x.csv ...`   -> `sales report --input x.csv ...`
/// - `sales --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("report".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "report" | "inspect");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "report flags".
    if arg1.starts_with('-') {
        argv.insert(1, "report".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
