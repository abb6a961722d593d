//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `icp_lookup` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::process;

use icp_lookup::initialization::init_logger_with;
use icp_lookup::{run_lookup, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // No arguments at all: show usage instead of a missing-flag error
    if std::env::args_os().len() <= 1 {
        Config::command()
            .print_help()
            .context("Failed to print usage")?;
        println!();
        return Ok(());
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_lookup(config).await {
        Ok(report) => {
            println!(
                "Processed {} domain{} ({} saved, {} skipped) in {:.1}s",
                report.total_domains,
                if report.total_domains == 1 { "" } else { "s" },
                report.successful,
                report.failed,
                report.elapsed_seconds
            );
            println!("Data saved to {}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("icp_lookup error: {:#}", e);
            process::exit(1);
        }
    }
}
