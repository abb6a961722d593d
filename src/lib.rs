//! icp_lookup library: ICP registration lookups for lists of domains
//!
//! Reads a file of domains, rewrites it without blank or duplicate lines, looks
//! up each domain on the ICP registry site, and writes one JSON object per
//! domain to a JSON Lines file.
//!
//! # Example
//!
//! ```no_run
//! use icp_lookup::{Config, run_lookup};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("domains.txt"),
//!     output: std::path::PathBuf::from("results.jsonl"),
//!     ..Default::default()
//! };
//!
//! let report = run_lookup(config).await?;
//! println!("Saved {} of {} domains", report.successful, report.total_domains);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Domains are processed one at a time.

mod app;
pub mod config;
mod dedup;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod lookup;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use dedup::{deduplicate_file, DedupSummary};
pub use error_handling::{
    DedupError, ErrorType, InfoType, InitializationError, LookupError, ProcessingStats, WarningType,
};
pub use lookup::{IcpClient, RegistrationInfo};
pub use run::{run_lookup, LookupReport};

// Internal run module (contains the main lookup loop)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{info, warn};
    use tokio::io::{AsyncBufReadExt, BufReader};

    use crate::app::{log_progress, print_error_statistics};
    use crate::config::{Config, PROGRESS_LOG_INTERVAL};
    use crate::dedup::deduplicate_file;
    use crate::error_handling::{InfoType, ProcessingStats};
    use crate::export::{to_pretty_json, JsonlWriter};
    use crate::initialization::init_client;
    use crate::lookup::IcpClient;

    /// Results of a lookup run.
    #[derive(Debug, Clone)]
    pub struct LookupReport {
        /// Domains read from the deduplicated input file
        pub total_domains: usize,
        /// Domains written to the output file
        pub successful: usize,
        /// Domains skipped after an error
        pub failed: usize,
        /// Path to the JSON Lines output file
        pub output_path: PathBuf,
        /// Elapsed time of the lookup loop in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the lookups described by `config`.
    ///
    /// The input file is deduplicated in place before anything is fetched. Each
    /// remaining line is then looked up in order; a successful record is
    /// printed to stdout as indented JSON and appended to the output file as a
    /// single line. A domain whose lookup fails is logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error, ending the run, if:
    /// - The input file cannot be deduplicated, opened, or read
    /// - The output file cannot be created or written
    /// - The HTTP client cannot be built
    pub async fn run_lookup(config: Config) -> Result<LookupReport> {
        let input_path = config.file.clone();
        let summary = tokio::task::spawn_blocking(move || deduplicate_file(&input_path))
            .await
            .context("Deduplication task failed")?
            .context("Failed to remove duplicate domains")?;
        info!(
            "Removed {} blank or duplicate line{} from {} ({} domains left)",
            summary.removed,
            if summary.removed == 1 { "" } else { "s" },
            config.file.display(),
            summary.kept
        );

        let stats = ProcessingStats::new();
        let setup = init_client(&config).context("Failed to initialize HTTP client")?;
        if setup.proxy_ignored {
            stats.increment_info(InfoType::ProxyFallback);
        }
        let icp = IcpClient::with_base_url(setup.client, config.base_url.clone());

        let domains_file = tokio::fs::File::open(&config.file)
            .await
            .context("Failed to open the domains file")?;
        let mut lines = BufReader::new(domains_file).lines();

        let mut writer = JsonlWriter::create(&config.output).with_context(|| {
            format!(
                "Failed to create the output file: {}",
                config.output.display()
            )
        })?;

        let start_time = Instant::now();
        let mut failed = 0usize;

        while let Some(domain) = lines
            .next_line()
            .await
            .context("Failed to read the domains file")?
        {
            match icp.lookup(&domain, &stats).await {
                Ok(record) => match to_pretty_json(&record) {
                    Ok(pretty) => {
                        println!("{}", pretty);
                        writer
                            .write_record(&record)
                            .context("Failed to write to output file")?;
                    }
                    Err(e) => {
                        warn!("JSON marshaling error for domain {}: {}", domain, e);
                        failed += 1;
                    }
                },
                Err(e) => {
                    stats.increment_error(e.error_type());
                    warn!(
                        "Error extracting information for domain {}: {:#}",
                        domain,
                        anyhow::Error::from(e)
                    );
                    failed += 1;
                }
            }

            let processed = writer.records() + failed;
            if processed % PROGRESS_LOG_INTERVAL == 0 {
                log_progress(start_time, writer.records(), failed);
            }
        }

        let successful = writer
            .finish()
            .context("Failed to write to output file")?;
        let elapsed_seconds = start_time.elapsed().as_secs_f64();

        log_progress(start_time, successful, failed);
        print_error_statistics(&stats);

        Ok(LookupReport {
            total_domains: successful + failed,
            successful,
            failed,
            output_path: config.output,
            elapsed_seconds,
        })
    }
}
