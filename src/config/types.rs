//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_OUTPUT_PATH, DEFAULT_USER_AGENT, ICP_LOOKUP_BASE_URL};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and library configuration.
///
/// The same struct is parsed by `clap` in the binary and built directly (usually
/// via `Default`) when the library is driven programmatically.
///
/// # Examples
///
/// ```bash
/// # Look up every domain in domains.txt, writing results to output.json
/// icp_lookup -f domains.txt
///
/// # Custom output file, routed through a local proxy
/// icp_lookup -f domains.txt -o results.jsonl -p http://127.0.0.1:8080
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "icp_lookup",
    version,
    about = "Looks up ICP registration and company details for a list of domains."
)]
pub struct Config {
    /// Path to the file containing the list of domains (rewritten in place without duplicates)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: PathBuf,

    /// Output file to write the JSON Lines data to
    #[arg(short = 'o', long = "output", value_name = "FILE", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Proxy server for all outbound requests (e.g. http://127.0.0.1:8080, socks5://host:1080)
    #[arg(short = 'p', long = "proxy", value_name = "URL")]
    pub proxy: Option<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Base URL of the lookup site. Not exposed on the command line.
    #[arg(skip = ICP_LOOKUP_BASE_URL.to_string())]
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("domains.txt"),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            proxy: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: None,
            base_url: ICP_LOOKUP_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.output, PathBuf::from("output.json"));
        assert!(config.proxy.is_none());
        assert!(config.timeout_seconds.is_none());
        assert_eq!(config.base_url, "https://icp.chinaz.com");
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_parse_short_flags() {
        let config = Config::try_parse_from([
            "icp_lookup",
            "-f",
            "domains.txt",
            "-o",
            "out.jsonl",
            "-p",
            "http://127.0.0.1:8080",
        ])
        .expect("short flags should parse");

        assert_eq!(config.file, PathBuf::from("domains.txt"));
        assert_eq!(config.output, PathBuf::from("out.jsonl"));
        assert_eq!(config.proxy.as_deref(), Some("http://127.0.0.1:8080"));
        // Not settable from the command line
        assert_eq!(config.base_url, ICP_LOOKUP_BASE_URL);
    }

    #[test]
    fn test_parse_defaults() {
        let config = Config::try_parse_from(["icp_lookup", "-f", "domains.txt"])
            .expect("file flag alone should parse");

        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert!(config.proxy.is_none());
        assert!(matches!(config.log_format, LogFormat::Plain));
        assert_eq!(
            log::LevelFilter::from(config.log_level),
            log::LevelFilter::Info
        );
    }

    #[test]
    fn test_file_flag_is_required() {
        let result = Config::try_parse_from(["icp_lookup", "-o", "out.json"]);
        assert!(result.is_err());
    }
}
