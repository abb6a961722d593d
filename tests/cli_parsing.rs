//! Tests for command-line parsing of the lookup options.

use clap::Parser;
use icp_lookup::config::{DEFAULT_OUTPUT_PATH, DEFAULT_USER_AGENT, ICP_LOOKUP_BASE_URL};
use icp_lookup::{Config, LogFormat, LogLevel};
use std::path::PathBuf;

#[test]
fn test_cli_minimal_invocation() {
    let config =
        Config::try_parse_from(["icp_lookup", "-f", "domains.txt"]).expect("Should parse -f");

    assert_eq!(config.file, PathBuf::from("domains.txt"));
    assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
    assert!(config.proxy.is_none());
    assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    assert!(config.timeout_seconds.is_none());
    assert_eq!(config.base_url, ICP_LOOKUP_BASE_URL);
}

#[test]
fn test_cli_long_flags() {
    let config = Config::try_parse_from([
        "icp_lookup",
        "--file",
        "in.txt",
        "--output",
        "out.jsonl",
        "--proxy",
        "socks5://127.0.0.1:1080",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--timeout-seconds",
        "15",
    ])
    .expect("Should parse long flags");

    assert_eq!(config.file, PathBuf::from("in.txt"));
    assert_eq!(config.output, PathBuf::from("out.jsonl"));
    assert_eq!(config.proxy.as_deref(), Some("socks5://127.0.0.1:1080"));
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::from(LogLevel::Debug)
    );
    assert!(matches!(config.log_format, LogFormat::Json));
    assert_eq!(config.timeout_seconds, Some(15));
}

#[test]
fn test_cli_rejects_unknown_log_level() {
    let result = Config::try_parse_from(["icp_lookup", "-f", "d.txt", "--log-level", "loud"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_base_url_is_not_a_flag() {
    let result = Config::try_parse_from([
        "icp_lookup",
        "-f",
        "d.txt",
        "--base-url",
        "http://localhost",
    ]);
    assert!(result.is_err());
}
