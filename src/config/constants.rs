//! Configuration constants.
//!
//! Endpoints of the registry lookup site and the defaults used by the CLI.

/// Base URL of the ICP registry lookup site.
///
/// The domain page lives at `{base}/{domain}` and the permit API at
/// `{base}{PERMIT_API_PATH}`.
pub const ICP_LOOKUP_BASE_URL: &str = "https://icp.chinaz.com";

/// Path of the JSON permit query endpoint, relative to the lookup base URL.
pub const PERMIT_API_PATH: &str = "/index/api/queryPermit";

/// Default output file for JSON Lines results.
pub const DEFAULT_OUTPUT_PATH: &str = "output.json";

/// Default User-Agent string for HTTP requests.
///
/// The lookup site serves a reduced page to obvious non-browser clients, so a
/// desktop Chrome string is sent unless `--user-agent` overrides it.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Indentation used for records printed to the console.
pub const PRETTY_JSON_INDENT: &[u8] = b"    ";

/// Number of processed domains between progress log lines.
pub const PROGRESS_LOG_INTERVAL: usize = 50;
