//! HTTP client initialization.
//!
//! Builds the single `reqwest::Client` used for every lookup, optionally routed
//! through a user-supplied proxy.

use std::time::Duration;

use log::{debug, warn};
use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// HTTP client plus what happened to the requested proxy.
#[derive(Debug, Clone)]
pub struct ClientSetup {
    pub client: reqwest::Client,
    /// True when a proxy was requested but its URL could not be used
    pub proxy_ignored: bool,
}

/// Initializes the HTTP client.
///
/// The client carries the configured User-Agent and, when
/// `timeout_seconds` is set, a per-request timeout. Without it requests use the
/// library defaults and may block for as long as the network does.
///
/// When `config.proxy` is set, all requests (HTTP and HTTPS) are routed
/// through it. A proxy URL that cannot be parsed is logged and ignored; the
/// client then connects directly.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the client cannot be built.
pub fn init_client(config: &Config) -> Result<ClientSetup, InitializationError> {
    let mut builder = ClientBuilder::new().user_agent(config.user_agent.clone());
    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    let mut proxy_ignored = false;
    match config.proxy.as_deref().map(str::trim) {
        None | Some("") => {}
        Some(proxy_url) => match parse_proxy(proxy_url) {
            Some(proxy) => {
                debug!("Routing requests through proxy {}", proxy_url);
                builder = builder.proxy(proxy);
            }
            None => {
                warn!(
                    "Ignoring malformed proxy URL {:?}; connecting directly",
                    proxy_url
                );
                proxy_ignored = true;
            }
        },
    }

    let client = builder.build()?;
    Ok(ClientSetup {
        client,
        proxy_ignored,
    })
}

fn parse_proxy(proxy_url: &str) -> Option<reqwest::Proxy> {
    let url = url::Url::parse(proxy_url).ok()?;
    if !url.has_host() {
        return None;
    }
    reqwest::Proxy::all(url).ok()
}
