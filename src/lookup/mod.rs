//! ICP registry lookups.
//!
//! A lookup is two requests against the registry site:
//! 1. `GET {base}/{domain}` returns an HTML page; company fields are pulled out
//!    of it with a fixed table of patterns (see [`extract`]).
//! 2. `POST {base}/index/api/queryPermit` with `{"keyword": domain}` returns the
//!    ICP permit number as JSON.
//!
//! Any transport or decode failure aborts the lookup of that domain only.
//! Missing page fields are not errors.

pub mod extract;
mod types;

use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use crate::config::{ICP_LOOKUP_BASE_URL, PERMIT_API_PATH};
use crate::error_handling::{InfoType, LookupError, ProcessingStats, WarningType};

pub use extract::{extract_fields, PageField};
pub use types::RegistrationInfo;
use types::{PermitQuery, PermitResponse};

/// Client for the ICP registry lookup site.
#[derive(Debug, Clone)]
pub struct IcpClient {
    client: reqwest::Client,
    base_url: String,
}

impl IcpClient {
    /// Creates a client for the public lookup site.
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, ICP_LOOKUP_BASE_URL)
    }

    /// Creates a client for a lookup site served from `base_url`.
    pub fn with_base_url(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// URL of the HTML lookup page for `domain`.
    pub fn page_url(&self, domain: &str) -> String {
        format!("{}/{}", self.base_url, domain)
    }

    /// URL of the permit query API.
    pub fn permit_url(&self) -> String {
        format!("{}{}", self.base_url, PERMIT_API_PATH)
    }

    /// Looks up registration details for `domain`.
    ///
    /// Missing page fields and an empty permit are recorded as warnings in
    /// `stats`; responses outside 2xx are logged, counted, and still parsed.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] naming the failing step if either request
    /// cannot be completed or the permit response is not valid JSON.
    pub async fn lookup(
        &self,
        domain: &str,
        stats: &ProcessingStats,
    ) -> Result<RegistrationInfo, LookupError> {
        let mut info = RegistrationInfo::new(domain);

        let page_url = self.page_url(domain);
        let response = self
            .client
            .get(&page_url)
            .send()
            .await
            .map_err(LookupError::Request)?;
        note_status(response.status(), &page_url, stats);
        let body = response.bytes().await.map_err(LookupError::Body)?;

        for field in extract_fields(&body, &mut info) {
            debug!("{}: no {:?} on lookup page", domain, field);
            stats.increment_warning(field.missing_warning());
        }

        info.icp_permit = self.query_permit(domain, stats).await?;
        if info.icp_permit.is_empty() {
            stats.increment_warning(WarningType::MissingIcpPermit);
        }

        Ok(info)
    }

    async fn query_permit(
        &self,
        domain: &str,
        stats: &ProcessingStats,
    ) -> Result<String, LookupError> {
        let payload = serde_json::to_vec(&PermitQuery { keyword: domain })
            .map_err(LookupError::PermitEncode)?;

        let permit_url = self.permit_url();
        let response = self
            .client
            .post(&permit_url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(LookupError::PermitRequest)?;
        note_status(response.status(), &permit_url, stats);
        let body = response.bytes().await.map_err(LookupError::PermitBody)?;

        let permit: PermitResponse =
            serde_json::from_slice(&body).map_err(LookupError::PermitDecode)?;
        debug!(
            "{}: permit API code={:?} msg={:?}",
            domain, permit.code, permit.msg
        );
        Ok(permit.data.unwrap_or_default())
    }
}

fn note_status(status: StatusCode, url: &str, stats: &ProcessingStats) {
    if !status.is_success() {
        warn!("{} answered {}; parsing the response anyway", url, status);
        stats.increment_info(InfoType::NonSuccessStatus);
    }
}
