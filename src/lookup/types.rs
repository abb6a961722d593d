//! Record and wire types for ICP lookups.

use serde::{Deserialize, Serialize};

/// Registration details collected for one domain.
///
/// Field order is the order of keys in the JSON output. Every extracted field
/// is an empty string when the lookup site did not provide it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInfo {
    /// The domain exactly as read from the input file
    pub domain: String,
    pub company_name: String,
    pub company_type: String,
    pub registered_capital: String,
    pub registration_time: String,
    pub registered_address: String,
    /// ICP permit number returned by the permit API
    pub icp_permit: String,
}

impl RegistrationInfo {
    /// Creates an empty record for `domain`.
    pub fn new(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            ..Default::default()
        }
    }
}

/// Body of the permit query POST.
#[derive(Debug, Serialize)]
pub(crate) struct PermitQuery<'a> {
    pub keyword: &'a str,
}

/// Response of the permit query API: `{"code": int, "data": string, "msg": string}`.
///
/// Missing or `null` members are tolerated; any other shape is a decode error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct PermitResponse {
    pub code: Option<i64>,
    pub data: Option<String>,
    pub msg: Option<String>,
}
