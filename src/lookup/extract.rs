//! Field extraction from the domain lookup page.
//!
//! The page renders registration details as a two-column table keyed by a
//! Chinese label. Each field has its own pattern and is matched independently,
//! so a missing row only blanks that one field.

use regex::bytes::Regex;
use std::sync::LazyLock;
use strum_macros::EnumIter;

use crate::error_handling::WarningType;
use crate::lookup::types::RegistrationInfo;

/// A field extracted from the lookup page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PageField {
    CompanyName,
    CompanyType,
    RegisteredCapital,
    RegistrationTime,
    RegisteredAddress,
}

impl PageField {
    /// Regular expression whose first capture group holds the field value.
    pub fn pattern(self) -> &'static str {
        match self {
            PageField::CompanyName => r"企业名称</td>\s*<td[^>]*>([^<]+)</td>",
            PageField::CompanyType => r"公司类型</td>\s*<td[^>]*>([^<]+)</td>",
            PageField::RegisteredCapital => r"注册资本</td>\s*<td[^>]*>([^<]+)</td>",
            PageField::RegistrationTime => r"注册时间</td>\s*<td[^>]*>([^<]+)</td>",
            // The address cell wraps its value in a <div>
            PageField::RegisteredAddress => {
                r"注册地址</td>\s*<td[^>]*>\s*<div[^>]*>([^<]+)</div>"
            }
        }
    }

    /// Warning recorded when the field is absent from the page.
    pub fn missing_warning(self) -> WarningType {
        match self {
            PageField::CompanyName => WarningType::MissingCompanyName,
            PageField::CompanyType => WarningType::MissingCompanyType,
            PageField::RegisteredCapital => WarningType::MissingRegisteredCapital,
            PageField::RegistrationTime => WarningType::MissingRegistrationTime,
            PageField::RegisteredAddress => WarningType::MissingRegisteredAddress,
        }
    }

    fn slot(self, info: &mut RegistrationInfo) -> &mut String {
        match self {
            PageField::CompanyName => &mut info.company_name,
            PageField::CompanyType => &mut info.company_type,
            PageField::RegisteredCapital => &mut info.registered_capital,
            PageField::RegistrationTime => &mut info.registration_time,
            PageField::RegisteredAddress => &mut info.registered_address,
        }
    }
}

/// Helper function to compile a static regex pattern, panicking with a detailed
/// error message if compilation fails.
fn compile_regex_unsafe(pattern: &str, context: PageField) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' for {:?}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static FIELD_PATTERNS: LazyLock<Vec<(PageField, Regex)>> = LazyLock::new(|| {
    use strum::IntoEnumIterator;
    PageField::iter()
        .map(|field| (field, compile_regex_unsafe(field.pattern(), field)))
        .collect()
});

/// Fills the page fields of `info` from the raw page body.
///
/// Matching runs on bytes, so a body that is not valid UTF-8 still yields the
/// fields that are. Captured values are kept verbatim (lossily decoded).
///
/// Returns the fields that were not found; those stay empty in `info`.
pub fn extract_fields(body: &[u8], info: &mut RegistrationInfo) -> Vec<PageField> {
    let mut missing = Vec::new();
    for (field, regex) in FIELD_PATTERNS.iter() {
        match regex.captures(body).and_then(|caps| caps.get(1)) {
            Some(value) => {
                *field.slot(info) = String::from_utf8_lossy(value.as_bytes()).into_owned();
            }
            None => missing.push(*field),
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAGE: &str = r#"<table class="info">
<tr><td class="label">企业名称</td>
    <td class="value">示例科技有限公司</td></tr>
<tr><td>公司类型</td><td>有限责任公司</td></tr>
<tr><td>注册资本</td>
<td class="z">1000万人民币</td></tr>
<tr><td>注册时间</td><td>2015-06-01</td></tr>
<tr><td>注册地址</td><td class="addr">
    <div class="ellipsis">北京市海淀区中关村大街1号</div></td></tr>
</table>"#;

    #[test]
    fn test_extract_all_fields() {
        let mut info = RegistrationInfo::new("example.cn");
        let missing = extract_fields(FULL_PAGE.as_bytes(), &mut info);

        assert!(missing.is_empty(), "unexpected missing: {:?}", missing);
        assert_eq!(info.company_name, "示例科技有限公司");
        assert_eq!(info.company_type, "有限责任公司");
        assert_eq!(info.registered_capital, "1000万人民币");
        assert_eq!(info.registration_time, "2015-06-01");
        assert_eq!(info.registered_address, "北京市海淀区中关村大街1号");
        assert_eq!(info.domain, "example.cn");
        assert!(info.icp_permit.is_empty());
    }

    #[test]
    fn test_missing_field_leaves_others() {
        let page = FULL_PAGE.replace("<tr><td>公司类型</td><td>有限责任公司</td></tr>", "");
        let mut info = RegistrationInfo::new("example.cn");

        let missing = extract_fields(page.as_bytes(), &mut info);

        assert_eq!(missing, vec![PageField::CompanyType]);
        assert_eq!(info.company_type, "");
        assert_eq!(info.company_name, "示例科技有限公司");
        assert_eq!(info.registered_capital, "1000万人民币");
        assert_eq!(info.registration_time, "2015-06-01");
        assert_eq!(info.registered_address, "北京市海淀区中关村大街1号");
    }

    #[test]
    fn test_address_requires_div() {
        let page = "<td>注册地址</td><td>北京市</td>";
        let mut info = RegistrationInfo::default();

        let missing = extract_fields(page.as_bytes(), &mut info);

        assert!(missing.contains(&PageField::RegisteredAddress));
        assert_eq!(info.registered_address, "");
    }

    #[test]
    fn test_first_match_wins() {
        let page = "<td>注册时间</td><td>2001-01-01</td><td>注册时间</td><td>2002-02-02</td>";
        let mut info = RegistrationInfo::default();

        extract_fields(page.as_bytes(), &mut info);

        assert_eq!(info.registration_time, "2001-01-01");
    }

    #[test]
    fn test_empty_body_misses_everything() {
        let mut info = RegistrationInfo::default();
        let missing = extract_fields(b"", &mut info);
        assert_eq!(missing.len(), 5);
        assert_eq!(info, RegistrationInfo::default());
    }

    #[test]
    fn test_invalid_utf8_elsewhere_in_body() {
        let mut body = vec![0xff, 0xfe, b'\n'];
        body.extend_from_slice("<td>企业名称</td><td>某公司</td>".as_bytes());
        let mut info = RegistrationInfo::default();

        extract_fields(&body, &mut info);

        assert_eq!(info.company_name, "某公司");
    }

    #[test]
    fn test_missing_warning_mapping() {
        use strum::IntoEnumIterator;
        let warnings: Vec<WarningType> = PageField::iter().map(|f| f.missing_warning()).collect();
        assert_eq!(warnings.len(), 5);
        assert!(!warnings.contains(&WarningType::MissingIcpPermit));
    }
}
