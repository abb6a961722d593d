//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for initialization, deduplication and lookups
//! - Processing statistics tracking (errors, warnings, info metrics)
//!
//! Event types are categorized into:
//! - **Errors**: Failures that cause a domain to be skipped
//! - **Warnings**: Missing fields that don't prevent a record from being written
//! - **Info**: Notable events (non-2xx responses, proxy fallback)

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{DedupError, ErrorType, InfoType, InitializationError, LookupError, WarningType};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        for warning_type in WarningType::iter() {
            assert_eq!(stats.get_warning_count(warning_type), 0);
        }
        for info_type in InfoType::iter() {
            assert_eq!(stats.get_info_count(info_type), 0);
        }
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::PermitDecodeError);
        assert_eq!(stats.get_error_count(ErrorType::PermitDecodeError), 1);

        stats.increment_warning(WarningType::MissingCompanyName);
        assert_eq!(stats.get_warning_count(WarningType::MissingCompanyName), 1);

        stats.increment_info(InfoType::NonSuccessStatus);
        assert_eq!(stats.get_info_count(InfoType::NonSuccessStatus), 1);
    }

    #[test]
    fn test_processing_stats_totals() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::LookupRequestError);
        stats.increment_error(ErrorType::PermitDecodeError);
        stats.increment_warning(WarningType::MissingIcpPermit);
        stats.increment_info(InfoType::ProxyFallback);

        assert_eq!(stats.total_errors(), 2);
        assert_eq!(stats.total_warnings(), 1);
        assert_eq!(stats.total_info(), 1);
    }
}
