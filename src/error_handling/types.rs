//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors raised while rewriting the domains file without duplicates.
///
/// Every variant aborts the whole run; the input file is left untouched unless
/// the final persist step was reached.
#[derive(Error, Debug)]
pub enum DedupError {
    /// The domains file could not be opened.
    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A line could not be read from the domains file.
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The temporary file could not be created or written.
    #[error("failed to write temporary file next to {}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The temporary file could not be moved over the domains file.
    #[error("failed to replace {}", .path.display())]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that abort the lookup of a single domain.
///
/// Each variant names the step that failed. The driver logs the error and moves
/// on to the next domain.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The GET request for the domain page could not be sent.
    #[error("HTTP GET error")]
    Request(#[source] ReqwestError),

    /// The domain page body could not be read.
    #[error("read body error")]
    Body(#[source] ReqwestError),

    /// The permit query body could not be serialized.
    #[error("permit request encode error")]
    PermitEncode(#[source] serde_json::Error),

    /// The permit POST request could not be sent.
    #[error("permit request error")]
    PermitRequest(#[source] ReqwestError),

    /// The permit response body could not be read.
    #[error("permit response read error")]
    PermitBody(#[source] ReqwestError),

    /// The permit response was not the expected JSON document.
    #[error("permit response decode error")]
    PermitDecode(#[source] serde_json::Error),
}

impl LookupError {
    /// Category used for end-of-run statistics.
    pub fn error_type(&self) -> ErrorType {
        match self {
            LookupError::Request(_) => ErrorType::LookupRequestError,
            LookupError::Body(_) => ErrorType::LookupBodyError,
            LookupError::PermitEncode(_) => ErrorType::PermitEncodeError,
            LookupError::PermitRequest(_) => ErrorType::PermitRequestError,
            LookupError::PermitBody(_) => ErrorType::PermitBodyError,
            LookupError::PermitDecode(_) => ErrorType::PermitDecodeError,
        }
    }
}

/// Types of errors that can occur while looking up a domain.
///
/// Every error type causes the domain to be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    LookupRequestError,
    LookupBodyError,
    PermitEncodeError,
    PermitRequestError,
    PermitBodyError,
    PermitDecodeError,
}

/// Types of warnings that can occur while looking up a domain.
///
/// Warnings indicate a field that could not be extracted; the record is still
/// written with an empty string in its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants start with "Missing"
pub enum WarningType {
    MissingCompanyName,
    MissingCompanyType,
    MissingRegisteredCapital,
    MissingRegistrationTime,
    MissingRegisteredAddress,
    MissingIcpPermit,
}

/// Types of informational metrics that can occur during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    NonSuccessStatus, // Lookup site answered outside 2xx (response still used)
    ProxyFallback,    // Proxy URL was malformed, requests go direct
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::LookupRequestError => "Lookup page request error",
            ErrorType::LookupBodyError => "Lookup page body error",
            ErrorType::PermitEncodeError => "Permit request encode error",
            ErrorType::PermitRequestError => "Permit request error",
            ErrorType::PermitBodyError => "Permit response body error",
            ErrorType::PermitDecodeError => "Permit response decode error",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingCompanyName => "Missing company name",
            WarningType::MissingCompanyType => "Missing company type",
            WarningType::MissingRegisteredCapital => "Missing registered capital",
            WarningType::MissingRegistrationTime => "Missing registration time",
            WarningType::MissingRegisteredAddress => "Missing registered address",
            WarningType::MissingIcpPermit => "Missing ICP permit",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::NonSuccessStatus => "Non-2xx response",
            InfoType::ProxyFallback => "Proxy ignored (malformed URL)",
        }
    }
}
