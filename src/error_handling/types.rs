//! Error type definitions.
//!
//! This module defines the error types used throughout the checker.

use std::time::Duration;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use log::SetLoggerError;
use reqwest::Error as ReqwestError;
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

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// The only error a record check lets escape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The domain argument was empty.
    #[error("Domain is required")]
    InvalidInput,
}

/// Failure of a single TXT lookup.
///
/// Never crosses the record checker boundary: a failed lookup turns into a
/// `missing` record instead.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The HTTP request to the DNS-over-HTTPS endpoint failed.
    #[error("DNS-over-HTTPS request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// The lookup did not finish in time.
    #[error("TXT lookup timed out after {0:?}")]
    Timeout(Duration),

    /// The resolver answered with a failure response code.
    #[error("resolver returned DNS status {0}")]
    Status(u32),

    /// The response body could not be decoded.
    #[error("malformed resolver response: {0}")]
    Decode(String),

    /// The system resolver failed.
    #[error("DNS resolution failed: {0}")]
    Resolve(#[from] ResolveError),
}

impl LookupError {
    /// Whether the failure was a timeout, as opposed to an error response.
    pub fn is_timeout(&self) -> bool {
        match self {
            LookupError::Timeout(_) => true,
            LookupError::Transport(e) => e.is_timeout(),
            LookupError::Resolve(e) => matches!(e.kind(), ResolveErrorKind::Timeout),
            _ => false,
        }
    }
}
