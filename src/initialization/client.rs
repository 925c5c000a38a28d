//! HTTP client initialization.
//!
//! This module provides the shared HTTP client for DNS-over-HTTPS queries.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used by `DohResolver`.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Request timeout matching the per-lookup timeout
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
