//! DNS resolver initialization.
//!
//! This module provides functions to initialize the system DNS resolver with
//! proper timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

use crate::error_handling::InitializationError;

/// Initializes the system DNS resolver used by `--resolver system`.
///
/// Reads `/etc/resolv.conf` (or the platform equivalent). If that fails the
/// resolver falls back to hickory's default upstreams.
///
/// Timeouts are configured so a single slow server cannot stall a check, and
/// the outer per-lookup timeout still applies on top.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the resolver cannot be
/// created.
pub fn init_resolver(timeout: Duration) -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = timeout;
    opts.attempts = 2; // Fewer retries to fail faster
    // Names are always passed fully qualified
    opts.ndots = 0;
    // Every check must observe live DNS state
    opts.cache_size = 0;

    debug!("DNS resolver configured with {} nameserver(s)", config.name_servers().len());

    if config.name_servers().is_empty() {
        return Err(InitializationError::DnsResolverError(
            "no nameservers configured".to_string(),
        ));
    }

    Ok(Arc::new(TokioAsyncResolver::tokio(config, opts)))
}
