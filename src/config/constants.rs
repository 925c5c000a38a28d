//! Configuration constants.
//!
//! This module defines the constants used throughout the checker, including
//! timeouts, resolver endpoints, record markers, and input limits.

// Network operation timeouts
/// DNS query timeout in seconds, applied to each TXT lookup independently.
/// A lookup that exceeds it is handled exactly like a transport failure.
pub const DNS_TIMEOUT_SECS: u64 = 10;

/// Default DNS-over-HTTPS JSON endpoint.
pub const DEFAULT_DOH_ENDPOINT: &str = "https://dns.google/resolve";

/// Media type requested from DNS-over-HTTPS JSON endpoints.
pub const DOH_JSON_ACCEPT: &str = "application/dns-json";

/// Default User-Agent string for DNS-over-HTTPS requests.
pub const DEFAULT_USER_AGENT: &str = concat!("mailauth_check/", env!("CARGO_PKG_VERSION"));

/// Maximum accepted length of a raw domain input.
/// Longer lines in domain files are skipped with a warning.
pub const MAX_DOMAIN_INPUT_LENGTH: usize = 2048;

// Record markers
/// Tag a DMARC record must start with.
pub const DMARC_MARKER: &str = "v=DMARC1";
/// Tag an SPF record must start with.
pub const SPF_MARKER: &str = "v=spf1";
/// Tag a DKIM key record must contain.
pub const DKIM_MARKER: &str = "v=DKIM1";

// Query name prefixes
/// Label under which DMARC policies are published.
pub const DMARC_PREFIX: &str = "_dmarc";
/// Label under which DKIM selectors are published.
pub const DKIM_DOMAINKEY_LABEL: &str = "_domainkey";

/// DKIM selectors probed, in order.
pub const DKIM_SELECTORS: [&str; 2] = ["default", "selector1"];

/// DNS RR type code for TXT, as reported by DNS-over-HTTPS JSON answers.
pub const TXT_RR_TYPE: u16 = 16;

/// Base URL of the MX Toolbox lookup pages linked from reports.
pub const MXTOOLBOX_BASE_URL: &str = "https://mxtoolbox.com";
