//! Domain input normalization.
//!
//! Users paste anything from a bare domain to a full URL. Before querying DNS
//! the input is reduced to a host-ish string:
//! - a leading `http://` or `https://` is dropped (case-insensitive)
//! - a leading `www.` is dropped (case-insensitive)
//! - everything from the first `/` on is dropped
//!
//! No other validation happens here. A malformed result simply yields no
//! answers from the resolver.

use std::sync::LazyLock;

use regex::Regex;

static SCHEME_AND_WWW: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // Pattern is a compile-time constant
    Regex::new(r"(?i)^(https?://)?(www\.)?").unwrap()
});

/// Normalizes a user-supplied domain or URL into the name that gets queried.
///
/// Casing of the remaining text is preserved.
///
/// # Examples
///
/// ```
/// use mailauth_check::normalize_domain;
///
/// assert_eq!(normalize_domain("https://www.example.com/path?x=1"), "example.com");
/// assert_eq!(normalize_domain("WWW.Example.com"), "Example.com");
/// ```
pub fn normalize_domain(input: &str) -> String {
    let stripped = SCHEME_AND_WWW.replace(input, "");
    stripped
        .split('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
