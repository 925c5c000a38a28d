//! DNS TXT resolution.
//!
//! This module provides the resolver boundary the record checker talks to:
//! - `TxtResolver`: "resolve this name as TXT, give me the text answers"
//! - `DohResolver`: DNS-over-HTTPS JSON API (`dns.google` by default)
//! - `SystemResolver`: system resolver configuration via `hickory-resolver`
//! - `StubResolver`: scripted answers for tests
//! - `lookup_txt`: timeout, failure containment, and quote stripping on top
//!   of any resolver

mod doh;
mod lookup;
pub mod stub;
mod system;

use std::future::Future;

use crate::error_handling::LookupError;

// Re-export public API
pub use doh::DohResolver;
pub use lookup::{lookup_txt, strip_quotes, TxtLookup};
pub use stub::StubResolver;
pub use system::SystemResolver;

/// A DNS client able to answer TXT queries.
///
/// An empty vector means the name has no TXT records. Any other failure is an
/// error, which callers contain rather than propagate.
pub trait TxtResolver: Send + Sync {
    /// Resolves `name` as TXT and returns the raw text answers in resolver order.
    fn query_txt(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<String>, LookupError>> + Send;
}
