//! mailauth_check library: email-authentication DNS record checks
//!
//! This library looks up the DMARC, SPF, and DKIM TXT records a domain
//! publishes and classifies each as `valid`, `invalid`, or `missing`, with a
//! human-readable explanation.
//!
//! # Example
//!
//! ```no_run
//! use mailauth_check::check_dns_records;
//! use mailauth_check::dns::DohResolver;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = DohResolver::new(Arc::new(reqwest::Client::new()), "https://dns.google/resolve")?;
//! for record in check_dns_records(&resolver, "example.com").await? {
//!     println!("{}: {} ({})", record.kind, record.status, record.explanation);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod checker;
pub mod config;
pub mod dns;
mod domain;
pub mod error_handling;
pub mod initialization;
pub mod records;
pub mod report;
mod run;

// Re-export public API
pub use checker::{check_dns_records, check_dns_records_with};
pub use config::{
    CheckOptions, Config, FailOn, LogFormat, LogLevel, Opt, OutputFormat, ResolverKind,
};
pub use domain::normalize_domain;
pub use error_handling::{CheckError, LookupError};
pub use records::{classify, DnsRecordResult, MatchMode, RecordKind, RecordStatus};
pub use report::{check_domain, DomainReport};
pub use run::{run, run_with_resolver, RunSummary};
