//! Email-authentication record model and classification rules.
//!
//! This module provides:
//! - Result types (`RecordKind`, `RecordStatus`, `DnsRecordResult`)
//! - Marker matching and answer classification
//! - Per-kind query names, markers, and explanation texts

mod classify;
pub(crate) mod profile;
mod types;

// Re-export public API
pub use classify::{classify, MatchMode};
pub use types::{DnsRecordResult, RecordKind, RecordStatus};
