//! Error types.
//!
//! Errors are split by how far they may travel:
//! - **CheckError**: the only failure a record check returns to its caller
//! - **LookupError**: a single failed TXT query, always contained by the checker
//! - **InitializationError**: startup failures of the binary (logger, HTTP client, resolver)

mod types;

// Re-export public API
pub use types::{CheckError, InitializationError, LookupError};
