//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, endpoints, record markers)
//! - CLI option types and parsing
//! - Per-check tunables

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{CheckOptions, Config, FailOn, LogFormat, LogLevel, Opt, OutputFormat, ResolverKind};
