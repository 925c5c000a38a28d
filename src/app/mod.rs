//! Main application modules.
//!
//! This module provides input collection and the exit code policy used by
//! the command-line binary.

pub mod exit;
pub mod input;

// Re-export public API
pub use exit::{evaluate_exit_code, EXIT_POLICY_FAILURE};
pub use input::{accept_domain_input, collect_domains, read_domains};
