//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and library configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_DOH_ENDPOINT, DEFAULT_USER_AGENT, DNS_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which resolver answers the TXT queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResolverKind {
    /// DNS-over-HTTPS JSON API (default)
    Doh,
    /// System resolver configuration via hickory
    System,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Plain,
    /// One JSON object per domain per line
    Json,
}

/// Exit code policy for a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once the run completes
    Never,
    /// Exit 2 if any record of any domain is missing
    AnyMissing,
    /// Exit 2 if any record of any domain is missing or invalid
    AnyNotValid,
}

/// Library configuration (no CLI dependencies).
///
/// Built from [`Opt`] by the binary, or constructed programmatically.
///
/// # Examples
///
/// ```no_run
/// use mailauth_check::Config;
///
/// let config = Config {
///     domains: vec!["example.com".to_string()],
///     concurrent: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Domains given directly
    pub domains: Vec<String>,

    /// Optional file to read domains from (`-` for stdin)
    pub file: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Resolver backend
    pub resolver: ResolverKind,

    /// DNS-over-HTTPS endpoint
    pub doh_endpoint: String,

    /// Per-lookup timeout in seconds
    pub timeout_seconds: u64,

    /// Run the three record checks of a domain concurrently
    pub concurrent: bool,

    /// Report format
    pub output: OutputFormat,

    /// Exit code policy
    pub fail_on: FailOn,

    /// HTTP User-Agent header value for DNS-over-HTTPS requests
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            file: None,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            resolver: ResolverKind::Doh,
            doh_endpoint: DEFAULT_DOH_ENDPOINT.to_string(),
            timeout_seconds: DNS_TIMEOUT_SECS,
            concurrent: false,
            output: OutputFormat::Plain,
            fail_on: FailOn::Never,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Tunables for a single record check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Upper bound for each individual TXT lookup
    pub lookup_timeout: Duration,
    /// Run DMARC, SPF, and DKIM checks concurrently instead of one after another
    pub concurrent: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            lookup_timeout: Duration::from_secs(DNS_TIMEOUT_SECS),
            concurrent: false,
        }
    }
}

impl From<&Config> for CheckOptions {
    fn from(config: &Config) -> Self {
        Self {
            lookup_timeout: Duration::from_secs(config.timeout_seconds),
            concurrent: config.concurrent,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Check one domain
/// mailauth_check example.com
///
/// # Check a list, JSON output, system resolver
/// mailauth_check --file domains.txt --output json --resolver system
///
/// # Read domains from stdin and fail the pipeline on missing records
/// cat domains.txt | mailauth_check --file - --fail-on any-missing
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "mailauth_check",
    about = "Checks DMARC, SPF, and DKIM records published for a domain."
)]
pub struct Opt {
    /// Domains or URLs to check
    #[arg(value_parser)]
    pub domains: Vec<String>,

    /// File with one domain per line (`-` reads stdin)
    #[arg(long, value_parser)]
    pub file: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Resolver backend: doh|system
    #[arg(long, value_enum, default_value_t = ResolverKind::Doh)]
    pub resolver: ResolverKind,

    /// DNS-over-HTTPS JSON endpoint
    #[arg(long, default_value = DEFAULT_DOH_ENDPOINT)]
    pub doh_endpoint: String,

    /// Per-lookup timeout in seconds (at least 1)
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_seconds: u64,

    /// Check DMARC, SPF, and DKIM of a domain concurrently
    #[arg(long)]
    pub concurrent: bool,

    /// Report format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Exit code policy: never|any-missing|any-not-valid
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,

    /// HTTP User-Agent header value for DNS-over-HTTPS requests
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            domains: opt.domains,
            file: opt.file,
            log_level: opt.log_level,
            log_format: opt.log_format,
            resolver: opt.resolver,
            doh_endpoint: opt.doh_endpoint,
            timeout_seconds: opt.timeout_seconds,
            concurrent: opt.concurrent,
            output: opt.output,
            fail_on: opt.fail_on,
            user_agent: opt.user_agent,
        }
    }
}
