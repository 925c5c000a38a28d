//! Batch run over a list of domains.
//!
//! This module wires the pieces together for the binary: collect the inputs,
//! build the configured resolver, check each domain in turn, and stream each
//! report to the output as soon as it is ready.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::app::collect_domains;
use crate::config::{CheckOptions, Config, ResolverKind};
use crate::dns::{DohResolver, SystemResolver, TxtResolver};
use crate::initialization::{init_client, init_resolver};
use crate::records::RecordStatus;
use crate::report::{check_domain, write_report, DomainReport, IgnoreBrokenPipe};

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// One report per checked domain, in input order
    pub reports: Vec<DomainReport>,
    /// Inputs rejected before any lookup (empty domains)
    pub rejected: Vec<String>,
}

impl RunSummary {
    /// Number of inputs seen, checked or rejected.
    pub fn total(&self) -> usize {
        self.reports.len() + self.rejected.len()
    }
}

/// Checks every domain in `domains` with `resolver` and writes each report to `out`.
///
/// Domains are checked one after another so output order matches input
/// order. An empty domain is logged and recorded in
/// [`RunSummary::rejected`]; the run carries on with the next one.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub async fn run_with_resolver<R: TxtResolver, W: Write>(
    resolver: &R,
    domains: &[String],
    config: &Config,
    out: &mut W,
) -> Result<RunSummary> {
    let options = CheckOptions::from(config);
    let mut summary = RunSummary::default();

    for input in domains {
        match check_domain(resolver, input, &options).await {
            Ok(report) => {
                info!(
                    "{}: {} valid, {} invalid, {} missing",
                    report.domain,
                    report.count(RecordStatus::Valid),
                    report.count(RecordStatus::Invalid),
                    report.count(RecordStatus::Missing)
                );
                write_report(out, &report, config.output)?;
                out.flush().context("Failed to flush output")?;
                summary.reports.push(report);
            }
            Err(e) => {
                warn!("Skipping input {input:?}: {e}");
                summary.rejected.push(input.clone());
            }
        }
    }

    Ok(summary)
}

/// Runs a full check with the provided configuration.
///
/// This is the main entry point for the binary. Reports go to stdout and
/// logs go to stderr.
///
/// # Errors
///
/// Returns an error if no domains were given, the input file cannot be read,
/// the resolver cannot be initialized, or writing to stdout fails.
///
/// # Example
///
/// ```no_run
/// use mailauth_check::{run, Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     domains: vec!["example.com".to_string()],
///     ..Default::default()
/// };
/// let summary = run(config).await?;
/// println!("Checked {} domain(s)", summary.reports.len());
/// # Ok(())
/// # }
/// ```
pub async fn run(config: Config) -> Result<RunSummary> {
    let domains = collect_domains(&config).await?;
    info!("Checking {} domain(s)", domains.len());

    let start = Instant::now();
    let mut out = IgnoreBrokenPipe::new(std::io::stdout());

    let summary = match config.resolver {
        ResolverKind::Doh => {
            let client = init_client(&config).context("Failed to initialize HTTP client")?;
            let resolver = DohResolver::new(client, &config.doh_endpoint).with_context(|| {
                format!("Invalid DNS-over-HTTPS endpoint: {}", config.doh_endpoint)
            })?;
            info!("Using DNS-over-HTTPS endpoint {}", resolver.endpoint());
            run_with_resolver(&resolver, &domains, &config, &mut out).await?
        }
        ResolverKind::System => {
            let resolver = init_resolver(Duration::from_secs(config.timeout_seconds))
                .context("Failed to initialize DNS resolver")?;
            info!("Using system DNS resolver");
            run_with_resolver(&SystemResolver::new(resolver), &domains, &config, &mut out).await?
        }
    };

    info!(
        "Checked {} of {} input(s) in {:.1}s",
        summary.reports.len(),
        summary.total(),
        start.elapsed().as_secs_f64()
    );

    Ok(summary)
}
