//! Per-domain reports and their rendering.
//!
//! A `DomainReport` pairs the three record results with the normalized domain
//! and the time of the check. Reports render either as a human-readable block
//! or as one JSON object per line.

mod jsonl;
mod plain;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::checker::check_dns_records_with;
use crate::config::{CheckOptions, OutputFormat};
use crate::dns::TxtResolver;
use crate::domain::normalize_domain;
use crate::error_handling::CheckError;
use crate::records::{DnsRecordResult, RecordStatus};

pub(crate) use jsonl::IgnoreBrokenPipe;
pub use jsonl::write_jsonl;
pub use plain::write_plain;

/// Results of checking one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainReport {
    /// Normalized domain the records were looked up for
    pub domain: String,
    /// RFC 3339 UTC timestamp of the check
    pub checked_at: String,
    /// DMARC, SPF, and DKIM results, in that order
    pub records: Vec<DnsRecordResult>,
}

impl DomainReport {
    /// Whether any record is `missing`.
    pub fn any_missing(&self) -> bool {
        self.records
            .iter()
            .any(|r| r.status == RecordStatus::Missing)
    }

    /// Whether any record is not `valid`.
    pub fn any_not_valid(&self) -> bool {
        self.records.iter().any(|r| r.status != RecordStatus::Valid)
    }

    /// Number of records with the given status.
    pub fn count(&self, status: RecordStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }
}

/// Checks `input` and stamps the result with the current time.
///
/// # Errors
///
/// Returns `CheckError::InvalidInput` if `input` is empty.
pub async fn check_domain<R: TxtResolver>(
    resolver: &R,
    input: &str,
    options: &CheckOptions,
) -> Result<DomainReport, CheckError> {
    let records = check_dns_records_with(resolver, input, options).await?;
    Ok(DomainReport {
        domain: normalize_domain(input),
        checked_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        records,
    })
}

/// Writes `report` in the requested format.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_report<W: std::io::Write>(
    out: &mut W,
    report: &DomainReport,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Plain => write_plain(out, report),
        OutputFormat::Json => write_jsonl(out, report),
    }
}

#[cfg(test)]
pub(crate) fn sample_report() -> DomainReport {
    use crate::records::RecordKind;

    DomainReport {
        domain: "example.com".to_string(),
        checked_at: "2024-05-01T12:00:00Z".to_string(),
        records: vec![
            DnsRecordResult {
                kind: RecordKind::Dmarc,
                status: RecordStatus::Valid,
                value: "v=DMARC1; p=reject".to_string(),
                explanation: "DMARC record found and appears to be valid.".to_string(),
            },
            DnsRecordResult {
                kind: RecordKind::Spf,
                status: RecordStatus::Invalid,
                value: "one\ntwo".to_string(),
                explanation: "TXT records exist but no valid SPF record with 'v=spf1' tag was found."
                    .to_string(),
            },
            DnsRecordResult {
                kind: RecordKind::Dkim,
                status: RecordStatus::Missing,
                value: String::new(),
                explanation: "No DKIM record found for common selectors. DKIM adds a digital signature to emails sent from your domain."
                    .to_string(),
            },
        ],
    }
}
