//! Record check result types.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::MXTOOLBOX_BASE_URL;

/// The email-authentication records a check covers.
///
/// Results always come back in declaration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIterMacro,
)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Policy record at `_dmarc.<domain>`
    Dmarc,
    /// Sender policy at the domain apex
    Spf,
    /// Signing key at `<selector>._domainkey.<domain>`
    Dkim,
}

impl RecordKind {
    /// Lowercase identifier, as used in JSON output and MX Toolbox links.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Dmarc => "dmarc",
            RecordKind::Spf => "spf",
            RecordKind::Dkim => "dkim",
        }
    }

    /// Display label ("DMARC", "SPF", "DKIM").
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Dmarc => "DMARC",
            RecordKind::Spf => "SPF",
            RecordKind::Dkim => "DKIM",
        }
    }

    /// Background on what this kind of record is for.
    pub fn about(&self) -> &'static str {
        match self {
            RecordKind::Dmarc => {
                "DMARC (Domain-based Message Authentication, Reporting, and Conformance) is an email \
                 authentication protocol that builds on SPF and DKIM. It allows domain owners to specify how \
                 email that fails authentication should be handled, and provides reporting capabilities."
            }
            RecordKind::Spf => {
                "SPF (Sender Policy Framework) is an email authentication method designed to detect forging \
                 sender addresses during the delivery of email. SPF allows domain owners to specify which mail \
                 servers are authorized to send email on behalf of their domain."
            }
            RecordKind::Dkim => {
                "DKIM (DomainKeys Identified Mail) is an email authentication method designed to detect email \
                 spoofing. It allows the receiver to check that an email claimed to have come from a specific \
                 domain was indeed authorized by the owner of that domain."
            }
        }
    }

    /// MX Toolbox page that re-checks this record for `domain`.
    pub fn mxtoolbox_url(&self, domain: &str) -> String {
        format!("{}/{}/{}", MXTOOLBOX_BASE_URL, self.as_str(), domain)
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one record kind.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIterMacro,
)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// An answer carried the required tag
    Valid,
    /// Answers existed but none carried the required tag
    Invalid,
    /// No answers, or the lookup failed
    Missing,
}

impl RecordStatus {
    /// Lowercase identifier, as used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Valid => "valid",
            RecordStatus::Invalid => "invalid",
            RecordStatus::Missing => "missing",
        }
    }

    /// Display label ("Valid", "Invalid", "Missing").
    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Valid => "Valid",
            RecordStatus::Invalid => "Invalid",
            RecordStatus::Missing => "Missing",
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified result for one record kind.
///
/// `value` holds the matching record when valid, every answer joined by `\n`
/// when invalid, and is empty when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecordResult {
    /// Record kind (serialized as `type`)
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Classification
    pub status: RecordStatus,
    /// Raw record text
    pub value: String,
    /// Human-readable explanation
    pub explanation: String,
}

impl DnsRecordResult {
    /// A `missing` result with the given explanation.
    pub(crate) fn missing(kind: RecordKind, explanation: impl Into<String>) -> Self {
        Self {
            kind,
            status: RecordStatus::Missing,
            value: String::new(),
            explanation: explanation.into(),
        }
    }
}
