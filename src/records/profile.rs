//! Per-kind lookup parameters and explanation texts.
//!
//! DMARC and SPF differ only in where they are published, which tag they must
//! start with, and how results are explained. DKIM adds selector probing on
//! top (see [`DkimState`]).

use super::classify::MatchMode;
use super::types::{RecordKind, RecordStatus};
use crate::config::{
    DKIM_DOMAINKEY_LABEL, DKIM_MARKER, DKIM_SELECTORS, DMARC_MARKER, DMARC_PREFIX, SPF_MARKER,
};

/// Lookup parameters and fixed explanations for a single-query record kind.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RecordProfile {
    pub kind: RecordKind,
    /// Label prepended to the domain, or `None` to query the apex
    pub prefix: Option<&'static str>,
    pub marker: &'static str,
    pub match_mode: MatchMode,
    pub valid: &'static str,
    pub invalid: &'static str,
    pub missing: &'static str,
    pub lookup_failed: &'static str,
}

impl RecordProfile {
    /// Name to query for `domain`.
    pub fn query_name(&self, domain: &str) -> String {
        match self.prefix {
            Some(prefix) => format!("{prefix}.{domain}"),
            None => domain.to_string(),
        }
    }

    /// Explanation for a classified (non-failed) lookup.
    pub fn explanation(&self, status: RecordStatus) -> &'static str {
        match status {
            RecordStatus::Valid => self.valid,
            RecordStatus::Invalid => self.invalid,
            RecordStatus::Missing => self.missing,
        }
    }
}

pub(crate) const DMARC: RecordProfile = RecordProfile {
    kind: RecordKind::Dmarc,
    prefix: Some(DMARC_PREFIX),
    marker: DMARC_MARKER,
    match_mode: MatchMode::StartsWith,
    valid: "DMARC record found and appears to be valid.",
    invalid: "DMARC record exists but doesn't contain the required 'v=DMARC1' tag.",
    missing: "No DMARC record found. DMARC helps prevent email spoofing and phishing.",
    lookup_failed: "Error checking DMARC record. DMARC helps prevent email spoofing and phishing.",
};

// SPF lives in the apex TXT set, never a dedicated RR type.
pub(crate) const SPF: RecordProfile = RecordProfile {
    kind: RecordKind::Spf,
    prefix: None,
    marker: SPF_MARKER,
    match_mode: MatchMode::StartsWith,
    valid: "SPF record found and appears to be valid.",
    invalid: "TXT records exist but no valid SPF record with 'v=spf1' tag was found.",
    missing: "No SPF record found. SPF specifies which mail servers are authorized to send email from your domain.",
    lookup_failed: "Error checking SPF record. SPF specifies which mail servers are authorized to send email from your domain.",
};

pub(crate) const DKIM_MATCH_MODE: MatchMode = MatchMode::Contains;

pub(crate) const DKIM_EXHAUSTED: &str =
    "No DKIM record found for common selectors. DKIM adds a digital signature to emails sent from your domain.";

/// Selector probing progress.
///
/// `TryDefault -> TrySelector1 -> Exhausted`. A probe that returns any answer
/// ends the walk, valid or not. Errors and empty answers both advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DkimState {
    TryDefault,
    TrySelector1,
    Exhausted,
}

impl DkimState {
    /// Selector probed in this state.
    pub fn selector(self) -> Option<&'static str> {
        match self {
            DkimState::TryDefault => Some(DKIM_SELECTORS[0]),
            DkimState::TrySelector1 => Some(DKIM_SELECTORS[1]),
            DkimState::Exhausted => None,
        }
    }

    /// State after a probe found nothing.
    pub fn advance(self) -> Self {
        match self {
            DkimState::TryDefault => DkimState::TrySelector1,
            DkimState::TrySelector1 | DkimState::Exhausted => DkimState::Exhausted,
        }
    }
}

pub(crate) fn dkim_query_name(selector: &str, domain: &str) -> String {
    format!("{selector}.{DKIM_DOMAINKEY_LABEL}.{domain}")
}

pub(crate) fn dkim_explanation(status: RecordStatus, selector: &str) -> String {
    match status {
        RecordStatus::Valid => {
            format!("DKIM record found for selector '{selector}' and appears to be valid.")
        }
        RecordStatus::Invalid => format!(
            "DKIM record exists for selector '{selector}' but doesn't contain the required '{DKIM_MARKER}' tag."
        ),
        RecordStatus::Missing => DKIM_EXHAUSTED.to_string(),
    }
}
