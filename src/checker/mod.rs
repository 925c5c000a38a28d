//! Record checker.
//!
//! Turns one domain into exactly three results, always in the order DMARC,
//! SPF, DKIM. Individual lookups may fail. Such failures end up as `missing`
//! records and never abort the sibling checks. The only error returned is
//! `CheckError::InvalidInput` for an empty domain.

use std::time::Duration;

use crate::config::{CheckOptions, DKIM_MARKER};
use crate::dns::{lookup_txt, TxtResolver};
use crate::domain::normalize_domain;
use crate::error_handling::CheckError;
use crate::records::profile::{
    dkim_explanation, dkim_query_name, DkimState, RecordProfile, DKIM_EXHAUSTED, DKIM_MATCH_MODE,
    DMARC, SPF,
};
use crate::records::{classify, DnsRecordResult, RecordKind};

/// Checks DMARC, SPF, and DKIM records of `domain` with default options.
///
/// # Errors
///
/// Returns `CheckError::InvalidInput` if `domain` is empty.
///
/// # Examples
///
/// ```
/// use mailauth_check::dns::StubResolver;
/// use mailauth_check::{check_dns_records, RecordStatus};
///
/// # #[tokio::main]
/// # async fn main() {
/// let resolver = StubResolver::new().with_txt("_dmarc.example.com", &["v=DMARC1; p=reject"]);
/// let results = check_dns_records(&resolver, "https://www.example.com/").await.unwrap();
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[0].status, RecordStatus::Valid);
/// # }
/// ```
pub async fn check_dns_records<R: TxtResolver>(
    resolver: &R,
    domain: &str,
) -> Result<Vec<DnsRecordResult>, CheckError> {
    check_dns_records_with(resolver, domain, &CheckOptions::default()).await
}

/// Checks DMARC, SPF, and DKIM records of `domain`.
///
/// With `options.concurrent` the three checks run concurrently. The two DKIM
/// selector probes stay sequential either way, and the result order is
/// unaffected.
///
/// # Errors
///
/// Returns `CheckError::InvalidInput` if `domain` is empty.
pub async fn check_dns_records_with<R: TxtResolver>(
    resolver: &R,
    domain: &str,
    options: &CheckOptions,
) -> Result<Vec<DnsRecordResult>, CheckError> {
    if domain.is_empty() {
        return Err(CheckError::InvalidInput);
    }

    let domain = normalize_domain(domain);
    let timeout = options.lookup_timeout;

    let (dmarc, spf, dkim) = if options.concurrent {
        tokio::join!(
            check_record(resolver, &DMARC, &domain, timeout),
            check_record(resolver, &SPF, &domain, timeout),
            check_dkim(resolver, &domain, timeout),
        )
    } else {
        let dmarc = check_record(resolver, &DMARC, &domain, timeout).await;
        let spf = check_record(resolver, &SPF, &domain, timeout).await;
        let dkim = check_dkim(resolver, &domain, timeout).await;
        (dmarc, spf, dkim)
    };

    Ok(vec![dmarc, spf, dkim])
}

/// Single-query check (DMARC, SPF).
async fn check_record<R: TxtResolver>(
    resolver: &R,
    profile: &RecordProfile,
    domain: &str,
    timeout: Duration,
) -> DnsRecordResult {
    let lookup = lookup_txt(resolver, &profile.query_name(domain), timeout).await;
    if lookup.failed {
        return DnsRecordResult::missing(profile.kind, profile.lookup_failed);
    }

    let (status, value) = classify(&lookup.answers, profile.marker, profile.match_mode);
    DnsRecordResult {
        kind: profile.kind,
        status,
        value,
        explanation: profile.explanation(status).to_string(),
    }
}

/// DKIM check with selector fallback.
///
/// Lookup failures advance to the next selector exactly like an empty answer
/// and never produce an error-specific explanation.
async fn check_dkim<R: TxtResolver>(resolver: &R, domain: &str, timeout: Duration) -> DnsRecordResult {
    let mut state = DkimState::TryDefault;

    while let Some(selector) = state.selector() {
        let lookup = lookup_txt(resolver, &dkim_query_name(selector, domain), timeout).await;
        if !lookup.has_answers() {
            state = state.advance();
            continue;
        }

        let (status, value) = classify(&lookup.answers, DKIM_MARKER, DKIM_MATCH_MODE);
        return DnsRecordResult {
            kind: RecordKind::Dkim,
            status,
            value,
            explanation: dkim_explanation(status, selector),
        };
    }

    DnsRecordResult::missing(RecordKind::Dkim, DKIM_EXHAUSTED)
}
