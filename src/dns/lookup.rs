//! Contained TXT lookups.
//!
//! A lookup never fails from the caller's point of view: transport errors,
//! bad responses, and timeouts all come back as `TxtLookup { failed: true }`
//! with no answers.

use std::time::Duration;

use log::{debug, warn};

use super::TxtResolver;
use crate::error_handling::LookupError;

/// Outcome of one TXT query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxtLookup {
    /// Answers with quotes removed, in resolver order
    pub answers: Vec<String>,
    /// Whether the query itself failed (answers are then empty)
    pub failed: bool,
}

impl TxtLookup {
    /// Result of a failed query.
    pub fn failure() -> Self {
        Self {
            answers: Vec::new(),
            failed: true,
        }
    }

    /// True when the query succeeded and returned at least one answer.
    pub fn has_answers(&self) -> bool {
        !self.failed && !self.answers.is_empty()
    }
}

/// Removes every double-quote character from a TXT answer.
///
/// DoH endpoints hand TXT data back quoted, and a record made of several
/// character-strings arrives as `"part1" "part2"`. Quotes are never part of
/// an SPF, DMARC, or DKIM tag, so all of them go.
///
/// # Examples
///
/// ```
/// use mailauth_check::dns::strip_quotes;
///
/// assert_eq!(strip_quotes("\"v=spf1 -all\""), "v=spf1 -all");
/// assert_eq!(strip_quotes("\"v=spf1 \" \"-all\""), "v=spf1  -all");
/// assert_eq!(strip_quotes("v=spf1 -all"), "v=spf1 -all");
/// ```
pub fn strip_quotes(answer: &str) -> String {
    answer.replace('"', "")
}

/// Queries TXT records for `name`, bounded by `timeout`.
///
/// # Arguments
///
/// * `resolver` - The DNS resolver to ask
/// * `name` - Fully built query name (e.g. `_dmarc.example.com`)
/// * `timeout` - Upper bound for the whole query
///
/// # Returns
///
/// The quote-stripped answers, or a failed lookup if the resolver errored or
/// the timeout elapsed.
pub async fn lookup_txt<R: TxtResolver>(resolver: &R, name: &str, timeout: Duration) -> TxtLookup {
    debug!("Querying TXT records for {name}");
    let outcome = match tokio::time::timeout(timeout, resolver.query_txt(name)).await {
        Ok(result) => result,
        Err(_) => Err(LookupError::Timeout(timeout)),
    };

    match outcome {
        Ok(answers) => {
            debug!("Got {} TXT answer(s) for {name}", answers.len());
            TxtLookup {
                answers: answers
                    .iter()
                    .map(|answer| strip_quotes(answer))
                    .collect(),
                failed: false,
            }
        }
        Err(e) => {
            if e.is_timeout() {
                warn!("TXT record lookup timed out for {name}: {e}");
            } else {
                warn!("Failed to lookup TXT records for {name}: {e}");
            }
            TxtLookup::failure()
        }
    }
}
