//! Marker-based classification of TXT answers.

use super::types::RecordStatus;

/// How an answer is tested against a record's required marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Answer must begin with the marker (DMARC, SPF)
    StartsWith,
    /// Marker may appear anywhere in the answer (DKIM)
    Contains,
}

impl MatchMode {
    /// Tests one answer. Case-sensitive.
    pub fn matches(&self, answer: &str, marker: &str) -> bool {
        match self {
            MatchMode::StartsWith => answer.starts_with(marker),
            MatchMode::Contains => answer.contains(marker),
        }
    }
}

/// Classifies a list of TXT answers.
///
/// The first answer matching `marker` wins and becomes the value. When nothing
/// matches, all answers are joined with `\n` in their original order so the
/// offending text can be inspected.
///
/// # Examples
///
/// ```
/// use mailauth_check::{classify, MatchMode, RecordStatus};
///
/// let answers = vec!["google-site-verification=abc".to_string(), "v=spf1 -all".to_string()];
/// assert_eq!(
///     classify(&answers, "v=spf1", MatchMode::StartsWith),
///     (RecordStatus::Valid, "v=spf1 -all".to_string())
/// );
/// ```
pub fn classify(answers: &[String], marker: &str, mode: MatchMode) -> (RecordStatus, String) {
    if answers.is_empty() {
        return (RecordStatus::Missing, String::new());
    }

    match answers.iter().find(|answer| mode.matches(answer, marker)) {
        Some(found) => (RecordStatus::Valid, found.clone()),
        None => (RecordStatus::Invalid, answers.join("\n")),
    }
}
