//! Scripted resolver for tests.
//!
//! Answers come from a table keyed by query name (case-insensitive). Names
//! can be made to fail or to stall, and every query is recorded so tests can
//! assert which names were asked and how often.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use super::TxtResolver;
use crate::error_handling::LookupError;

#[derive(Debug, Default)]
struct StubState {
    txt_records: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
    delays: HashMap<String, Duration>,
    calls: Vec<String>,
}

/// In-memory `TxtResolver` with call recording.
///
/// Clones share state, so a test can keep a handle while the checker uses
/// another.
#[derive(Debug, Clone, Default)]
pub struct StubResolver {
    state: Arc<Mutex<StubState>>,
}

impl StubResolver {
    /// Creates a resolver that knows no names.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, StubState> {
        // A panic while holding the lock only happens inside a failing test
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Sets the TXT answers for `name`.
    pub fn add_txt(&self, name: &str, records: &[&str]) {
        self.state().txt_records.insert(
            name.to_lowercase(),
            records.iter().map(|r| r.to_string()).collect(),
        );
    }

    /// Builder form of [`StubResolver::add_txt`].
    pub fn with_txt(self, name: &str, records: &[&str]) -> Self {
        self.add_txt(name, records);
        self
    }

    /// Makes every query for `name` fail as a transport error would.
    pub fn fail(&self, name: &str) {
        self.state().failing.insert(name.to_lowercase());
    }

    /// Delays answers for `name` by `delay`.
    pub fn delay(&self, name: &str, delay: Duration) {
        self.state().delays.insert(name.to_lowercase(), delay);
    }

    /// Every name queried so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    /// How often `name` was queried.
    pub fn call_count(&self, name: &str) -> usize {
        let name = name.to_lowercase();
        self.state().calls.iter().filter(|c| **c == name).count()
    }
}

impl TxtResolver for StubResolver {
    async fn query_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let name = name.to_lowercase();
        let delay = {
            let mut state = self.state();
            state.calls.push(name.clone());
            state.delays.get(&name).copied()
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let state = self.state();
        if state.failing.contains(&name) {
            return Err(LookupError::Decode(format!("stubbed failure for {name}")));
        }
        Ok(state.txt_records.get(&name).cloned().unwrap_or_default())
    }
}
