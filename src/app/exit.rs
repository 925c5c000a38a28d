//! Exit code policy.

use crate::config::FailOn;
use crate::RunSummary;

/// Exit code for a run that completed but tripped the `--fail-on` policy.
pub const EXIT_POLICY_FAILURE: i32 = 2;

/// Maps a finished run to a process exit code.
///
/// `Never` always yields 0. The other policies yield
/// [`EXIT_POLICY_FAILURE`] when any domain trips them. Rejected inputs
/// (empty domains) count as failures under every policy but `Never`.
pub fn evaluate_exit_code(fail_on: FailOn, summary: &RunSummary) -> i32 {
    let tripped = match fail_on {
        FailOn::Never => return 0,
        FailOn::AnyMissing => summary.reports.iter().any(|r| r.any_missing()),
        FailOn::AnyNotValid => summary.reports.iter().any(|r| r.any_not_valid()),
    };

    if tripped || !summary.rejected.is_empty() {
        EXIT_POLICY_FAILURE
    } else {
        0
    }
}
