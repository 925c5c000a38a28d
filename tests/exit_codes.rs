//! Tests for exit code policies (--fail-on flag)

use mailauth_check::app::{evaluate_exit_code, EXIT_POLICY_FAILURE};
use mailauth_check::{DnsRecordResult, DomainReport, FailOn, RecordKind, RecordStatus, RunSummary};

fn report(statuses: [RecordStatus; 3]) -> DomainReport {
    let kinds = [RecordKind::Dmarc, RecordKind::Spf, RecordKind::Dkim];
    DomainReport {
        domain: "example.com".to_string(),
        checked_at: "2024-05-01T12:00:00Z".to_string(),
        records: kinds
            .into_iter()
            .zip(statuses)
            .map(|(kind, status)| DnsRecordResult {
                kind,
                status,
                value: String::new(),
                explanation: String::new(),
            })
            .collect(),
    }
}

fn summary(reports: Vec<DomainReport>) -> RunSummary {
    RunSummary {
        reports,
        rejected: Vec::new(),
    }
}

const ALL_VALID: [RecordStatus; 3] = [RecordStatus::Valid; 3];
const ONE_INVALID: [RecordStatus; 3] = [RecordStatus::Valid, RecordStatus::Invalid, RecordStatus::Valid];
const ONE_MISSING: [RecordStatus; 3] = [RecordStatus::Valid, RecordStatus::Valid, RecordStatus::Missing];

#[test]
fn test_fail_on_never_always_returns_zero() {
    let run = RunSummary {
        reports: vec![report([RecordStatus::Missing; 3])],
        rejected: vec![String::new()],
    };
    assert_eq!(evaluate_exit_code(FailOn::Never, &run), 0);
}

#[test]
fn test_fail_on_any_missing() {
    assert_eq!(
        evaluate_exit_code(FailOn::AnyMissing, &summary(vec![report(ALL_VALID)])),
        0
    );
    assert_eq!(
        evaluate_exit_code(FailOn::AnyMissing, &summary(vec![report(ONE_INVALID)])),
        0
    );
    assert_eq!(
        evaluate_exit_code(
            FailOn::AnyMissing,
            &summary(vec![report(ALL_VALID), report(ONE_MISSING)])
        ),
        EXIT_POLICY_FAILURE
    );
}

#[test]
fn test_fail_on_any_not_valid() {
    assert_eq!(
        evaluate_exit_code(FailOn::AnyNotValid, &summary(vec![report(ALL_VALID)])),
        0
    );
    assert_eq!(
        evaluate_exit_code(FailOn::AnyNotValid, &summary(vec![report(ONE_INVALID)])),
        EXIT_POLICY_FAILURE
    );
    assert_eq!(
        evaluate_exit_code(FailOn::AnyNotValid, &summary(vec![report(ONE_MISSING)])),
        EXIT_POLICY_FAILURE
    );
}

#[test]
fn test_rejected_inputs_trip_policies() {
    let run = RunSummary {
        reports: vec![report(ALL_VALID)],
        rejected: vec![String::new()],
    };
    assert_eq!(evaluate_exit_code(FailOn::AnyMissing, &run), EXIT_POLICY_FAILURE);
    assert_eq!(evaluate_exit_code(FailOn::AnyNotValid, &run), EXIT_POLICY_FAILURE);
}

#[test]
fn test_empty_run_passes() {
    assert_eq!(evaluate_exit_code(FailOn::AnyNotValid, &RunSummary::default()), 0);
}
