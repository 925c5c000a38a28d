// Record checker tests.

use super::*;
use crate::dns::StubResolver;
use crate::records::RecordStatus;

const DOMAIN: &str = "example.com";

fn kinds(results: &[DnsRecordResult]) -> Vec<RecordKind> {
    results.iter().map(|r| r.kind).collect()
}

#[tokio::test]
async fn test_empty_domain_is_invalid_input() {
    let resolver = StubResolver::new();
    let result = check_dns_records(&resolver, "").await;
    assert_eq!(result, Err(CheckError::InvalidInput));
    assert!(resolver.calls().is_empty(), "no lookups for rejected input");
}

#[tokio::test]
async fn test_nothing_published_gives_three_missing() {
    let resolver = StubResolver::new();
    let results = check_dns_records(&resolver, DOMAIN).await.unwrap();

    assert_eq!(
        kinds(&results),
        vec![RecordKind::Dmarc, RecordKind::Spf, RecordKind::Dkim]
    );
    assert!(results.iter().all(|r| r.status == RecordStatus::Missing));
    assert!(results.iter().all(|r| r.value.is_empty()));
    assert_eq!(
        results[0].explanation,
        "No DMARC record found. DMARC helps prevent email spoofing and phishing."
    );
    assert_eq!(
        results[2].explanation,
        "No DKIM record found for common selectors. DKIM adds a digital signature to emails sent from your domain."
    );
}

#[tokio::test]
async fn test_queries_issued_in_order() {
    let resolver = StubResolver::new();
    check_dns_records(&resolver, DOMAIN).await.unwrap();
    assert_eq!(
        resolver.calls(),
        vec![
            "_dmarc.example.com",
            "example.com",
            "default._domainkey.example.com",
            "selector1._domainkey.example.com",
        ]
    );
}

#[tokio::test]
async fn test_input_is_normalized_before_querying() {
    let resolver = StubResolver::new().with_txt("_dmarc.example.com", &["v=DMARC1; p=reject"]);
    let results = check_dns_records(&resolver, "https://www.example.com/path?x=1")
        .await
        .unwrap();
    assert_eq!(results[0].status, RecordStatus::Valid);
    assert_eq!(resolver.call_count("_dmarc.example.com"), 1);
}

#[tokio::test]
async fn test_dmarc_valid() {
    let resolver = StubResolver::new().with_txt("_dmarc.example.com", &["v=DMARC1; p=reject"]);
    let results = check_dns_records(&resolver, DOMAIN).await.unwrap();
    assert_eq!(
        results[0],
        DnsRecordResult {
            kind: RecordKind::Dmarc,
            status: RecordStatus::Valid,
            value: "v=DMARC1; p=reject".to_string(),
            explanation: "DMARC record found and appears to be valid.".to_string(),
        }
    );
}

#[tokio::test]
async fn test_dmarc_invalid_keeps_raw_answers() {
    let resolver = StubResolver::new().with_txt(
        "_dmarc.example.com",
        &["v=spf1 include:_spf.example.com"],
    );
    let results = check_dns_records(&resolver, DOMAIN).await.unwrap();
    assert_eq!(results[0].status, RecordStatus::Invalid);
    assert_eq!(results[0].value, "v=spf1 include:_spf.example.com");
    assert_eq!(
        results[0].explanation,
        "DMARC record exists but doesn't contain the required 'v=DMARC1' tag."
    );
}

#[tokio::test]
async fn test_dmarc_quoted_answer_is_valid() {
    let resolver = StubResolver::new().with_txt("_dmarc.example.com", &["\"v=DMARC1; p=none\""]);
    let results = check_dns_records(&resolver, DOMAIN).await.unwrap();
    assert_eq!(results[0].status, RecordStatus::Valid);
    assert_eq!(results[0].value, "v=DMARC1; p=none");
}

#[tokio::test]
async fn test_dmarc_lookup_error_explanation() {
    let resolver = StubResolver::new();
    resolver.fail("_dmarc.example.com");
    let results = check_dns_records(&resolver, DOMAIN).await.unwrap();
    assert_eq!(results[0].status, RecordStatus::Missing);
    assert!(results[0].value.is_empty());
    assert_eq!(
        results[0].explanation,
        "Error checking DMARC record. DMARC helps prevent email spoofing and phishing."
    );
}

#[tokio::test]
async fn test_spf_first_match_wins() {
    let resolver = StubResolver::new().with_txt(
        DOMAIN,
        &["google-site-verification=abc", "v=spf1 -all", "v=spf1 ~all", "other-txt"],
    );
    let results = check_dns_records(&resolver, DOMAIN).await.unwrap();
    assert_eq!(results[1].status, RecordStatus::Valid);
    assert_eq!(results[1].value, "v=spf1 -all");
    assert_eq!(results[1].explanation, "SPF record found and appears to be valid.");
}

#[tokio::test]
async fn test_spf_invalid_joins_all_answers() {
    let resolver = StubResolver::new().with_txt(DOMAIN, &["one", "two"]);
    let results = check_dns_records(&resolver, DOMAIN).await.unwrap();
    assert_eq!(results[1].status, RecordStatus::Invalid);
    assert_eq!(results[1].value, "one\ntwo");
    assert_eq!(
        results[1].explanation,
        "TXT records exist but no valid SPF record with 'v=spf1' tag was found."
    );
}

#[tokio::test]
async fn test_spf_failure_does_not_affect_siblings() {
    let resolver = StubResolver::new()
        .with_txt("_dmarc.example.com", &["v=DMARC1; p=reject"])
        .with_txt(DOMAIN, &["v=spf1 -all"])
        .with_txt("default._domainkey.example.com", &["v=DKIM1; k=rsa; p=MIGf"]);
    resolver.fail(DOMAIN);

    let results = check_dns_records(&resolver, DOMAIN).await.unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].status, RecordStatus::Valid);
    assert_eq!(results[1].status, RecordStatus::Missing);
    assert_eq!(
        results[1].explanation,
        "Error checking SPF record. SPF specifies which mail servers are authorized to send email from your domain."
    );
    assert_eq!(results[2].status, RecordStatus::Valid);
}

#[tokio::test]
async fn test_dkim_default_selector_valid() {
    let resolver = StubResolver::new().with_txt(
        "default._domainkey.example.com",
        &["k=rsa; v=DKIM1; p=MIGf"],
    );
    let results = check_dns_records(&resolver, DOMAIN).await.unwrap();
    assert_eq!(results[2].status, RecordStatus::Valid);
    assert_eq!(results[2].value, "k=rsa; v=DKIM1; p=MIGf");
    assert_eq!(
        results[2].explanation,
        "DKIM record found for selector 'default' and appears to be valid."
    );
    assert_eq!(resolver.call_count("selector1._domainkey.example.com"), 0);
}

#[tokio::test]
async fn test_dkim_falls_back_to_selector1() {
    let resolver = StubResolver::new().with_txt(
        "selector1._domainkey.example.com",
        &["v=DKIM1; k=rsa; p=MIIB"],
    );
    let results = check_dns_records(&resolver, DOMAIN).await.unwrap();
    assert_eq!(results[2].status, RecordStatus::Valid);
    assert_eq!(results[2].value, "v=DKIM1; k=rsa; p=MIIB");
    assert_eq!(
        results[2].explanation,
        "DKIM record found for selector 'selector1' and appears to be valid."
    );
}

#[tokio::test]
async fn test_dkim_invalid_default_stops_search() {
    let resolver = StubResolver::new()
        .with_txt("default._domainkey.example.com", &["k=rsa; p=MIGf"])
        .with_txt("selector1._domainkey.example.com", &["v=DKIM1; k=rsa; p=MIIB"]);
    let results = check_dns_records(&resolver, DOMAIN).await.unwrap();

    assert_eq!(results[2].status, RecordStatus::Invalid);
    assert_eq!(results[2].value, "k=rsa; p=MIGf");
    assert_eq!(
        results[2].explanation,
        "DKIM record exists for selector 'default' but doesn't contain the required 'v=DKIM1' tag."
    );
    assert_eq!(resolver.call_count("default._domainkey.example.com"), 1);
    assert_eq!(resolver.call_count("selector1._domainkey.example.com"), 0);
}

#[tokio::test]
async fn test_dkim_invalid_selector1() {
    let resolver = StubResolver::new()
        .with_txt("selector1._domainkey.example.com", &["p=abc", "t=y"]);
    let results = check_dns_records(&resolver, DOMAIN).await.unwrap();
    assert_eq!(results[2].status, RecordStatus::Invalid);
    assert_eq!(results[2].value, "p=abc\nt=y");
    assert_eq!(
        results[2].explanation,
        "DKIM record exists for selector 'selector1' but doesn't contain the required 'v=DKIM1' tag."
    );
}

#[tokio::test]
async fn test_dkim_default_error_falls_through_silently() {
    let resolver = StubResolver::new()
        .with_txt("selector1._domainkey.example.com", &["v=DKIM1; p=MIIB"]);
    resolver.fail("default._domainkey.example.com");

    let results = check_dns_records(&resolver, DOMAIN).await.unwrap();
    assert_eq!(results[2].status, RecordStatus::Valid);
    assert_eq!(resolver.call_count("selector1._domainkey.example.com"), 1);
}

#[tokio::test]
async fn test_dkim_errors_on_both_selectors_read_as_not_found() {
    let resolver = StubResolver::new();
    resolver.fail("default._domainkey.example.com");
    resolver.fail("selector1._domainkey.example.com");

    let results = check_dns_records(&resolver, DOMAIN).await.unwrap();
    assert_eq!(results[2].status, RecordStatus::Missing);
    assert_eq!(
        results[2].explanation,
        "No DKIM record found for common selectors. DKIM adds a digital signature to emails sent from your domain."
    );
}

#[tokio::test]
async fn test_lookup_timeout_treated_as_error() {
    let resolver = StubResolver::new().with_txt("_dmarc.example.com", &["v=DMARC1; p=none"]);
    resolver.delay("_dmarc.example.com", Duration::from_secs(2));
    let options = CheckOptions {
        lookup_timeout: Duration::from_millis(20),
        concurrent: false,
    };

    let results = check_dns_records_with(&resolver, DOMAIN, &options)
        .await
        .unwrap();
    assert_eq!(results[0].status, RecordStatus::Missing);
    assert!(results[0].explanation.starts_with("Error checking DMARC record."));
    assert_eq!(results.len(), 3);
}

#[tokio::test]
async fn test_repeated_checks_are_identical() {
    let resolver = StubResolver::new()
        .with_txt("_dmarc.example.com", &["v=DMARC1; p=quarantine"])
        .with_txt(DOMAIN, &["other", "v=spf1 mx -all"])
        .with_txt("selector1._domainkey.example.com", &["junk"]);

    let first = check_dns_records(&resolver, DOMAIN).await.unwrap();
    let second = check_dns_records(&resolver, DOMAIN).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_concurrent_mode_matches_sequential() {
    let resolver = StubResolver::new()
        .with_txt("_dmarc.example.com", &["v=DMARC1; p=reject"])
        .with_txt(DOMAIN, &["v=spf1 -all"])
        .with_txt("selector1._domainkey.example.com", &["v=DKIM1; p=MIIB"]);
    resolver.delay("_dmarc.example.com", Duration::from_millis(50));

    let sequential = check_dns_records(&resolver, DOMAIN).await.unwrap();
    let options = CheckOptions {
        concurrent: true,
        ..Default::default()
    };
    let concurrent = check_dns_records_with(&resolver, DOMAIN, &options)
        .await
        .unwrap();

    assert_eq!(sequential, concurrent);
    assert_eq!(
        kinds(&concurrent),
        vec![RecordKind::Dmarc, RecordKind::Spf, RecordKind::Dkim]
    );
}

#[tokio::test]
async fn test_malformed_domain_still_yields_three_results() {
    let resolver = StubResolver::new();
    let results = check_dns_records(&resolver, "https://").await.unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(resolver.calls()[0], "_dmarc.");
}
