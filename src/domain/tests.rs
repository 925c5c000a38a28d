// Domain module tests.

use super::*;

#[test]
fn test_normalize_full_url() {
    assert_eq!(
        normalize_domain("https://www.example.com/path?x=1"),
        "example.com"
    );
}

#[test]
fn test_normalize_bare_domain_unchanged() {
    assert_eq!(normalize_domain("example.com"), "example.com");
}

#[test]
fn test_normalize_preserves_casing_after_www() {
    assert_eq!(normalize_domain("WWW.Example.com"), "Example.com");
}

#[test]
fn test_normalize_scheme_case_insensitive() {
    assert_eq!(normalize_domain("HTTPS://Example.com"), "Example.com");
    assert_eq!(normalize_domain("Http://www.example.com/"), "example.com");
}

#[test]
fn test_normalize_http_scheme() {
    assert_eq!(normalize_domain("http://example.com"), "example.com");
}

#[test]
fn test_normalize_only_leading_www_is_stripped() {
    // "www." inside the name is part of the domain
    assert_eq!(normalize_domain("mail.www.example.com"), "mail.www.example.com");
    // A second "www." survives because only one prefix is dropped
    assert_eq!(normalize_domain("www.www.example.com"), "www.example.com");
}

#[test]
fn test_normalize_www_before_scheme_is_not_reordered() {
    // Scheme must come first; "www.https://" is not a recognised prefix pair
    assert_eq!(normalize_domain("www.https://example.com"), "https:");
}

#[test]
fn test_normalize_drops_path_query_and_fragment() {
    assert_eq!(
        normalize_domain("example.com/a/b?c=d#frag"),
        "example.com"
    );
}

#[test]
fn test_normalize_keeps_port_and_query_without_slash() {
    // Only the first '/' truncates
    assert_eq!(normalize_domain("example.com:8080"), "example.com:8080");
    assert_eq!(normalize_domain("example.com?x=1"), "example.com?x=1");
}

#[test]
fn test_normalize_empty_and_degenerate_inputs() {
    assert_eq!(normalize_domain(""), "");
    assert_eq!(normalize_domain("https://"), "");
    assert_eq!(normalize_domain("/path"), "");
    assert_eq!(normalize_domain("https://www./x"), "");
}

#[test]
fn test_normalize_subdomain_kept() {
    assert_eq!(
        normalize_domain("https://mail.example.co.uk/login"),
        "mail.example.co.uk"
    );
}
