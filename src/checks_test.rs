// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the primitive checkers

use super::checks::*;
use super::errors::ErrorKind;
use super::profile::{TargetPolicy, ValidationProfile};

#[test]
fn test_check_hostname_accepts_valid_names() {
    assert!(check_hostname("dnsName", "example.com").is_ok());
    assert!(check_hostname("dnsName", "www.example.com").is_ok());
    assert!(check_hostname("dnsName", "a").is_ok());
    assert!(check_hostname("dnsName", "my-app.example.com").is_ok());
    assert!(check_hostname("dnsName", "0.example.com").is_ok());
    assert!(check_hostname("dnsName", "xn--nxasmq6b.example.com").is_ok());
}

#[test]
fn test_check_hostname_rejects_empty_name() {
    let err = check_hostname("dnsName", "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Invalid);
    assert_eq!(err.field(), "dnsName");
    assert_eq!(err.value(), Some(""));
}

#[test]
fn test_check_hostname_rejects_bad_syntax() {
    // Empty labels from consecutive or trailing dots
    assert!(check_hostname("dnsName", "abc.example...").is_err());
    assert!(check_hostname("dnsName", "example.com.").is_err());
    assert!(check_hostname("dnsName", ".example.com").is_err());
    // Hyphen placement
    assert!(check_hostname("dnsName", "-leading.example.com").is_err());
    assert!(check_hostname("dnsName", "trailing-.example.com").is_err());
    // Character class
    assert!(check_hostname("dnsName", "Example.com").is_err());
    assert!(check_hostname("dnsName", "under_score.example.com").is_err());
    assert!(check_hostname("dnsName", "spaced name.example.com").is_err());
}

#[test]
fn test_check_hostname_label_length_boundary() {
    let max_label = "a".repeat(63);
    assert!(check_hostname("dnsName", &format!("{max_label}.example.com")).is_ok());

    let too_long = "a".repeat(64);
    let err = check_hostname("dnsName", &format!("{too_long}.example.com")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Invalid);
}

#[test]
fn test_check_hostname_total_length_boundary() {
    // Three 63-char labels plus one 61-char label: 253 chars including dots
    let label = "a".repeat(63);
    let name_253 = format!("{label}.{label}.{label}.{}", "a".repeat(61));
    assert_eq!(name_253.len(), 253);
    assert!(check_hostname("dnsName", &name_253).is_ok());

    let name_254 = format!("{label}.{label}.{label}.{}", "a".repeat(62));
    assert_eq!(name_254.len(), 254);
    assert!(check_hostname("dnsName", &name_254).is_err());
}

#[test]
fn test_check_target_accepts_ip_literals() {
    assert!(check_target("targets[0]", "10.2.2.3", TargetPolicy::IpOrFqdn).is_ok());
    assert!(check_target("targets[0]", "192.0.2.1", TargetPolicy::IpOnly).is_ok());
    assert!(check_target("targets[0]", "2001:db8::1", TargetPolicy::IpOrFqdn).is_ok());
    assert!(check_target("targets[0]", "::1", TargetPolicy::IpOnly).is_ok());
}

#[test]
fn test_check_target_accepts_fqdn_under_fqdn_policy() {
    assert!(check_target("targets[0]", "acme.com", TargetPolicy::IpOrFqdn).is_ok());
    assert!(check_target("targets[0]", "cdn.acme.com", TargetPolicy::IpOrFqdn).is_ok());
    // One trailing dot is tolerated
    assert!(check_target("targets[0]", "acme.com.", TargetPolicy::IpOrFqdn).is_ok());
}

#[test]
fn test_check_target_rejects_single_label_hostname() {
    let err = check_target("targets[0]", "bogusTargetName", TargetPolicy::IpOrFqdn).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Invalid);

    let err = check_target("targets[0]", "localhost", TargetPolicy::IpOrFqdn).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Invalid);
    // Trailing dot does not turn a single label into an FQDN
    assert!(check_target("targets[0]", "localhost.", TargetPolicy::IpOrFqdn).is_err());
}

#[test]
fn test_check_target_rejects_malformed_ips_under_ip_only() {
    // Out-of-range octets do not parse as IP literals. Under IpOrFqdn these
    // strings would still pass as multi-label hostnames, so the strict
    // policy is the one that catches them.
    assert!(check_target("targets[0]", "10.12.34.1111", TargetPolicy::IpOnly).is_err());
    assert!(check_target("targets[0]", "1000.1.1.1", TargetPolicy::IpOnly).is_err());
}

#[test]
fn test_check_target_rejects_empty_target() {
    let err = check_target("targets[0]", "", TargetPolicy::IpOrFqdn).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Invalid);
    assert_eq!(err.detail(), "target not provided");
}

#[test]
fn test_check_target_ip_only_rejects_hostnames() {
    let err = check_target("targets[0]", "acme.com", TargetPolicy::IpOnly).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Invalid);
    assert_eq!(err.value(), Some("acme.com"));
}

#[test]
fn test_check_record_type_canonical_allow_list() {
    let profile = ValidationProfile::canonical();
    assert!(check_record_type("recordType", "A", &profile).is_ok());
    assert!(check_record_type("recordType", "CNAME", &profile).is_ok());

    let err = check_record_type("recordType", "TXT", &profile).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotSupported);
    assert_eq!(err.value(), Some("TXT"));
}

#[test]
fn test_check_record_type_extended_allow_list() {
    let profile = ValidationProfile::extended();
    for rtype in ["A", "CNAME", "TXT", "SRV", "NS", "PTR"] {
        assert!(check_record_type("recordType", rtype, &profile).is_ok());
    }
    assert!(check_record_type("recordType", "MX", &profile).is_err());
}

#[test]
fn test_check_record_type_is_case_sensitive() {
    let profile = ValidationProfile::canonical();
    let err = check_record_type("recordType", "a", &profile).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotSupported);
    assert!(check_record_type("recordType", "cname", &profile).is_err());
}

#[test]
fn test_check_ttl_boundaries() {
    assert!(check_ttl("recordTTL", 1).is_ok());
    assert!(check_ttl("recordTTL", 3600).is_ok());

    let err = check_ttl("recordTTL", 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotInRange);
    assert_eq!(err.value(), Some("0"));

    let err = check_ttl("recordTTL", -1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotInRange);
}

#[test]
fn test_check_unique_targets_accepts_unique() {
    let targets = vec![
        "10.2.2.3".to_string(),
        "10.2.2.4".to_string(),
        "acme.com".to_string(),
    ];
    assert!(check_unique_targets("targets", &targets).is_ok());
    assert!(check_unique_targets("targets", &[]).is_ok());
}

#[test]
fn test_check_unique_targets_cites_second_occurrence() {
    let targets = vec![
        "acme.com".to_string(),
        "10.2.2.3".to_string(),
        "acme.com".to_string(),
    ];
    let err = check_unique_targets("endpoints[0].targets", &targets).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Duplicate);
    assert_eq!(err.field(), "endpoints[0].targets[2]");
    assert_eq!(err.value(), Some("acme.com"));
}

#[test]
fn test_check_unique_targets_reports_first_repeat_in_scan_order() {
    let targets = vec![
        "a.example.com".to_string(),
        "b.example.com".to_string(),
        "b.example.com".to_string(),
        "a.example.com".to_string(),
    ];
    let err = check_unique_targets("targets", &targets).unwrap_err();
    assert_eq!(err.field(), "targets[2]");
    assert_eq!(err.value(), Some("b.example.com"));
}
