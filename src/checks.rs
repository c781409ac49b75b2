// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Primitive field checkers
//!
//! Each function validates one value against one rule and reports against
//! the dotted field path supplied by the caller. All checkers are pure: no
//! I/O, no shared state, no mutation of the input.

use std::collections::HashSet;
use std::net::IpAddr;

use crate::errors::FieldError;
use crate::profile::{TargetPolicy, ValidationProfile};

/// Maximum total length of a DNS name, per RFC 1123.
const MAX_NAME_LEN: usize = 253;

/// Maximum length of a single DNS label.
const MAX_LABEL_LEN: usize = 63;

/// A valid RFC 1123 label: 1-63 lowercase alphanumerics or hyphens, with
/// no leading or trailing hyphen.
fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }
    let bytes = label.as_bytes();
    if bytes[0] == b'-' || bytes[bytes.len() - 1] == b'-' {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}

/// A valid RFC 1123 subdomain: dot-separated valid labels, 253 chars total.
fn is_valid_subdomain(name: &str) -> bool {
    !name.is_empty() && name.len() <= MAX_NAME_LEN && name.split('.').all(is_valid_label)
}

/// Check that `name` is a valid DNS subdomain. Empty names are invalid.
pub fn check_hostname(field: &str, name: &str) -> Result<(), FieldError> {
    if !is_valid_subdomain(name) {
        return Err(FieldError::invalid(
            field,
            name,
            format!(
                "name {name:?} is not a valid DNS subdomain: lowercase alphanumeric \
                 labels of 1-{MAX_LABEL_LEN} chars separated by dots, hyphens allowed \
                 inside a label, at most {MAX_NAME_LEN} chars overall"
            ),
        ));
    }
    Ok(())
}

/// Check that `target` is acceptable under `policy`: an IPv4/IPv6 literal,
/// or (under [`TargetPolicy::IpOrFqdn`]) a fully-qualified hostname.
/// Empty targets are invalid.
pub fn check_target(field: &str, target: &str, policy: TargetPolicy) -> Result<(), FieldError> {
    if target.is_empty() {
        return Err(FieldError::invalid(field, target, "target not provided"));
    }
    if target.parse::<IpAddr>().is_ok() {
        return Ok(());
    }
    match policy {
        TargetPolicy::IpOnly => Err(FieldError::invalid(
            field,
            target,
            format!("target {target:?} is not a valid IP address"),
        )),
        TargetPolicy::IpOrFqdn => check_fully_qualified(field, target),
    }
}

/// A fully-qualified hostname: after stripping one trailing dot, a valid
/// subdomain with at least two labels.
fn check_fully_qualified(field: &str, target: &str) -> Result<(), FieldError> {
    let name = target.strip_suffix('.').unwrap_or(target);
    if !is_valid_subdomain(name) {
        return Err(FieldError::invalid(
            field,
            target,
            format!("target {target:?} is not a valid IP address or hostname"),
        ));
    }
    if name.split('.').count() < 2 {
        return Err(FieldError::invalid(
            field,
            target,
            format!(
                "target {target:?} should be a domain with at least two segments \
                 separated by dots"
            ),
        ));
    }
    Ok(())
}

/// Check that `record_type` is in the profile's allow-list. Case-sensitive.
pub fn check_record_type(
    field: &str,
    record_type: &str,
    profile: &ValidationProfile,
) -> Result<(), FieldError> {
    if !profile.supports(record_type) {
        return Err(FieldError::not_supported(
            field,
            record_type,
            format!(
                "record type {record_type:?} is not supported, expected one of: {}",
                profile.record_types().join(", ")
            ),
        ));
    }
    Ok(())
}

/// Check that `ttl` is strictly positive.
pub fn check_ttl(field: &str, ttl: i64) -> Result<(), FieldError> {
    if ttl <= 0 {
        return Err(FieldError::not_in_range(
            field,
            ttl,
            format!("ttl {ttl} is out of range, ttl value should be > 0"),
        ));
    }
    Ok(())
}

/// Check that no target repeats. Scans in order and reports the second
/// occurrence of the first repeated value, indexed into `field`.
pub fn check_unique_targets(field: &str, targets: &[String]) -> Result<(), FieldError> {
    let mut seen = HashSet::with_capacity(targets.len());
    for (i, target) in targets.iter().enumerate() {
        if !seen.insert(target.as_str()) {
            return Err(FieldError::duplicate(
                format!("{field}[{i}]"),
                target,
                format!("target {target:?} already present, expected unique targets"),
            ));
        }
    }
    Ok(())
}
