// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Validation profiles
//!
//! A profile fixes the two policy decisions that vary between deployments:
//! which record types are accepted, and whether targets may be hostnames or
//! must be IP literals. The allow-lists are built once at first use and
//! shared process-wide; membership testing is a pure predicate.

use lazy_static::lazy_static;
use std::collections::HashSet;

/// Record types accepted by the canonical profile.
pub const CANONICAL_RECORD_TYPES: &[&str] = &["A", "CNAME"];

/// Record types accepted by the extended profile.
pub const EXTENDED_RECORD_TYPES: &[&str] = &["A", "CNAME", "TXT", "SRV", "NS", "PTR"];

lazy_static! {
    static ref CANONICAL_LOOKUP: HashSet<&'static str> =
        CANONICAL_RECORD_TYPES.iter().copied().collect();
    static ref EXTENDED_LOOKUP: HashSet<&'static str> =
        EXTENDED_RECORD_TYPES.iter().copied().collect();
}

/// What counts as a valid target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetPolicy {
    /// Targets must be IPv4 or IPv6 literals
    IpOnly,
    /// Targets may be IP literals or fully-qualified hostnames
    /// (at least two labels, one trailing dot tolerated)
    #[default]
    IpOrFqdn,
}

/// The policy a validator applies: record-type allow-list plus target rule.
///
/// The canonical profile is the default contract. The extended profile and
/// the stricter [`TargetPolicy::IpOnly`] exist for deployments that need
/// them; pick one explicitly rather than assuming the wider set.
#[derive(Debug, Clone, Copy)]
pub struct ValidationProfile {
    names: &'static [&'static str],
    lookup: &'static HashSet<&'static str>,
    target_policy: TargetPolicy,
}

impl ValidationProfile {
    /// The default contract: record types `A` and `CNAME`, targets may be
    /// IP literals or fully-qualified hostnames.
    pub fn canonical() -> Self {
        Self {
            names: CANONICAL_RECORD_TYPES,
            lookup: &*CANONICAL_LOOKUP,
            target_policy: TargetPolicy::default(),
        }
    }

    /// The wider allow-list: additionally `TXT`, `SRV`, `NS` and `PTR`.
    pub fn extended() -> Self {
        Self {
            names: EXTENDED_RECORD_TYPES,
            lookup: &*EXTENDED_LOOKUP,
            target_policy: TargetPolicy::default(),
        }
    }

    /// Replace the target policy, keeping the record-type allow-list.
    pub fn with_target_policy(mut self, target_policy: TargetPolicy) -> Self {
        self.target_policy = target_policy;
        self
    }

    /// Case-sensitive membership test against the allow-list.
    pub fn supports(&self, record_type: &str) -> bool {
        self.lookup.contains(record_type)
    }

    /// The allow-list in declaration order, for diagnostics.
    pub fn record_types(&self) -> &'static [&'static str] {
        self.names
    }

    /// The target rule this profile applies.
    pub fn target_policy(&self) -> TargetPolicy {
        self.target_policy
    }
}

impl Default for ValidationProfile {
    fn default() -> Self {
        Self::canonical()
    }
}
