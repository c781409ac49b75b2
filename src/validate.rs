// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! DNSEndpoint resource validation
//!
//! Composes the primitive checkers over a whole resource: spec-level
//! required invariant first, then every endpoint in sequence order, then
//! every field within an endpoint. Validation is fail-fast: the first
//! violation found is the one returned, wrapped in a resource-level
//! [`ValidationError`] that keeps the underlying classification matchable.

use tracing::debug;

use crate::checks::{
    check_hostname, check_record_type, check_target, check_ttl, check_unique_targets,
};
use crate::endpoint::{DnsEndpoint, DnsEndpointSpec, Endpoint};
use crate::errors::{FieldError, ValidationError};
use crate::profile::ValidationProfile;

/// Validates DNSEndpoint resources against a fixed [`ValidationProfile`].
///
/// Stateless apart from the profile: a single validator may be shared
/// freely across threads and invocations.
#[derive(Debug, Clone, Copy, Default)]
pub struct DnsEndpointValidator {
    profile: ValidationProfile,
}

impl DnsEndpointValidator {
    /// Create a validator applying `profile`.
    pub fn new(profile: ValidationProfile) -> Self {
        Self { profile }
    }

    /// The profile this validator applies.
    pub fn profile(&self) -> &ValidationProfile {
        &self.profile
    }

    /// Validate a whole DNSEndpoint resource.
    ///
    /// Returns `Ok(())` when every endpoint passes, otherwise the first
    /// violation found in traversal order.
    pub fn validate(&self, resource: &DnsEndpoint) -> Result<(), ValidationError> {
        debug!(
            endpoints = resource.spec.endpoints.len(),
            "validating DNSEndpoint"
        );
        match self.validate_spec(&resource.spec) {
            Ok(()) => {
                debug!("DNSEndpoint accepted");
                Ok(())
            }
            Err(err) => {
                // Rejection is a normal outcome here, not a process fault
                debug!(kind = %err.kind(), field = err.field(), "DNSEndpoint rejected");
                Err(ValidationError::from(err))
            }
        }
    }

    /// A spec must carry at least one endpoint; each endpoint is then
    /// validated in sequence order, fail-fast.
    fn validate_spec(&self, spec: &DnsEndpointSpec) -> Result<(), FieldError> {
        if spec.endpoints.is_empty() {
            return Err(FieldError::required(
                "endpoints",
                "no endpoints supplied, expected a list of endpoints",
            ));
        }
        for (i, endpoint) in spec.endpoints.iter().enumerate() {
            self.validate_endpoint(&format!("endpoints[{i}]"), endpoint)?;
        }
        Ok(())
    }

    /// Field order is fixed for deterministic reporting: dnsName, targets
    /// (presence, then per-target syntax, then uniqueness), recordType,
    /// recordTTL.
    fn validate_endpoint(&self, field: &str, endpoint: &Endpoint) -> Result<(), FieldError> {
        check_hostname(&format!("{field}.dnsName"), &endpoint.dns_name)?;
        if endpoint.targets.is_empty() {
            return Err(FieldError::required(
                format!("{field}.targets"),
                "no targets supplied, expected a list of targets",
            ));
        }
        for (i, target) in endpoint.targets.iter().enumerate() {
            check_target(
                &format!("{field}.targets[{i}]"),
                target,
                self.profile.target_policy(),
            )?;
        }
        check_unique_targets(&format!("{field}.targets"), &endpoint.targets)?;
        check_record_type(
            &format!("{field}.recordType"),
            &endpoint.record_type,
            &self.profile,
        )?;
        check_ttl(&format!("{field}.recordTTL"), endpoint.record_ttl)?;
        Ok(())
    }
}

/// Validate a DNSEndpoint resource under the default (canonical) profile.
pub fn validate_dns_endpoint(resource: &DnsEndpoint) -> Result<(), ValidationError> {
    DnsEndpointValidator::default().validate(resource)
}
