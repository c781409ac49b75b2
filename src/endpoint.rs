// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! DNSEndpoint resource types
//!
//! These types mirror the JSON wire schema of the DNSEndpoint custom
//! resource. The CRD layer owns decoding from storage; this crate only ever
//! sees the decoded structures and reads them without mutation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One DNS mapping from a name to one or more targets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// The hostname for the DNS record
    #[serde(default)]
    pub dns_name: String,

    /// The targets the DNS service points to (IP literals or hostnames)
    #[serde(default)]
    pub targets: Vec<String>,

    /// Record type, e.g. "A" or "CNAME"
    #[serde(default)]
    pub record_type: String,

    /// TTL for the record, in seconds
    #[serde(rename = "recordTTL", default)]
    pub record_ttl: i64,

    /// Labels defined for the endpoint
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    /// Provider-specific configuration properties
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provider_specific: Vec<ProviderSpecificProperty>,
}

/// A single provider-specific configuration property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSpecificProperty {
    /// Name of the property
    #[serde(default)]
    pub name: String,

    /// Value of the property
    #[serde(default)]
    pub value: String,
}

/// The spec of a DNSEndpoint resource: the full set of endpoints under
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsEndpointSpec {
    /// The DNS records requested by this resource
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

/// Status reported back by the controller that reconciles the resource.
///
/// Carried for schema completeness; validation never inspects it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsEndpointStatus {
    /// The generation observed by the reconciling controller
    #[serde(default)]
    pub observed_generation: i64,
}

/// The DNSEndpoint resource as handed to admission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsEndpoint {
    /// Desired DNS records
    #[serde(default)]
    pub spec: DnsEndpointSpec,

    /// Last reported reconciliation status
    #[serde(default, skip_serializing_if = "is_default_status")]
    pub status: DnsEndpointStatus,
}

fn is_default_status(status: &DnsEndpointStatus) -> bool {
    status.observed_generation == 0
}
