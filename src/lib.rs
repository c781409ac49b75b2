// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! dnsadmit - admission-time validation for DNSEndpoint resources
//!
//! A small library that validates declarative DNS records (a named host plus
//! one or more targets, a record type, and a TTL) before they are accepted
//! into a cluster-managed configuration store, so malformed data is rejected
//! at admission time instead of propagating into an external DNS provider.
//!
//! # Features
//!
//! - Pure, synchronous, fail-fast validation — no I/O, no mutation
//! - Structured field errors: violation kind, dotted field path, offending
//!   value, human-readable detail
//! - A closed error taxonomy callers can match on without string parsing
//! - Configurable validation profiles (record-type allow-list, target policy)
//! - Independent primitive checkers, usable on their own
//!
//! # Usage
//!
//! ## Validating a resource
//!
//! ```rust
//! use dnsadmit::{validate_dns_endpoint, DnsEndpoint, DnsEndpointSpec, Endpoint};
//!
//! let resource = DnsEndpoint {
//!     spec: DnsEndpointSpec {
//!         endpoints: vec![Endpoint {
//!             dns_name: "example.com".to_string(),
//!             targets: vec!["10.2.2.3".to_string()],
//!             record_type: "A".to_string(),
//!             record_ttl: 600,
//!             ..Default::default()
//!         }],
//!     },
//!     ..Default::default()
//! };
//!
//! assert!(validate_dns_endpoint(&resource).is_ok());
//! ```
//!
//! ## Matching on the violation kind
//!
//! ```rust
//! use dnsadmit::{validate_dns_endpoint, DnsEndpoint, ErrorKind};
//!
//! // An empty resource is missing its endpoint list
//! let err = validate_dns_endpoint(&DnsEndpoint::default()).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Required);
//! assert_eq!(err.field_error().field(), "endpoints");
//! ```
//!
//! ## Choosing a profile
//!
//! ```rust
//! use dnsadmit::{DnsEndpointValidator, ValidationProfile};
//!
//! // Accept TXT, SRV, NS and PTR in addition to A and CNAME
//! let validator = DnsEndpointValidator::new(ValidationProfile::extended());
//! assert!(validator.profile().supports("TXT"));
//! ```
//!
//! # Integration
//!
//! The caller (admission webhook, status-reporting controller loop) owns
//! decoding the resource from its wire form; the types in [`endpoint`]
//! deserialize the CRD's camelCase JSON directly via serde. The validator
//! reads the decoded resource and returns either nothing or one classified
//! error; it keeps no state between calls and is safe to invoke
//! concurrently across independent resources.

// Re-export public modules
pub mod checks;
pub mod endpoint;
pub mod errors;
pub mod profile;
pub mod validate;

// Resource types
pub use endpoint::{
    DnsEndpoint, DnsEndpointSpec, DnsEndpointStatus, Endpoint, ProviderSpecificProperty,
};

// Error types
pub use errors::{ErrorKind, FieldError, ValidationError};

// Profiles
pub use profile::{TargetPolicy, ValidationProfile};

// Validator and entry point
pub use validate::{validate_dns_endpoint, DnsEndpointValidator};

// Test modules
#[cfg(test)]
mod checks_test;
