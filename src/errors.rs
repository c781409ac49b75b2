// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Validation error types
//!
//! Every rejected resource produces exactly one [`FieldError`]: a violation
//! kind, the dotted path of the offending field, the offending value (when
//! there is one), and a human-readable detail. Callers match on the kind;
//! the detail string is for display only and carries no contract.

use thiserror::Error;

/// Classification of a validation failure.
///
/// This is a closed set: downstream consumers (admission webhooks, status
/// controllers) match on it to decide how to render or react to a failure
/// without parsing the detail text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// The value is well formed but not in the supported allow-list
    #[error("type not supported")]
    NotSupported,

    /// The value fails syntactic or structural rules
    #[error("type invalid")]
    Invalid,

    /// The value repeats where uniqueness is required
    #[error("type duplicated")]
    Duplicate,

    /// A mandatory collection is empty
    #[error("type required")]
    Required,

    /// A numeric value violates a bound
    #[error("type not in range")]
    NotInRange,
}

/// A single validation violation, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: field \"{field}\": {detail}")]
pub struct FieldError {
    kind: ErrorKind,
    field: String,
    value: Option<String>,
    detail: String,
}

impl FieldError {
    fn new(
        kind: ErrorKind,
        field: impl Into<String>,
        value: Option<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            field: field.into(),
            value,
            detail: detail.into(),
        }
    }

    /// A mandatory collection at `field` is empty.
    pub fn required(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Required, field, None, detail)
    }

    /// The value at `field` fails syntactic or structural rules.
    pub fn invalid(
        field: impl Into<String>,
        value: impl ToString,
        detail: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::Invalid, field, Some(value.to_string()), detail)
    }

    /// The value at `field` is not in the supported allow-list.
    pub fn not_supported(
        field: impl Into<String>,
        value: impl ToString,
        detail: impl Into<String>,
    ) -> Self {
        Self::new(
            ErrorKind::NotSupported,
            field,
            Some(value.to_string()),
            detail,
        )
    }

    /// The value at `field` repeats where uniqueness is required.
    pub fn duplicate(
        field: impl Into<String>,
        value: impl ToString,
        detail: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::Duplicate, field, Some(value.to_string()), detail)
    }

    /// The numeric value at `field` violates a bound.
    pub fn not_in_range(
        field: impl Into<String>,
        value: impl ToString,
        detail: impl Into<String>,
    ) -> Self {
        Self::new(
            ErrorKind::NotInRange,
            field,
            Some(value.to_string()),
            detail,
        )
    }

    /// The violation class.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Dotted path of the offending field, in wire (camelCase) form,
    /// e.g. `endpoints[2].targets[1]`.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The offending value, stringified. `None` for violations without a
    /// single offending value (e.g. an empty required collection).
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Human-readable description of the violation.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Resource-level validation failure returned by the public entry point.
///
/// Wraps the underlying [`FieldError`] with a fixed prefix identifying the
/// failing operation while keeping the cause reachable, so callers can still
/// match on [`ErrorKind`] after wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error validating DNSEndpoint: {source}")]
pub struct ValidationError {
    #[source]
    source: FieldError,
}

impl ValidationError {
    /// The violation class of the underlying field error.
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }

    /// The underlying field error.
    pub fn field_error(&self) -> &FieldError {
        &self.source
    }

    /// Unwrap into the underlying field error.
    pub fn into_field_error(self) -> FieldError {
        self.source
    }
}

impl From<FieldError> for ValidationError {
    fn from(source: FieldError) -> Self {
        Self { source }
    }
}
