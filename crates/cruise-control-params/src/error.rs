// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for cruise-control-params.

use thiserror::Error;

/// Result type using EncodeError.
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Boxed error returned by custom marshalers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that abort an encode call.
///
/// Shape errors (a value with no encoding strategy, a map key that cannot be
/// stringified) are rejected by the trait bounds of [`EncodeParams`] at
/// compile time and therefore have no runtime variant.
///
/// [`EncodeParams`]: crate::EncodeParams
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The value graph nests composites deeper than the configured budget.
    #[error("encoder: reached max recursion depth of {limit}")]
    MaxRecursion { limit: u32 },

    /// A field annotation could not be parsed.
    #[error("invalid param annotation on field `{field}`: {source}")]
    Annotation {
        field: String,
        #[source]
        source: AnnotationError,
    },

    /// A custom marshaler reported a failure.
    #[error("params: marshaling data for key {key} has failed: {source}")]
    Marshal {
        key: String,
        #[source]
        source: BoxError,
    },
}

impl EncodeError {
    /// Wrap an annotation error with the name of the offending field.
    pub fn annotation(field: impl Into<String>, source: AnnotationError) -> Self {
        EncodeError::Annotation {
            field: field.into(),
            source,
        }
    }

    /// Wrap a marshaler failure with the key it was producing.
    pub fn marshal(key: impl Into<String>, source: impl Into<BoxError>) -> Self {
        EncodeError::Marshal {
            key: key.into(),
            source: source.into(),
        }
    }
}

/// Errors produced while parsing a `key,flag,...` field annotation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    /// The annotation string was empty.
    #[error("annotation must not be empty string")]
    Empty,

    /// A flag between two delimiters was empty.
    #[error("annotation flag must not be empty string")]
    EmptyFlag,

    /// A flag other than `omitempty` was given.
    #[error("annotation flag is not supported: {0}")]
    UnsupportedFlag(String),
}
