// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for cruise-control-sdk.

use cruise_control_params::EncodeError;
use thiserror::Error;

use crate::response::ApiError;

/// Result type using SdkError.
pub type Result<T> = std::result::Result<T, SdkError>;

/// Errors that can occur when using the Cruise Control SDK.
#[derive(Debug, Error)]
pub enum SdkError {
    /// Configuration error (missing or invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Request could not be turned into query parameters.
    #[error("failed to encode API request to HTTP query parameters: {0}")]
    Encode(#[from] EncodeError),

    /// Request failed its business-rule validation.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Transport-level failure.
    #[error("sending HTTP request failed: {0}")]
    Http(String),

    /// Cruise Control answered with an error payload.
    #[error("HTTP request failed: {0}")]
    Api(ApiError),

    /// Unexpected response from server.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl SdkError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        SdkError::InvalidRequest(message.into())
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(err: reqwest::Error) -> Self {
        SdkError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        SdkError::Serialization(err.to_string())
    }
}

impl From<ApiError> for SdkError {
    fn from(err: ApiError) -> Self {
        SdkError::Api(err)
    }
}
