// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Response envelope decoding.
//!
//! Cruise Control answers `200` with the result, `202` with a progress report
//! for a user task that is still running, and anything else with an error
//! payload.

use std::fmt;

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, DATE, HeaderMap};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::content_type::ContentType;
use crate::error::{Result, SdkError};

/// Header carrying the id of the user task serving the request.
pub const USER_TASK_ID_HEADER: &str = "User-Task-ID";
/// Header carrying the server version.
pub const CRUISE_CONTROL_VERSION_HEADER: &str = "Cruise-Control-Version";

/// Error payload returned by Cruise Control or by the servlet container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiError {
    pub stack_trace: String,
    pub error_message: String,
    pub message: String,
    pub servlet: String,
    pub url: String,
    #[serde(deserialize_with = "string_or_number")]
    pub status: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            return f.write_str(&self.error_message);
        }
        write!(
            f,
            "{} - {} (url: {}, servlet: {})",
            self.status, self.message, self.url, self.servlet
        )
    }
}

impl std::error::Error for ApiError {}

pub(crate) fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Progress of a user task that has not finished yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressResult {
    pub version: i32,
    pub progress: Vec<OperationProgress>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationProgress {
    pub operation: String,
    pub operation_progress: Vec<ProgressStep>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressStep {
    pub step: String,
    pub description: String,
    #[serde(rename = "time-in-ms")]
    pub time_in_ms: f64,
    #[serde(rename = "completionPercentage")]
    pub completion_percentage: f64,
}

/// Body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody<T> {
    /// The operation finished and this is its result.
    Completed(T),
    /// The operation is still running; poll again with the task id.
    InProgress(ProgressResult),
}

/// Decoded response together with its metadata headers.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub task_id: Option<String>,
    pub cruise_control_version: Option<String>,
    pub date: Option<String>,
    pub body: ResponseBody<T>,
}

impl<T> ApiResponse<T> {
    pub fn in_progress(&self) -> bool {
        matches!(self.body, ResponseBody::InProgress(_))
    }

    /// The result, if the operation finished.
    pub fn result(&self) -> Option<&T> {
        match &self.body {
            ResponseBody::Completed(result) => Some(result),
            ResponseBody::InProgress(_) => None,
        }
    }

    pub fn into_result(self) -> Option<T> {
        match self.body {
            ResponseBody::Completed(result) => Some(result),
            ResponseBody::InProgress(_) => None,
        }
    }

    /// The `Date` header as a timestamp, if present and well-formed.
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        let date = self.date.as_deref()?;
        DateTime::parse_from_rfc2822(date)
            .ok()
            .map(|date| date.with_timezone(&Utc))
    }

    pub fn progress(&self) -> Option<&ProgressResult> {
        match &self.body {
            ResponseBody::Completed(_) => None,
            ResponseBody::InProgress(progress) => Some(progress),
        }
    }
}

/// Decode a raw response.
///
/// Non-JSON bodies are rejected before the status code is looked at; error
/// statuses become [`SdkError::Api`].
pub fn decode_response<T>(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<ApiResponse<T>>
where
    T: DeserializeOwned,
{
    let content_type = header(headers, CONTENT_TYPE.as_str())
        .map(|value| ContentType::parse(&value))
        .unwrap_or_default();
    if !content_type.is_json() {
        return Err(SdkError::UnexpectedResponse(format!(
            "content type mismatch: expected application/json, got '{content_type}' (status {status})"
        )));
    }

    let task_id = header(headers, USER_TASK_ID_HEADER);
    debug!(status = status.as_u16(), task_id = ?task_id, "decoding response");

    let body = match status {
        StatusCode::OK => ResponseBody::Completed(parse_json(body)?),
        StatusCode::ACCEPTED => ResponseBody::InProgress(parse_json(body)?),
        _ => {
            let error: ApiError = parse_json(body)?;
            return Err(error.into());
        }
    };

    Ok(ApiResponse {
        task_id,
        cruise_control_version: header(headers, CRUISE_CONTROL_VERSION_HEADER),
        date: header(headers, DATE.as_str()),
        body,
    })
}

fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|e| SdkError::Serialization(format!("failed to parse JSON response: {e}")))
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
