// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error type tests for cruise-control-sdk.

use cruise_control_sdk::{ApiError, SdkError};

#[test]
fn test_config_error_display() {
    let err = SdkError::Config("missing server URL".to_string());
    assert!(err.to_string().contains("configuration error"));
    assert!(err.to_string().contains("missing server URL"));
}

#[test]
fn test_invalid_request_display() {
    let err = SdkError::InvalidRequest("list of brokers must not be empty".to_string());
    assert_eq!(
        err.to_string(),
        "invalid request: list of brokers must not be empty"
    );
}

#[test]
fn test_encode_error_conversion() {
    let encode_err = cruise_control_params::EncodeError::MaxRecursion { limit: 5 };
    let err: SdkError = encode_err.into();
    assert!(matches!(err, SdkError::Encode(_)));
    assert!(err.to_string().contains("failed to encode API request"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: SdkError = json_err.into();
    assert!(matches!(err, SdkError::Serialization(_)));
}

#[test]
fn test_servlet_api_error_display() {
    let err = ApiError {
        message: "Not Found".to_string(),
        servlet: "KafkaCruiseControlServlet".to_string(),
        url: "/kafkacruisecontrol/nope".to_string(),
        status: "404".to_string(),
        ..Default::default()
    };
    assert_eq!(
        err.to_string(),
        "404 - Not Found (url: /kafkacruisecontrol/nope, servlet: KafkaCruiseControlServlet)"
    );
}

#[test]
fn test_cruise_control_api_error_display() {
    let err = ApiError {
        error_message: "Broker 9 does not exist.".to_string(),
        stack_trace: "java.lang.IllegalArgumentException".to_string(),
        ..Default::default()
    };
    assert_eq!(err.to_string(), "Broker 9 does not exist.");

    let sdk_err = SdkError::from(err);
    assert_eq!(
        sdk_err.to_string(),
        "HTTP request failed: Broker 9 does not exist."
    );
}

#[test]
fn test_api_error_from_json() {
    let err: ApiError = serde_json::from_str(
        r#"{"message":"Unauthorized","status":"401","url":"/kafkacruisecontrol/state","servlet":"s"}"#,
    )
    .unwrap();
    assert_eq!(err.status, "401");
    assert!(err.error_message.is_empty());
}
