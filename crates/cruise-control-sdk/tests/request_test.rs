// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Request encoding as it reaches the query string.

use cruise_control_sdk::{
    AdminRequest, AnomalyType, ApiRequest, BrokerIdAndLogDirs, ClientConfig, DemoteBrokerRequest,
    Endpoint, GenericRequestWithReason, QueryPolicy, RemoveBrokerRequest, RequestPreparer,
    StateRequest, parse_query, to_params, to_query_string,
};

#[test]
fn test_remove_broker_scenario() {
    let request = RemoveBrokerRequest {
        broker_ids: vec![2, 3],
        dry_run: true,
        ..Default::default()
    };
    let params = to_params(&request).unwrap();

    assert_eq!(params.values("brokerid"), ["2", "3"]);
    assert_eq!(params.values("dryrun"), ["true"]);
    assert!(!params.contains_key("reason"));
    assert_eq!(params.get("allow_capacity_estimation"), Some("false"));
}

#[test]
fn test_reason_is_merged_at_root() {
    let request = DemoteBrokerRequest {
        common: GenericRequestWithReason::with_reason("rolling upgrade"),
        broker_ids: vec![1],
        ..DemoteBrokerRequest::with_defaults()
    };
    let params = to_params(&request).unwrap();

    assert_eq!(params.get("reason"), Some("rolling upgrade"));
    assert!(!params.contains_key("common"));
    assert!(!params.contains_key("json"));
}

#[test]
fn test_query_round_trip() {
    let request = AdminRequest {
        disable_self_healing_for: vec![AnomalyType::BrokerFailure, AnomalyType::DiskFailure],
        drop_recently_demoted_brokers: vec![5, 6, 7],
        review_id: 4,
        ..AdminRequest::with_defaults()
    };
    let params = to_params(&request).unwrap();

    let query = to_query_string(&params, QueryPolicy::RepeatedKeys);
    assert_eq!(parse_query(&query).unwrap(), params);
}

#[test]
fn test_comma_joined_query_parses_to_joined_values() {
    let request = StateRequest::with_defaults();
    let params = to_params(&request).unwrap();

    let query = to_query_string(&params, QueryPolicy::CommaJoined);
    let parsed = parse_query(&query).unwrap();
    assert_eq!(
        parsed.values("substates"),
        ["ANALYZER,ANOMALY_DETECTOR,EXECUTOR,MONITOR"]
    );
}

#[test]
fn test_log_dirs_in_prepared_url() {
    let request = DemoteBrokerRequest {
        broker_ids: vec![0],
        broker_id_and_log_dirs: BrokerIdAndLogDirs::new().with(0, ["/var/lib/kafka"]),
        ..DemoteBrokerRequest::with_defaults()
    };
    let preparer = RequestPreparer::new(&ClientConfig::default()).unwrap();
    let prepared = preparer.prepare(&request).unwrap();

    let parsed = parse_query(prepared.url.query().unwrap_or_default()).unwrap();
    assert_eq!(parsed.get("brokerid_and_logdirs"), Some("0-/var/lib/kafka"));
    assert_eq!(parsed.get("json"), Some("true"));
    assert_eq!(prepared.url.path(), "/kafkacruisecontrol/demote_broker");
}

#[test]
fn test_endpoints_of_requests() {
    assert_eq!(RemoveBrokerRequest::ENDPOINT, Endpoint::RemoveBroker);
    assert_eq!(StateRequest::ENDPOINT, Endpoint::State);
    assert_eq!(AdminRequest::ENDPOINT, Endpoint::Admin);
}

#[test]
fn test_admin_rejects_disabling_unsupported_anomaly() {
    let request = AdminRequest {
        disable_self_healing_for: vec![AnomalyType::MaintenanceEvent],
        ..AdminRequest::with_defaults()
    };
    let err = request.validate().unwrap_err();
    assert!(err.to_string().contains("disabling"));
}
