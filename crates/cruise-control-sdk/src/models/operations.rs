// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Results of the administrative endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::types::AnomalyType;

/// Plain acknowledgement returned by BOOTSTRAP, TRAIN, PAUSE_SAMPLING,
/// RESUME_SAMPLING and STOP_PROPOSAL_EXECUTION.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResult {
    pub version: i32,
    pub message: String,
}

/// Settings before and after an ADMIN request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminResult {
    pub version: i32,
    pub self_healing_enabled_before: BTreeMap<AnomalyType, bool>,
    pub self_healing_enabled_after: BTreeMap<AnomalyType, bool>,
    pub ongoing_concurrency_change_request: String,
    pub drop_recent_brokers_request: String,
    pub concurrency_adjuster_enabled_before: BTreeMap<String, bool>,
    pub concurrency_adjuster_enabled_after: BTreeMap<String, bool>,
    pub min_isr_based_concurrency_adjustment_request: String,
}

/// Requests known to the review board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewResult {
    pub version: i32,
    #[serde(rename = "RequestInfo")]
    pub request_info: Vec<RequestInfo>,
}

impl ReviewResult {
    pub fn request(&self, id: i32) -> Option<&RequestInfo> {
        self.request_info.iter().find(|request| request.id == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RequestInfo {
    pub id: i32,
    pub submitter_address: String,
    pub submission_time_ms: i64,
    pub status: RequestStatus,
    pub endpoint_with_params: String,
    #[serde(alias = "reason")]
    pub reason: String,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    PendingReview,
    Approved,
    Submitted,
    Discarded,
    #[default]
    #[serde(other)]
    Undefined,
}

/// Provisioning decision of a RIGHTSIZE request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RightsizeResult {
    pub version: i32,
    pub num_brokers_to_add: i32,
    pub partition_count: i32,
    pub topic: String,
    pub provisioner_state: ProvisionerState,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProvisionerState {
    Completed,
    CompletedWithError,
    InProgress,
    #[default]
    #[serde(other)]
    Undefined,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_result() {
        let result: AdminResult = serde_json::from_value(serde_json::json!({
            "version": 1,
            "selfHealingEnabledBefore": {"BROKER_FAILURE": false, "DISK_FAILURE": true},
            "selfHealingEnabledAfter": {"BROKER_FAILURE": true, "DISK_FAILURE": true},
            "ongoingConcurrencyChangeRequest": "",
        }))
        .unwrap();

        assert!(!result.self_healing_enabled_before[&AnomalyType::BrokerFailure]);
        assert!(result.self_healing_enabled_after[&AnomalyType::BrokerFailure]);
        assert!(result.concurrency_adjuster_enabled_after.is_empty());
    }

    #[test]
    fn test_review_result() {
        let result: ReviewResult = serde_json::from_value(serde_json::json!({
            "version": 1,
            "RequestInfo": [{
                "Id": 4,
                "SubmitterAddress": "10.0.0.7",
                "SubmissionTimeMs": 1700000000000i64,
                "Status": "PENDING_REVIEW",
                "EndpointWithParams": "POST /kafkacruisecontrol/rebalance?dryrun=false",
                "Reason": "scale out"
            }, {
                "Id": 5,
                "Status": "EXPIRED",
                "reason": "typo"
            }]
        }))
        .unwrap();

        let pending = result.request(4).unwrap();
        assert_eq!(pending.status, RequestStatus::PendingReview);
        assert_eq!(pending.reason, "scale out");
        let other = result.request(5).unwrap();
        assert_eq!(other.status, RequestStatus::Undefined);
        assert_eq!(other.reason, "typo");
        assert!(result.request(6).is_none());
    }

    #[test]
    fn test_rightsize_result() {
        let result: RightsizeResult = serde_json::from_value(serde_json::json!({
            "numBrokersToAdd": 2,
            "partitionCount": 0,
            "topic": "orders",
            "provisionerState": "COMPLETED_WITH_ERROR",
        }))
        .unwrap();

        assert_eq!(result.num_brokers_to_add, 2);
        assert_eq!(result.provisioner_state, ProvisionerState::CompletedWithError);
    }
}
