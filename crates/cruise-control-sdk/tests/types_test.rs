// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Wire names of the parameter types.

use std::str::FromStr;

use cruise_control_sdk::{
    AnomalyType, ConcurrencyType, Endpoint, Goal, ProposalDataSource, ReplicaMovementStrategy,
    ResourceType, Substate, UserTaskStatus, to_params,
};
use cruise_control_sdk::Params;
use strum::VariantNames;

#[test]
fn test_goal_names() {
    assert_eq!(Goal::RackAwareGoal.to_string(), "RackAwareGoal");
    assert_eq!(Goal::Undefined.to_string(), "UndefinedGoal");
    assert_eq!(
        Goal::from_str("NetworkInboundCapacityGoal").unwrap(),
        Goal::NetworkInboundCapacityGoal
    );
    assert!(Goal::VARIANTS.contains(&"PreferredLeaderElectionGoal"));
}

#[test]
fn test_goal_serde() {
    let goal: Goal = serde_json::from_str("\"CpuCapacityGoal\"").unwrap();
    assert_eq!(goal, Goal::CpuCapacityGoal);

    let unknown: Goal = serde_json::from_str("\"SomeFutureGoal\"").unwrap();
    assert_eq!(unknown, Goal::Undefined);
}

#[test]
fn test_unknown_names_fall_back_to_undefined() {
    fn unknown<T: serde::de::DeserializeOwned>() -> T {
        serde_json::from_str("\"NOT_A_KNOWN_NAME\"").unwrap()
    }

    assert_eq!(unknown::<ProposalDataSource>(), ProposalDataSource::Undefined);
    assert_eq!(unknown::<ReplicaMovementStrategy>(), ReplicaMovementStrategy::Undefined);
    assert_eq!(unknown::<ConcurrencyType>(), ConcurrencyType::Undefined);
    assert_eq!(unknown::<Substate>(), Substate::Undefined);
    assert_eq!(unknown::<AnomalyType>(), AnomalyType::Undefined);
    assert_eq!(unknown::<ResourceType>(), ResourceType::Undefined);
    assert_eq!(unknown::<UserTaskStatus>(), UserTaskStatus::Undefined);
}

#[test]
fn test_undefined_is_default() {
    assert_eq!(Goal::default(), Goal::Undefined);
    assert_eq!(Substate::default(), Substate::Undefined);
    assert_eq!(ResourceType::default(), ResourceType::Undefined);
    assert!(!Goal::all().contains(&Goal::Undefined));
    assert_eq!(Goal::all()[0], Goal::CpuCapacityGoal);
}

#[test]
fn test_screaming_snake_enums() {
    assert_eq!(ProposalDataSource::ValidPartitions.to_string(), "VALID_PARTITIONS");
    assert_eq!(ConcurrencyType::InterBrokerReplica.to_string(), "INTER_BROKER_REPLICA");
    assert_eq!(Substate::AnomalyDetector.to_string(), "ANOMALY_DETECTOR");
    assert_eq!(AnomalyType::MetricAnomaly.to_string(), "METRIC_ANOMALY");
    assert_eq!(UserTaskStatus::CompletedWithError.to_string(), "COMPLETED_WITH_ERROR");
    assert_eq!(Endpoint::PartitionLoad.to_string(), "PARTITION_LOAD");
}

#[test]
fn test_user_task_status_aliases() {
    let status: UserTaskStatus = serde_json::from_str("\"InExecution\"").unwrap();
    assert_eq!(status, UserTaskStatus::InExecution);
    let status: UserTaskStatus = serde_json::from_str("\"COMPLETED\"").unwrap();
    assert_eq!(status, UserTaskStatus::Completed);
}

#[test]
fn test_resource_and_strategy_names() {
    assert_eq!(ResourceType::NetworkOutbound.to_string(), "networkOutbound");
    assert_eq!(ResourceType::from_str("cpu").unwrap(), ResourceType::Cpu);
    assert_eq!(
        ReplicaMovementStrategy::PostponeUrpReplicaMovementStrategy.to_string(),
        "PostponeUrpReplicaMovementStrategy"
    );
}

#[derive(Params)]
struct Filters {
    #[param("resource,omitempty")]
    resource: ResourceType,
    #[param("data_from")]
    data_from: ProposalDataSource,
    #[param("strategies,omitempty")]
    strategies: Vec<ReplicaMovementStrategy>,
}

#[test]
fn test_undefined_variant_is_empty() {
    let params = to_params(&Filters {
        resource: ResourceType::Undefined,
        data_from: ProposalDataSource::Undefined,
        strategies: vec![],
    })
    .unwrap();

    assert!(!params.contains_key("resource"));
    assert!(!params.contains_key("strategies"));
    assert_eq!(params.get("data_from"), Some("UNDEFINED"));
}

#[test]
fn test_defined_variants_encode() {
    let params = to_params(&Filters {
        resource: ResourceType::NetworkInbound,
        data_from: ProposalDataSource::ValidWindows,
        strategies: vec![ReplicaMovementStrategy::PrioritizeLargeReplicaMovementStrategy],
    })
    .unwrap();

    assert_eq!(params.get("resource"), Some("networkInbound"));
    assert_eq!(params.get("data_from"), Some("VALID_WINDOWS"));
    assert_eq!(
        params.values("strategies"),
        ["PrioritizeLargeReplicaMovementStrategy"]
    );
}
