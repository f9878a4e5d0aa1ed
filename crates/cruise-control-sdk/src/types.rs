// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Parameter types shared by the request definitions.
//!
//! Enums render as their Cruise Control wire names. The `Undefined` variant
//! of each enum is its default and is dropped from the query string when the
//! field is marked `omitempty`.

use std::collections::BTreeMap;

use cruise_control_params::{BoxError, MarshalParams};
use cruise_control_params::Params as QueryParams;
use cruise_control_params_derive::Params;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, VariantNames};

// ============================================================================
// Goals
// ============================================================================

/// Optimization goal used to generate proposals.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    VariantNames,
    Params,
)]
#[params(display)]
pub enum Goal {
    CpuCapacityGoal,
    CpuUsageDistributionGoal,
    DiskCapacityGoal,
    DiskUsageDistributionGoal,
    IntraBrokerDiskCapacityGoal,
    IntraBrokerDiskUsageDistributionGoal,
    LeaderBytesInDistributionGoal,
    LeaderReplicaDistributionGoal,
    MinTopicLeadersPerBrokerGoal,
    NetworkInboundCapacityGoal,
    NetworkInboundUsageDistributionGoal,
    NetworkOutboundCapacityGoal,
    NetworkOutboundUsageDistributionGoal,
    PotentialNwOutGoal,
    PreferredLeaderElectionGoal,
    RackAwareDistributionGoal,
    RackAwareGoal,
    ReplicaCapacityGoal,
    ReplicaDistributionGoal,
    TopicReplicaDistributionGoal,
    BrokerSetAwareGoal,
    KafkaAssignerDiskUsageDistributionGoal,
    KafkaAssignerEvenRackAwareGoal,
    #[default]
    #[serde(rename = "UndefinedGoal", other)]
    #[strum(serialize = "UndefinedGoal")]
    Undefined,
}

impl Goal {
    /// Every defined goal.
    pub fn all() -> Vec<Goal> {
        Goal::iter().filter(|goal| *goal != Goal::Undefined).collect()
    }
}

// ============================================================================
// Proposal and execution parameters
// ============================================================================

/// Whether proposals are computed from valid windows or valid partitions.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
    Params,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[params(display)]
pub enum ProposalDataSource {
    ValidWindows,
    ValidPartitions,
    #[default]
    #[serde(other)]
    Undefined,
}

/// Strategy ordering replica movements during execution.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
    Params,
)]
#[params(display)]
pub enum ReplicaMovementStrategy {
    PrioritizeLargeReplicaMovementStrategy,
    PrioritizeSmallReplicaMovementStrategy,
    PostponeUrpReplicaMovementStrategy,
    PrioritizeMinIsrWithOfflineReplicasStrategy,
    PrioritizeOneAboveMinIsrWithOfflineReplicasStrategy,
    BaseReplicaMovementStrategy,
    #[default]
    #[serde(rename = "UNDEFINED", other)]
    #[strum(serialize = "UNDEFINED")]
    Undefined,
}

/// Concurrency dimension handled by the concurrency adjuster.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
    Params,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[params(display)]
pub enum ConcurrencyType {
    InterBrokerReplica,
    Leadership,
    IntraBrokerReplica,
    #[default]
    #[serde(other)]
    Undefined,
}

// ============================================================================
// State and monitoring parameters
// ============================================================================

/// Part of the Cruise Control state to report.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
    Params,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[params(display)]
pub enum Substate {
    Analyzer,
    Monitor,
    Executor,
    AnomalyDetector,
    #[default]
    #[serde(other)]
    Undefined,
}

/// Anomaly type known to the anomaly detector.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
    Params,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[params(display)]
pub enum AnomalyType {
    GoalViolation,
    BrokerFailure,
    MetricAnomaly,
    DiskFailure,
    TopicAnomaly,
    MaintenanceEvent,
    #[default]
    #[serde(other)]
    Undefined,
}

impl AnomalyType {
    /// Whether self-healing can be toggled for this anomaly type.
    pub fn supports_self_healing(&self) -> bool {
        matches!(
            self,
            AnomalyType::GoalViolation
                | AnomalyType::BrokerFailure
                | AnomalyType::MetricAnomaly
                | AnomalyType::DiskFailure
                | AnomalyType::TopicAnomaly
        )
    }
}

/// Resource used to sort partition load.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
    Params,
)]
#[params(display)]
pub enum ResourceType {
    #[serde(rename = "cpu")]
    #[strum(serialize = "cpu")]
    Cpu,
    #[serde(rename = "disk")]
    #[strum(serialize = "disk")]
    Disk,
    #[serde(rename = "networkInbound")]
    #[strum(serialize = "networkInbound")]
    NetworkInbound,
    #[serde(rename = "networkOutbound")]
    #[strum(serialize = "networkOutbound")]
    NetworkOutbound,
    #[default]
    #[serde(rename = "UNDEFINED", other)]
    #[strum(serialize = "UNDEFINED")]
    Undefined,
}

/// Status of a user task.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
    Params,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[params(display)]
pub enum UserTaskStatus {
    #[serde(alias = "Active")]
    Active,
    #[serde(alias = "InExecution")]
    InExecution,
    #[serde(alias = "Completed")]
    Completed,
    #[serde(alias = "CompletedWithError")]
    CompletedWithError,
    #[default]
    #[serde(other)]
    Undefined,
}

// ============================================================================
// Broker log dirs
// ============================================================================

/// Log directories per broker, sent as `<broker id>-<log dir>` tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Params)]
#[serde(transparent)]
#[params(marshal)]
pub struct BrokerIdAndLogDirs(BTreeMap<i32, Vec<String>>);

impl BrokerIdAndLogDirs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add log directories of `broker_id`.
    pub fn insert<I, S>(&mut self, broker_id: i32, log_dirs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .entry(broker_id)
            .or_default()
            .extend(log_dirs.into_iter().map(Into::into));
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with<I, S>(mut self, broker_id: i32, log_dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(broker_id, log_dirs);
        self
    }

    pub fn get(&self, broker_id: i32) -> Option<&[String]> {
        self.0.get(&broker_id).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl MarshalParams for BrokerIdAndLogDirs {
    fn marshal_params(&self, key: &str) -> Result<QueryParams, BoxError> {
        let mut params = QueryParams::new();
        for (broker_id, log_dirs) in &self.0 {
            params.add(key, log_dirs.iter().map(|dir| format!("{broker_id}-{dir}")));
        }
        Ok(params)
    }
}

impl FromIterator<(i32, Vec<String>)> for BrokerIdAndLogDirs {
    fn from_iter<T: IntoIterator<Item = (i32, Vec<String>)>>(iter: T) -> Self {
        let mut dirs = Self::new();
        for (broker_id, log_dirs) in iter {
            dirs.insert(broker_id, log_dirs);
        }
        dirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dirs_tokens() {
        let dirs = BrokerIdAndLogDirs::new()
            .with(2, ["/kafka/b"])
            .with(1, ["/kafka/a", "/kafka/c"]);

        let params = dirs.marshal_params("brokerid_and_logdirs").unwrap();
        assert_eq!(
            params.values("brokerid_and_logdirs"),
            ["1-/kafka/a", "1-/kafka/c", "2-/kafka/b"]
        );
    }

    #[test]
    fn test_empty_log_dirs() {
        let dirs = BrokerIdAndLogDirs::new().with(1, Vec::<String>::new());
        assert!(dirs.is_empty());
        assert!(dirs.marshal_params("k").unwrap().is_empty());
    }

    #[test]
    fn test_goal_all_excludes_undefined() {
        let goals = Goal::all();
        assert_eq!(goals.len(), Goal::VARIANTS.len() - 1);
        assert!(!goals.contains(&Goal::Undefined));
    }
}
