// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Optimization results of PROPOSALS, REBALANCE, REMOVE_BROKER,
//! DEMOTE_BROKER and REMOVE_DISKS.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::load::BrokerStats;
use crate::types::Goal;

/// Proposals generated by the analyzer together with the cluster load
/// before and after applying them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizationResult {
    pub version: i32,
    pub proposals: Vec<ExecutionProposal>,
    pub summary: OptimizerResult,
    pub goal_summary: Vec<GoalSummary>,
    pub load_before_optimization: BrokerStats,
    pub load_after_optimization: BrokerStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizerResult {
    pub num_replica_movements: i32,
    #[serde(rename = "dataToMoveMB")]
    pub data_to_move_mb: i64,
    pub num_intra_broker_replica_movements: i32,
    #[serde(rename = "intraBrokerDataToMoveMB")]
    pub intra_broker_data_to_move_mb: i64,
    pub num_leader_movements: i32,
    pub recent_windows: i32,
    pub monitored_partitions_percentage: f64,
    pub excluded_topics: Vec<String>,
    pub excluded_brokers_for_replica_move: Vec<i32>,
    pub excluded_brokers_for_leadership: Vec<i32>,
    pub on_demand_balancedness_score_before: f64,
    pub on_demand_balancedness_score_after: f64,
    pub provision_status: ProvisionStatus,
    #[serde(rename = "ProvisionRecommendation")]
    pub provision_recommendation: String,
}

/// Whether the cluster has the right number of brokers for its load.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProvisionStatus {
    RightSized,
    UnderProvisioned,
    OverProvisioned,
    Undecided,
    #[default]
    #[serde(other)]
    Undefined,
}

/// A single partition reassignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecutionProposal {
    pub topic_partition: TopicPartition,
    pub old_leader: i32,
    pub old_replicas: Vec<i32>,
    pub new_replicas: Vec<i32>,
}

impl ExecutionProposal {
    /// Brokers that receive a replica of the partition.
    pub fn replicas_to_add(&self) -> Vec<i32> {
        self.new_replicas
            .iter()
            .filter(|broker| !self.old_replicas.contains(broker))
            .copied()
            .collect()
    }

    /// Brokers that drop their replica of the partition.
    pub fn replicas_to_remove(&self) -> Vec<i32> {
        self.old_replicas
            .iter()
            .filter(|broker| !self.new_replicas.contains(broker))
            .copied()
            .collect()
    }

    pub fn has_leader_action(&self) -> bool {
        self.new_replicas.first() != Some(&self.old_leader)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicPartition {
    pub topic: String,
    pub partition: i32,
}

/// Outcome of a single goal during optimization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalSummary {
    pub goal: Goal,
    /// `NO-ACTION`, `FIXED` or `VIOLATED`
    pub status: String,
    pub cluster_model_stats: ClusterModelStats,
    pub optimization_time_ms: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterModelStats {
    pub metadata: ClusterModelMetadata,
    pub statistics: ClusterModelStatistics,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterModelMetadata {
    pub replicas: i32,
    pub topics: i32,
    pub brokers: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", default)]
pub struct ClusterModelStatistics {
    pub avg: ClusterModelStatisticsData,
    pub std: ClusterModelStatisticsData,
    pub min: ClusterModelStatisticsData,
    pub max: ClusterModelStatisticsData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterModelStatisticsData {
    pub disk: f64,
    pub replicas: f64,
    pub leader_replicas: f64,
    pub cpu: f64,
    pub network_outbound: f64,
    pub network_inbound: f64,
    pub topic_replicas: f64,
}
