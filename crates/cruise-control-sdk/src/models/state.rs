// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Component state of STATE, KAFKA_CLUSTER_STATE and USER_TASKS.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::optimization::ExecutionProposal;
use crate::response::string_or_number;
use crate::types::{AnomalyType, Goal, UserTaskStatus};

/// State of the requested Cruise Control substates.
///
/// Substates that were not requested are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StateResult {
    #[serde(rename = "version")]
    pub version: i32,
    pub executor_state: Option<ExecutorState>,
    pub monitor_state: Option<LoadMonitorState>,
    pub analyzer_state: Option<AnalyzerState>,
    pub anomaly_detector_state: Option<AnomalyDetectorState>,
}

// ============================================================================
// Executor
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecutorState {
    pub state: ExecutorStateType,
    pub triggered_user_task_id: String,
    pub triggered_task_reason: String,
    pub triggered_self_healing_task_id: String,
    pub recently_demoted_brokers: Vec<i32>,
    pub recently_removed_brokers: Vec<i32>,

    pub num_total_leadership_movements: i32,
    pub num_pending_leadership_movements: i32,
    pub num_cancelled_leadership_movements: i32,
    pub num_finished_leadership_movements: i32,
    pub maximum_concurrent_leader_movements: i32,
    pub minimum_concurrent_leader_movements: i32,
    pub average_concurrent_leader_movements: f64,
    pub cancelled_leadership_movement: Vec<ExecutionTask>,

    pub num_total_partition_movements: i32,
    pub num_pending_partition_movements: i32,
    pub num_cancelled_partition_movements: i32,
    pub num_in_progress_partition_movements: i32,
    pub aborting_partitions: i32,
    pub num_finished_partition_movements: i32,
    pub finished_data_movement: i64,
    pub total_data_to_move: i64,
    pub maximum_concurrent_partition_movements_per_broker: i32,
    pub minimum_concurrent_partition_movements_per_broker: i32,
    pub average_concurrent_partition_movements_per_broker: f64,
    pub in_progress_partition_movement: Vec<ExecutionTask>,
    pub pending_partition_movement: Vec<ExecutionTask>,
    pub cancelled_partition_movement: Vec<ExecutionTask>,
    pub dead_partition_movement: Vec<ExecutionTask>,
    pub completed_partition_movement: Vec<ExecutionTask>,
    pub aborting_partition_movement: Vec<ExecutionTask>,
    pub aborted_partition_movement: Vec<ExecutionTask>,

    pub num_total_intra_broker_partition_movements: i32,
    pub num_finished_intra_broker_partition_movements: i32,
    pub num_in_progress_intra_broker_partition_movements: i32,
    pub num_aborting_intra_broker_partition_movements: i32,
    pub num_pending_intra_broker_partition_movements: i32,
    pub num_cancelled_intra_broker_partition_movements: i32,
    pub finished_intra_broker_data_movement: i64,
    pub total_intra_broker_data_to_move: i64,
    pub maximum_concurrent_intra_broker_partition_movements_per_broker: i32,
    pub minimum_concurrent_intra_broker_partition_movements_per_broker: i32,
    pub average_concurrent_intra_broker_partition_movements_per_broker: f64,
    pub in_progress_intra_broker_partition_movement: Vec<ExecutionTask>,
    pub pending_intra_broker_partition_movement: Vec<ExecutionTask>,
    pub cancelled_intra_broker_partition_movement: Vec<ExecutionTask>,
    pub dead_intra_broker_partition_movement: Vec<ExecutionTask>,
    pub completed_intra_broker_partition_movement: Vec<ExecutionTask>,
    pub aborting_intra_broker_partition_movement: Vec<ExecutionTask>,
    pub aborted_intra_broker_partition_movement: Vec<ExecutionTask>,

    pub error: String,
}

impl ExecutorState {
    /// Whether an execution is starting, running or stopping.
    pub fn is_executing(&self) -> bool {
        !matches!(
            self.state,
            ExecutorStateType::NoTaskInProgress | ExecutorStateType::Undefined
        )
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutorStateType {
    NoTaskInProgress,
    StartingExecution,
    InterBrokerReplicaMovementTaskInProgress,
    IntraBrokerReplicaMovementTaskInProgress,
    LeaderMovementTaskInProgress,
    StoppingExecution,
    InitializingProposalExecution,
    GeneratingProposalsForExecution,
    #[default]
    #[serde(other)]
    Undefined,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecutionTask {
    pub execution_id: i64,
    #[serde(rename = "type")]
    pub task_type: ExecutionTaskType,
    pub state: ExecutionTaskState,
    pub proposal: ExecutionProposal,
    pub broker_id: i32,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionTaskType {
    InterBrokerReplicaAction,
    IntraBrokerReplicaAction,
    LeaderAction,
    #[default]
    #[serde(other)]
    Undefined,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionTaskState {
    Pending,
    InProgress,
    Aborting,
    Aborted,
    Dead,
    Completed,
    #[default]
    #[serde(other)]
    Undefined,
}

// ============================================================================
// Load monitor
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadMonitorState {
    pub state: MonitorState,
    pub trained: bool,
    pub training_pct: f64,
    pub bootstrap_progress_pct: f64,
    pub loading_progress_pct: f64,
    pub monitoring_coverage_pct: f64,
    pub monitored_windows: BTreeMap<String, f64>,
    pub num_monitored_windows: f64,
    pub num_flawed_partitions: f64,
    pub num_total_partitions: f64,
    pub num_valid_partitions: f64,
    pub reason_of_latest_pause_or_resume: String,
    pub error: String,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MonitorState {
    NotStarted,
    Running,
    Paused,
    Sampling,
    Bootstrapping,
    Training,
    Loading,
    #[default]
    #[serde(other)]
    Undefined,
}

// ============================================================================
// Analyzer
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzerState {
    pub is_proposal_ready: bool,
    pub ready_goals: Vec<Goal>,
    pub goal_readiness: Vec<GoalReadiness>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalReadiness {
    pub name: Goal,
    pub model_complete_requirement: ModelCompletenessRequirements,
    pub status: GoalReadinessStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelCompletenessRequirements {
    pub required_num_snapshots: i32,
    pub min_monitored_partitions_percentage: f64,
    pub include_all_topics: bool,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum GoalReadinessStatus {
    NotReady,
    Ready,
    #[default]
    #[serde(rename = "UNDEFINED", other)]
    #[strum(serialize = "UNDEFINED")]
    Undefined,
}

// ============================================================================
// Anomaly detector
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnomalyDetectorState {
    pub self_healing_enabled: Vec<AnomalyType>,
    pub self_healing_disabled: Vec<AnomalyType>,
    pub self_healing_enabled_ratio: BTreeMap<AnomalyType, f64>,
    pub recent_goal_violations: Vec<AnomalyDetails>,
    pub recent_broker_failures: Vec<AnomalyDetails>,
    pub recent_metric_anomalies: Vec<AnomalyDetails>,
    pub recent_disk_failures: Vec<AnomalyDetails>,
    pub recent_topic_anomalies: Vec<AnomalyDetails>,
    pub recent_maintenance_events: Vec<AnomalyDetails>,
    pub metrics: AnomalyMetrics,
    pub ongoing_self_healing_anomaly: AnomalyType,
    pub balancedness_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnomalyDetails {
    pub anomaly_id: String,
    pub status: AnomalyStatus,
    pub detection_ms: i64,
    pub status_update_ms: i64,
    pub fixable_violated_goals: Vec<Goal>,
    pub unfixable_violated_goals: Vec<Goal>,
    pub optimization_result: String,
    pub failed_brokers_by_time_ms: BTreeMap<String, i64>,
    pub failed_disks_by_time_ms: BTreeMap<String, i64>,
    pub description: String,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AnomalyStatus {
    Detected,
    Ignored,
    FixStarted,
    FixFailedToStart,
    CheckWithDelay,
    LoadMonitorNotReady,
    CompletenessNotReady,
    #[default]
    #[serde(other)]
    Undefined,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnomalyMetrics {
    pub mean_time_between_anomalies_ms: BTreeMap<AnomalyType, f64>,
    pub mean_time_to_start_fix_ms: f64,
    pub num_self_healing_started: i64,
    pub num_self_healing_failed_to_start: i64,
    pub ongoing_anomaly_duration_ms: i64,
}

// ============================================================================
// Kafka cluster
// ============================================================================

/// Replica and leadership distribution reported by KAFKA_CLUSTER_STATE.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KafkaClusterState {
    #[serde(rename = "version")]
    pub version: i32,
    pub kafka_broker_state: KafkaBrokerState,
    pub kafka_partition_state: KafkaPartitionState,
}

/// Per broker counters, keyed by broker id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KafkaBrokerState {
    pub leader_count_by_broker_id: BTreeMap<i32, i32>,
    pub out_of_sync_count_by_broker_id: BTreeMap<i32, i32>,
    pub replica_count_by_broker_id: BTreeMap<i32, i32>,
    pub offline_replica_count_by_broker_id: BTreeMap<i32, i32>,
    pub is_controller: BTreeMap<i32, bool>,
    pub online_log_dirs_by_broker_id: BTreeMap<i32, Vec<String>>,
    pub offline_log_dirs_by_broker_id: BTreeMap<i32, Vec<String>>,
    pub broker_set_by_broker_id: BTreeMap<i32, String>,
    pub summary: KafkaClusterStats,
}

impl KafkaBrokerState {
    /// Id of the controller broker.
    pub fn controller(&self) -> Option<i32> {
        self.is_controller
            .iter()
            .find_map(|(broker_id, controller)| controller.then_some(*broker_id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KafkaClusterStats {
    pub brokers: i32,
    pub topics: i32,
    pub replicas: i32,
    pub leaders: i32,
    pub avg_replication_factor: f64,
    pub avg_replicas_per_broker: f64,
    pub avg_leaders_per_broker: f64,
    pub max_replicas_per_broker: f64,
    pub max_leaders_per_broker: f64,
    pub std_replicas_per_broker: f64,
    pub std_leaders_per_broker: f64,
}

/// Unhealthy partitions grouped by the kind of problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct KafkaPartitionState {
    pub offline: Vec<PartitionState>,
    pub with_offline_replicas: Vec<PartitionState>,
    pub urp: Vec<PartitionState>,
    pub under_min_isr: Vec<PartitionState>,
    pub other: Vec<PartitionState>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PartitionState {
    pub topic: String,
    pub partition: i32,
    pub leader: i32,
    pub replicas: Vec<i32>,
    pub in_sync: Vec<i32>,
    pub out_of_sync: Vec<i32>,
    pub offline: Vec<i32>,
    pub min_isr: i32,
}

// ============================================================================
// User tasks
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserTaskState {
    pub version: i32,
    pub user_tasks: Vec<UserTask>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserTask {
    #[serde(rename = "UserTaskId")]
    pub user_task_id: String,
    #[serde(rename = "RequestURL")]
    pub request_url: String,
    #[serde(rename = "ClientIdentity")]
    pub client_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub start_ms: String,
    pub status: UserTaskStatus,
    /// Response of the finished task, when requested with `fetch_completed_task`.
    #[serde(rename = "originalResponse")]
    pub original_response: String,
}
