// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Result models returned by the Cruise Control endpoints.
//!
//! Every model tolerates missing fields, and enums fall back to their
//! `Undefined` variant for names this crate does not know yet.

mod load;
mod operations;
mod optimization;
mod state;

pub use load::{
    BrokerLoadStats, BrokerState, BrokerStats, DiskStats, DiskUsage, HostLoadStats, PartitionLoad,
    PartitionLoadState,
};
pub use operations::{
    AdminResult, MessageResult, ProvisionerState, RequestInfo, RequestStatus, ReviewResult,
    RightsizeResult,
};
pub use optimization::{
    ClusterModelMetadata, ClusterModelStatistics, ClusterModelStats, ClusterModelStatisticsData,
    ExecutionProposal, GoalSummary, OptimizationResult, OptimizerResult, ProvisionStatus,
    TopicPartition,
};
pub use state::{
    AnalyzerState, AnomalyDetails, AnomalyDetectorState, AnomalyMetrics, AnomalyStatus,
    ExecutionTask, ExecutionTaskState, ExecutionTaskType, ExecutorState, ExecutorStateType,
    GoalReadiness, GoalReadinessStatus, KafkaBrokerState, KafkaClusterState, KafkaClusterStats,
    KafkaPartitionState, LoadMonitorState, ModelCompletenessRequirements, MonitorState,
    PartitionState, StateResult, UserTask, UserTaskState,
};
