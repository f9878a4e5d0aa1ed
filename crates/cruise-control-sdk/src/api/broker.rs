// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Broker and disk decommissioning endpoints.

use cruise_control_params_derive::Params;

use super::{
    ApiRequest, DEFAULT_CONCURRENT_LEADER_MOVEMENTS,
    DEFAULT_CONCURRENT_PARTITION_MOVEMENTS_PER_BROKER,
    DEFAULT_EXECUTION_PROGRESS_CHECK_INTERVAL_MS, GenericRequestWithReason, require_positive,
};
use crate::endpoint::Endpoint;
use crate::error::{Result, SdkError};
use crate::types::{BrokerIdAndLogDirs, Goal, ProposalDataSource, ReplicaMovementStrategy};

/// Move all replicas off the given brokers.
#[derive(Debug, Clone, Default, PartialEq, Params)]
pub struct RemoveBrokerRequest {
    pub common: GenericRequestWithReason,
    /// Whether to allow broker capacity to be estimated
    #[param("allow_capacity_estimation")]
    pub allow_capacity_estimation: bool,
    /// List of ids of brokers to be removed from the cluster
    #[param("brokerid")]
    pub broker_ids: Vec<i32>,
    /// Upper bound of ongoing leadership movements
    #[param("concurrent_leader_movements,omitempty")]
    pub concurrent_leader_movements: i32,
    /// Upper bound of ongoing replica movements going into/out of each broker
    #[param("concurrent_partition_movements_per_broker,omitempty")]
    pub concurrent_partition_movements_per_broker: i32,
    /// Whether to calculate proposal from available valid partitions or valid windows
    #[param("data_from,omitempty")]
    pub data_from: ProposalDataSource,
    /// Specify brokers to move replicas to
    #[param("destination_broker_ids,omitempty")]
    pub destination_broker_ids: Vec<i32>,
    /// Whether to only propose the optimization
    #[param("dryrun")]
    pub dry_run: bool,
    /// Whether to allow leader replicas to be moved to recently demoted brokers
    #[param("exclude_recently_demoted_brokers,omitempty")]
    pub exclude_recently_demoted_brokers: bool,
    /// Whether to allow replicas to be moved to recently removed brokers
    #[param("exclude_recently_removed_brokers,omitempty")]
    pub exclude_recently_removed_brokers: bool,
    /// Regular expression to specify topics excluded from replica and leadership movement
    #[param("excluded_topics,omitempty")]
    pub excluded_topics: String,
    /// Execution progress check interval in milliseconds
    #[param("execution_progress_check_interval_ms,omitempty")]
    pub execution_progress_check_interval_ms: i64,
    /// True to compute proposals in fast mode
    #[param("fast_mode,omitempty")]
    pub fast_mode: bool,
    /// List of goals used to generate proposal
    #[param("goals,omitempty")]
    pub goals: Vec<Goal>,
    /// Whether to use Kafka assigner mode to generate proposals
    #[param("kafka_assigner,omitempty")]
    pub kafka_assigner: bool,
    /// Upper bound of ongoing replica movements in the cluster
    #[param("max_partition_movements_in_cluster,omitempty")]
    pub max_partition_movements_in_cluster: i32,
    /// Replica movement strategies to use
    #[param("replica_movement_strategies,omitempty")]
    pub replica_movement_strategies: Vec<ReplicaMovementStrategy>,
    /// Upper bound on the bandwidth in bytes per second used to move replicas
    #[param("replication_throttle,omitempty")]
    pub replication_throttle: i64,
    /// Review id for 2-step verification
    #[param("review_id,omitempty")]
    pub review_id: i32,
    /// Whether to allow hard goals to be skipped in proposal generation
    #[param("skip_hard_goal_check,omitempty")]
    pub skip_hard_goal_check: bool,
    /// Whether to stop the ongoing execution (if any) and start executing the given request
    #[param("stop_ongoing_execution,omitempty")]
    pub stop_ongoing_execution: bool,
    /// Whether to only use ready goals to generate proposal
    #[param("use_ready_default_goals,omitempty")]
    pub use_ready_default_goals: bool,
    /// Return detailed state information
    #[param("verbose,omitempty")]
    pub verbose: bool,
    /// Whether to throttle replica movements off the removed brokers
    #[param("throttle_removed_broker,omitempty")]
    pub throttle_removed_broker: bool,
}

impl RemoveBrokerRequest {
    pub fn with_defaults() -> Self {
        Self {
            allow_capacity_estimation: true,
            concurrent_leader_movements: DEFAULT_CONCURRENT_LEADER_MOVEMENTS,
            concurrent_partition_movements_per_broker:
                DEFAULT_CONCURRENT_PARTITION_MOVEMENTS_PER_BROKER,
            execution_progress_check_interval_ms: DEFAULT_EXECUTION_PROGRESS_CHECK_INTERVAL_MS,
            throttle_removed_broker: true,
            data_from: ProposalDataSource::ValidWindows,
            ..Default::default()
        }
    }
}

impl ApiRequest for RemoveBrokerRequest {
    const ENDPOINT: Endpoint = Endpoint::RemoveBroker;

    fn validate(&self) -> Result<()> {
        if self.broker_ids.is_empty() {
            return Err(SdkError::invalid("list of brokers must not be empty (broker_ids)"));
        }
        require_positive(
            self.concurrent_partition_movements_per_broker,
            "number of concurrent partition movements per broker must be bigger than 0",
        )?;
        require_positive(
            self.concurrent_leader_movements,
            "number of concurrent leader partition movements must be bigger than 0",
        )?;
        if self.max_partition_movements_in_cluster != 0 {
            require_positive(
                self.max_partition_movements_in_cluster,
                "maximum number of partition movements in the cluster must be bigger than 0",
            )?;
        }
        Ok(())
    }
}

/// Move leadership off the given brokers.
#[derive(Debug, Clone, Default, PartialEq, Params)]
pub struct DemoteBrokerRequest {
    pub common: GenericRequestWithReason,
    /// Whether to allow broker capacity to be estimated
    #[param("allow_capacity_estimation")]
    pub allow_capacity_estimation: bool,
    /// List of ids of brokers to be demoted in the cluster
    #[param("brokerid")]
    pub broker_ids: Vec<i32>,
    /// Upper bound of ongoing leadership movements
    #[param("concurrent_leader_movements,omitempty")]
    pub concurrent_leader_movements: i32,
    /// Whether to only propose the optimization
    #[param("dryrun")]
    pub dry_run: bool,
    /// Whether to allow leader replicas to be moved to recently demoted brokers
    #[param("exclude_recently_demoted_brokers,omitempty")]
    pub exclude_recently_demoted_brokers: bool,
    /// Execution progress check interval in milliseconds
    #[param("execution_progress_check_interval_ms,omitempty")]
    pub execution_progress_check_interval_ms: i64,
    /// Replica movement strategies to use
    #[param("replica_movement_strategies,omitempty")]
    pub replica_movement_strategies: Vec<ReplicaMovementStrategy>,
    /// Upper bound on the bandwidth in bytes per second used to move replicas
    #[param("replication_throttle,omitempty")]
    pub replication_throttle: i64,
    /// Review id for 2-step verification
    #[param("review_id,omitempty")]
    pub review_id: i32,
    /// Whether to stop the ongoing execution (if any) and start executing the given request
    #[param("stop_ongoing_execution,omitempty")]
    pub stop_ongoing_execution: bool,
    /// Return detailed state information
    #[param("verbose,omitempty")]
    pub verbose: bool,
    /// Whether to operate on partitions which are currently under replicated
    #[param("skip_urp_demotion")]
    pub skip_urp_demotion: bool,
    /// Whether to operate on the partitions which have the demoted broker as follower
    #[param("exclude_follower_demotion")]
    pub exclude_follower_demotion: bool,
    /// Disks to demote, per broker
    #[param("brokerid_and_logdirs,omitempty")]
    pub broker_id_and_log_dirs: BrokerIdAndLogDirs,
}

impl DemoteBrokerRequest {
    pub fn with_defaults() -> Self {
        Self {
            allow_capacity_estimation: true,
            concurrent_leader_movements: DEFAULT_CONCURRENT_LEADER_MOVEMENTS,
            execution_progress_check_interval_ms: DEFAULT_EXECUTION_PROGRESS_CHECK_INTERVAL_MS,
            skip_urp_demotion: true,
            exclude_follower_demotion: true,
            ..Default::default()
        }
    }
}

impl ApiRequest for DemoteBrokerRequest {
    const ENDPOINT: Endpoint = Endpoint::DemoteBroker;

    fn validate(&self) -> Result<()> {
        if self.broker_ids.is_empty() {
            return Err(SdkError::invalid("list of brokers must not be empty (broker_ids)"));
        }
        require_positive(
            self.concurrent_leader_movements,
            "number of concurrent leader partition movements must be bigger than 0",
        )
    }
}

/// Move all replicas off the given log directories.
#[derive(Debug, Clone, Default, PartialEq, Params)]
pub struct RemoveDisksRequest {
    pub common: GenericRequestWithReason,
    /// Log directories to drain, per broker
    #[param("brokerid_and_logdirs")]
    pub broker_id_and_log_dirs: BrokerIdAndLogDirs,
    /// Whether to only propose the optimization
    #[param("dryrun")]
    pub dry_run: bool,
}

impl RemoveDisksRequest {
    pub fn with_defaults() -> Self {
        Self::default()
    }
}

impl ApiRequest for RemoveDisksRequest {
    const ENDPOINT: Endpoint = Endpoint::RemoveDisks;

    fn validate(&self) -> Result<()> {
        if self.broker_id_and_log_dirs.is_empty() {
            return Err(SdkError::invalid(
                "broker id and log dirs map must not be empty",
            ));
        }
        Ok(())
    }
}
