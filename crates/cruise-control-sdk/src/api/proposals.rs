// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! PROPOSALS and REBALANCE endpoints.

use cruise_control_params_derive::Params;

use super::{
    ApiRequest, DEFAULT_CONCURRENT_INTRA_BROKER_PARTITION_MOVEMENTS,
    DEFAULT_CONCURRENT_LEADER_MOVEMENTS, DEFAULT_CONCURRENT_PARTITION_MOVEMENTS_PER_BROKER,
    DEFAULT_EXECUTION_PROGRESS_CHECK_INTERVAL_MS, GenericRequestWithReason,
    require_positive,
};
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::types::{Goal, ProposalDataSource, ReplicaMovementStrategy};

/// Query optimization proposals without executing them.
#[derive(Debug, Clone, Default, PartialEq, Params)]
pub struct ProposalsRequest {
    pub common: GenericRequestWithReason,
    /// Whether to allow broker capacity to be estimated
    #[param("allow_capacity_estimation")]
    pub allow_capacity_estimation: bool,
    /// Specify brokers to move replicas to
    #[param("destination_broker_ids,omitempty")]
    pub destination_broker_ids: Vec<i32>,
    /// Whether to allow leader replicas to be moved to recently demoted brokers
    #[param("exclude_recently_demoted_brokers,omitempty")]
    pub exclude_recently_demoted_brokers: bool,
    /// Whether to allow replicas to be moved to recently removed brokers
    #[param("exclude_recently_removed_brokers,omitempty")]
    pub exclude_recently_removed_brokers: bool,
    /// Regular expression to specify topics excluded from replica and leadership movement
    #[param("excluded_topics,omitempty")]
    pub excluded_topics: String,
    /// True to compute proposals in fast mode
    #[param("fast_mode,omitempty")]
    pub fast_mode: bool,
    /// List of goals used to generate proposal
    #[param("goals,omitempty")]
    pub goals: Vec<Goal>,
    /// Whether to use Kafka assigner mode to generate proposals
    #[param("kafka_assigner,omitempty")]
    pub kafka_assigner: bool,
    /// Whether to only use ready goals to generate proposal
    #[param("use_ready_default_goals,omitempty")]
    pub use_ready_default_goals: bool,
    /// Return detailed state information
    #[param("verbose,omitempty")]
    pub verbose: bool,
    /// Whether to calculate proposal from available valid partitions or valid windows
    #[param("data_from,omitempty")]
    pub data_from: ProposalDataSource,
    /// Whether to ignore the cached proposal or not
    #[param("ignore_proposal_cache,omitempty")]
    pub ignore_proposal_cache: bool,
    /// Whether to balance load between disks within brokers
    #[param("rebalance_disk,omitempty")]
    pub rebalance_disk: bool,
}

impl ProposalsRequest {
    pub fn with_defaults() -> Self {
        Self {
            allow_capacity_estimation: true,
            data_from: ProposalDataSource::ValidWindows,
            ..Default::default()
        }
    }
}

impl ApiRequest for ProposalsRequest {
    const ENDPOINT: Endpoint = Endpoint::Proposals;
}

/// Rebalance the cluster according to the given goals.
#[derive(Debug, Clone, Default, PartialEq, Params)]
pub struct RebalanceRequest {
    pub common: GenericRequestWithReason,
    /// Whether to allow broker capacity to be estimated
    #[param("allow_capacity_estimation")]
    pub allow_capacity_estimation: bool,
    /// Upper bound of ongoing replica movements between disks within each broker
    #[param("concurrent_intra_broker_partition_movements,omitempty")]
    pub concurrent_intra_broker_partition_movements: i32,
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
    /// Whether to ignore the cached proposal or not
    #[param("ignore_proposal_cache,omitempty")]
    pub ignore_proposal_cache: bool,
    /// Whether to use Kafka assigner mode to generate proposals
    #[param("kafka_assigner,omitempty")]
    pub kafka_assigner: bool,
    /// Whether to balance load between disks within brokers
    #[param("rebalance_disk,omitempty")]
    pub rebalance_disk: bool,
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
}

impl RebalanceRequest {
    pub fn with_defaults() -> Self {
        Self {
            allow_capacity_estimation: true,
            concurrent_intra_broker_partition_movements:
                DEFAULT_CONCURRENT_INTRA_BROKER_PARTITION_MOVEMENTS,
            concurrent_leader_movements: DEFAULT_CONCURRENT_LEADER_MOVEMENTS,
            concurrent_partition_movements_per_broker:
                DEFAULT_CONCURRENT_PARTITION_MOVEMENTS_PER_BROKER,
            execution_progress_check_interval_ms: DEFAULT_EXECUTION_PROGRESS_CHECK_INTERVAL_MS,
            data_from: ProposalDataSource::ValidWindows,
            ..Default::default()
        }
    }
}

impl ApiRequest for RebalanceRequest {
    const ENDPOINT: Endpoint = Endpoint::Rebalance;

    fn validate(&self) -> Result<()> {
        require_positive(
            self.concurrent_partition_movements_per_broker,
            "number of concurrent partition movements per broker must be bigger than 0",
        )?;
        require_positive(
            self.concurrent_leader_movements,
            "number of concurrent leader partition movements must be bigger than 0",
        )?;
        require_positive(
            self.concurrent_intra_broker_partition_movements,
            "number of concurrent intra broker partition movements must be bigger than 0",
        )
    }
}
