// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! ADMIN endpoint.

use cruise_control_params_derive::Params;

use super::{
    ApiRequest, DEFAULT_CONCURRENT_INTRA_BROKER_PARTITION_MOVEMENTS,
    DEFAULT_CONCURRENT_LEADER_MOVEMENTS, DEFAULT_CONCURRENT_PARTITION_MOVEMENTS_PER_BROKER,
    DEFAULT_EXECUTION_PROGRESS_CHECK_INTERVAL_MS, GenericRequestWithReason, require_positive,
};
use crate::endpoint::Endpoint;
use crate::error::{Result, SdkError};
use crate::types::{AnomalyType, ConcurrencyType};

/// Change Cruise Control settings at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Params)]
pub struct AdminRequest {
    pub common: GenericRequestWithReason,
    /// Change upper bound of ongoing replica movements between disks within each broker.
    #[param("concurrent_intra_broker_partition_movements,omitempty")]
    pub concurrent_intra_broker_partition_movements: i32,
    /// Change upper bound of ongoing leadership movements.
    #[param("concurrent_leader_movements,omitempty")]
    pub concurrent_leader_movements: i32,
    /// Change upper bound of ongoing replica movements going into/out of each broker.
    #[param("concurrent_partition_movements_per_broker,omitempty")]
    pub concurrent_partition_movements_per_broker: i32,
    /// Disable concurrency adjuster for given concurrency types.
    #[param("disable_concurrency_adjuster_for,omitempty")]
    pub disable_concurrency_adjuster_for: Vec<ConcurrencyType>,
    /// Disable self-healing for certain anomaly types.
    #[param("disable_self_healing_for,omitempty")]
    pub disable_self_healing_for: Vec<AnomalyType>,
    /// Drop broker ids from the recently demoted broker list.
    #[param("drop_recently_demoted_brokers,omitempty")]
    pub drop_recently_demoted_brokers: Vec<i32>,
    /// Drop broker ids from the recently removed broker list.
    #[param("drop_recently_removed_brokers,omitempty")]
    pub drop_recently_removed_brokers: Vec<i32>,
    /// Enable concurrency adjuster for given concurrency types.
    #[param("enable_concurrency_adjuster_for,omitempty")]
    pub enable_concurrency_adjuster_for: Vec<ConcurrencyType>,
    /// Enable self-healing for certain anomaly types.
    #[param("enable_self_healing_for,omitempty")]
    pub enable_self_healing_for: Vec<AnomalyType>,
    /// Change execution progress check interval in milliseconds.
    #[param("execution_progress_check_interval_ms,omitempty")]
    pub execution_progress_check_interval_ms: i64,
    /// Whether to enable MinISR-based concurrency adjustment.
    #[param("min_isr_based_concurrency_adjustment,omitempty")]
    pub min_isr_based_concurrency_adjustment: bool,
    /// Review id for 2-step verification.
    #[param("review_id,omitempty")]
    pub review_id: i32,
}

impl AdminRequest {
    pub fn with_defaults() -> Self {
        Self {
            concurrent_intra_broker_partition_movements:
                DEFAULT_CONCURRENT_INTRA_BROKER_PARTITION_MOVEMENTS,
            concurrent_leader_movements: DEFAULT_CONCURRENT_LEADER_MOVEMENTS,
            concurrent_partition_movements_per_broker:
                DEFAULT_CONCURRENT_PARTITION_MOVEMENTS_PER_BROKER,
            execution_progress_check_interval_ms: DEFAULT_EXECUTION_PROGRESS_CHECK_INTERVAL_MS,
            ..Default::default()
        }
    }
}

impl ApiRequest for AdminRequest {
    const ENDPOINT: Endpoint = Endpoint::Admin;

    fn validate(&self) -> Result<()> {
        require_positive(
            self.concurrent_partition_movements_per_broker,
            "number of concurrent partition movements per broker must be bigger than 0",
        )?;
        require_positive(
            self.concurrent_intra_broker_partition_movements,
            "number of concurrent intra broker partition movements must be bigger than 0",
        )?;
        require_positive(
            self.concurrent_leader_movements,
            "number of concurrent leader partition movements must be bigger than 0",
        )?;
        check_self_healing("disabling", &self.disable_self_healing_for)?;
        check_self_healing("enabling", &self.enable_self_healing_for)
    }
}

fn check_self_healing(action: &str, anomalies: &[AnomalyType]) -> Result<()> {
    let unsupported: Vec<String> = anomalies
        .iter()
        .filter(|anomaly| !anomaly.supports_self_healing())
        .map(ToString::to_string)
        .collect();
    if unsupported.is_empty() {
        return Ok(());
    }
    Err(SdkError::InvalidRequest(format!(
        "{action} self healing for the following anomaly types is not supported: {}",
        unsupported.join(", ")
    )))
}
