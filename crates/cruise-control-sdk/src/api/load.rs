// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! LOAD and PARTITION_LOAD endpoints.

use cruise_control_params_derive::Params;

use super::{ApiRequest, GenericRequestWithReason};
use crate::endpoint::Endpoint;
use crate::error::{Result, SdkError};
use crate::types::ResourceType;

/// Load of every broker in the cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Params)]
pub struct KafkaClusterLoadRequest {
    pub common: GenericRequestWithReason,
    /// Start time of the cluster load
    #[param("start,omitempty")]
    pub start: i64,
    /// End time of the cluster load
    #[param("end,omitempty")]
    pub end: i64,
    /// Cluster load at a given point in time, mutually exclusive with `end`
    #[param("time,omitempty")]
    pub time: i64,
    /// Whether to allow broker capacity to be estimated
    #[param("allow_capacity_estimation")]
    pub allow_capacity_estimation: bool,
    /// Whether to show the load of each disk of broker
    #[param("populate_disk_info,omitempty")]
    pub populate_disk_info: bool,
    /// Whether to show only the cluster capacity or the utilization
    #[param("capacity_only,omitempty")]
    pub capacity_only: bool,
}

impl KafkaClusterLoadRequest {
    pub fn with_defaults() -> Self {
        Self {
            allow_capacity_estimation: true,
            ..Default::default()
        }
    }
}

impl ApiRequest for KafkaClusterLoadRequest {
    const ENDPOINT: Endpoint = Endpoint::Load;

    fn validate(&self) -> Result<()> {
        check_timestamp("start", self.start)?;
        check_timestamp("end", self.end)?;
        check_timestamp("time", self.time)?;
        if self.end > 0 && self.time > 0 {
            return Err(SdkError::invalid(
                "end and time parameters for Kafka cluster load are mutually exclusive",
            ));
        }
        Ok(())
    }
}

/// Load of the busiest partitions.
#[derive(Debug, Clone, Default, PartialEq, Params)]
pub struct KafkaPartitionLoadRequest {
    pub common: GenericRequestWithReason,
    /// Start time of the partition load
    #[param("start,omitempty")]
    pub start: i64,
    /// End time of the partition load
    #[param("end,omitempty")]
    pub end: i64,
    /// Whether to allow broker capacity to be estimated
    #[param("allow_capacity_estimation")]
    pub allow_capacity_estimation: bool,
    /// Resource type to sort partitions by
    #[param("resource,omitempty")]
    pub sort_by_resource: ResourceType,
    /// Number of partition load entries to report
    #[param("entries,omitempty")]
    pub entries: i32,
    /// Regular expression to filter partition load by topic
    #[param("topic,omitempty")]
    pub topic: String,
    /// Single partition (`0`) or inclusive range (`0-9`) to report
    #[param("partition,omitempty")]
    pub partition: String,
    /// Minimum required ratio of monitored topics, in `0.0..=1.0`
    #[param("min_valid_partition_ratio,omitempty")]
    pub min_valid_partition_ratio: f64,
    /// Whether to report peak load instead of average load
    #[param("max_load,omitempty")]
    pub max_load: bool,
    /// Whether to report average load instead of the latest one
    #[param("avg_load,omitempty")]
    pub avg_load: bool,
    /// Only report partitions hosted by these brokers
    #[param("brokerid,omitempty")]
    pub broker_ids: Vec<i32>,
}

impl KafkaPartitionLoadRequest {
    pub fn with_defaults() -> Self {
        Self {
            allow_capacity_estimation: true,
            sort_by_resource: ResourceType::Disk,
            entries: i32::MAX,
            ..Default::default()
        }
    }
}

impl ApiRequest for KafkaPartitionLoadRequest {
    const ENDPOINT: Endpoint = Endpoint::PartitionLoad;

    fn validate(&self) -> Result<()> {
        check_timestamp("start", self.start)?;
        check_timestamp("end", self.end)?;
        if !self.partition.is_empty() && !is_partition_spec(&self.partition) {
            return Err(SdkError::invalid(
                "partition parameter must define a single (0) or a range (0-9) of partitions",
            ));
        }
        if !(0.0..=1.0).contains(&self.min_valid_partition_ratio) {
            return Err(SdkError::invalid(
                "min_valid_partition_ratio parameter must be in range of 0.0 - 1.0",
            ));
        }
        Ok(())
    }
}

fn check_timestamp(name: &str, value: i64) -> Result<()> {
    if value < 0 {
        return Err(SdkError::InvalidRequest(format!(
            "timestamp set as {name} for Kafka load must not be negative"
        )));
    }
    Ok(())
}

/// Matches `^\d+$` or `^\d+-\d+$`.
fn is_partition_spec(value: &str) -> bool {
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match value.split_once('-') {
        Some((from, to)) => digits(from) && digits(to),
        None => digits(value),
    }
}
