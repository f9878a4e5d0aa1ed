// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Broker and partition load of LOAD and PARTITION_LOAD.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use strum::{Display, EnumString};

/// Load of every host and broker in the cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrokerStats {
    pub version: i32,
    pub hosts: Vec<HostLoadStats>,
    pub brokers: Vec<BrokerLoadStats>,
}

impl BrokerStats {
    pub fn broker(&self, broker_id: i32) -> Option<&BrokerLoadStats> {
        self.brokers.iter().find(|broker| broker.broker == broker_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HostLoadStats {
    pub host: String,
    pub rack: String,
    pub replicas: i32,
    pub leaders: i32,
    pub num_core: f64,
    pub cpu_pct: f64,
    #[serde(rename = "DiskMB")]
    pub disk_mb: f64,
    #[serde(rename = "DiskCapacityMB")]
    pub disk_capacity_mb: f64,
    pub disk_pct: f64,
    pub leader_nw_in_rate: f64,
    pub follower_nw_in_rate: f64,
    pub nw_out_rate: f64,
    pub pnw_out_rate: f64,
    pub network_in_capacity: f64,
    pub network_out_capacity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BrokerLoadStats {
    pub broker: i32,
    pub broker_state: BrokerState,
    pub host: String,
    pub rack: String,
    pub replicas: i32,
    pub leaders: i32,
    pub num_core: f64,
    pub cpu_pct: f64,
    #[serde(rename = "DiskMB")]
    pub disk_mb: f64,
    #[serde(rename = "DiskCapacityMB")]
    pub disk_capacity_mb: f64,
    pub disk_pct: f64,
    pub leader_nw_in_rate: f64,
    pub follower_nw_in_rate: f64,
    pub nw_out_rate: f64,
    pub pnw_out_rate: f64,
    pub network_in_capacity: f64,
    pub network_out_capacity: f64,
    /// Per log directory usage, keyed by log directory.
    pub disk_state: BTreeMap<String, DiskStats>,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BrokerState {
    Alive,
    Dead,
    New,
    Demoted,
    BadDisks,
    #[default]
    #[serde(other)]
    Undefined,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DiskStats {
    #[serde(rename = "DiskMB")]
    pub disk_mb: DiskUsage,
    pub disk_pct: DiskUsage,
    pub num_leader_replicas: i32,
    pub num_replicas: i32,
}

/// Usage of a log directory; reported as `DEAD` for failed disks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiskUsage {
    Usage(f64),
    Dead,
}

impl DiskUsage {
    const DEAD: &'static str = "DEAD";

    pub fn is_dead(&self) -> bool {
        matches!(self, DiskUsage::Dead)
    }

    pub fn usage(&self) -> Option<f64> {
        match self {
            DiskUsage::Usage(usage) => Some(*usage),
            DiskUsage::Dead => None,
        }
    }
}

impl Default for DiskUsage {
    fn default() -> Self {
        DiskUsage::Usage(0.0)
    }
}

impl Serialize for DiskUsage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DiskUsage::Usage(usage) => serializer.serialize_f64(*usage),
            DiskUsage::Dead => serializer.serialize_str(Self::DEAD),
        }
    }
}

impl<'de> Deserialize<'de> for DiskUsage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(usage) => Ok(DiskUsage::Usage(usage)),
            Raw::Text(text) if text == Self::DEAD => Ok(DiskUsage::Dead),
            Raw::Text(text) => text.parse().map(DiskUsage::Usage).map_err(|e| {
                de::Error::custom(format!("failed to parse disk usage {text:?}: {e}"))
            }),
        }
    }
}

/// Load of the busiest partitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionLoadState {
    pub version: i32,
    pub records: Vec<PartitionLoad>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartitionLoad {
    pub topic: String,
    pub partition: i32,
    pub leader: i32,
    pub followers: Vec<i32>,
    pub cpu: f64,
    pub network_inbound: f64,
    pub network_outbound: f64,
    pub disk: f64,
    #[serde(rename = "msg_in")]
    pub msg_in: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broker_stats() {
        let stats: BrokerStats = serde_json::from_value(serde_json::json!({
            "version": 1,
            "hosts": [{"Host": "kafka-0", "Replicas": 10, "DiskMB": 512.5}],
            "brokers": [{
                "Broker": 0,
                "BrokerState": "ALIVE",
                "CpuPct": 12.5,
                "DiskCapacityMB": 10000.0,
                "DiskState": {
                    "/kafka/a": {"DiskMB": 100.0, "DiskPct": "1.0", "NumReplicas": 3},
                    "/kafka/b": {"DiskMB": "DEAD", "DiskPct": "DEAD"}
                }
            }, {
                "Broker": 1,
                "BrokerState": "SHRINKING"
            }]
        }))
        .unwrap();

        assert_eq!(stats.hosts[0].disk_mb, 512.5);
        let broker = stats.broker(0).unwrap();
        assert_eq!(broker.broker_state, BrokerState::Alive);
        assert_eq!(broker.cpu_pct, 12.5);
        assert_eq!(broker.disk_capacity_mb, 10000.0);
        assert_eq!(broker.disk_state["/kafka/a"].disk_pct.usage(), Some(1.0));
        assert_eq!(broker.disk_state["/kafka/a"].num_replicas, 3);
        assert!(broker.disk_state["/kafka/b"].disk_mb.is_dead());
        assert_eq!(stats.broker(1).unwrap().broker_state, BrokerState::Undefined);
        assert!(stats.broker(7).is_none());
    }

    #[test]
    fn test_invalid_disk_usage() {
        let err = serde_json::from_str::<DiskUsage>("\"full\"").unwrap_err();
        assert!(err.to_string().contains("failed to parse disk usage"));
    }

    #[test]
    fn test_partition_load_records() {
        let state: PartitionLoadState = serde_json::from_value(serde_json::json!({
            "version": 1,
            "records": [{
                "topic": "orders",
                "partition": 0,
                "leader": 2,
                "followers": [0, 1],
                "networkInbound": 1.5,
                "msg_in": 42.0
            }]
        }))
        .unwrap();

        let record = &state.records[0];
        assert_eq!(record.followers, [0, 1]);
        assert_eq!(record.network_inbound, 1.5);
        assert_eq!(record.msg_in, 42.0);
    }
}
