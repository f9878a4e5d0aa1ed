// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Cruise Control REST endpoints.

use cruise_control_params::{EncodeOptions, EncodeParams, EncoderState};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, VariantNames};

/// An endpoint of the Cruise Control REST API.
///
/// Renders as its upper-case name (`REMOVE_BROKER`); the URL path is the
/// lower-case form (`remove_broker`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Endpoint {
    AddBroker,
    Admin,
    Bootstrap,
    DemoteBroker,
    FixOfflineReplicas,
    KafkaClusterState,
    Load,
    PartitionLoad,
    PauseSampling,
    Proposals,
    Rebalance,
    RemoveBroker,
    RemoveDisks,
    ResumeSampling,
    Review,
    ReviewBoard,
    Rightsize,
    State,
    StopProposalExecution,
    TopicConfiguration,
    Train,
    UserTasks,
}

impl Endpoint {
    /// Path of the endpoint relative to the server URL.
    pub fn path(&self) -> String {
        self.to_string().to_lowercase()
    }

    /// HTTP method the endpoint is called with.
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Bootstrap
            | Endpoint::KafkaClusterState
            | Endpoint::Load
            | Endpoint::PartitionLoad
            | Endpoint::Proposals
            | Endpoint::ReviewBoard
            | Endpoint::State
            | Endpoint::Train
            | Endpoint::UserTasks => Method::GET,
            Endpoint::AddBroker
            | Endpoint::Admin
            | Endpoint::DemoteBroker
            | Endpoint::FixOfflineReplicas
            | Endpoint::PauseSampling
            | Endpoint::Rebalance
            | Endpoint::RemoveBroker
            | Endpoint::RemoveDisks
            | Endpoint::ResumeSampling
            | Endpoint::Review
            | Endpoint::Rightsize
            | Endpoint::StopProposalExecution
            | Endpoint::TopicConfiguration => Method::POST,
        }
    }
}

impl EncodeParams for Endpoint {
    fn encode_params(
        &self,
        state: &mut EncoderState,
        options: EncodeOptions<'_>,
    ) -> cruise_control_params::Result<()> {
        state.push_scalar(options, false, || self.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Endpoint::RemoveBroker.path(), "remove_broker");
        assert_eq!(Endpoint::Load.path(), "load");
        assert_eq!(Endpoint::PartitionLoad.path(), "partition_load");
        assert_eq!(
            Endpoint::StopProposalExecution.path(),
            "stop_proposal_execution"
        );
    }

    #[test]
    fn test_methods() {
        assert_eq!(Endpoint::State.method(), Method::GET);
        assert_eq!(Endpoint::UserTasks.method(), Method::GET);
        assert_eq!(Endpoint::Rebalance.method(), Method::POST);
        assert_eq!(Endpoint::Admin.method(), Method::POST);
    }

    #[test]
    fn test_names_round_trip() {
        for endpoint in Endpoint::iter() {
            assert_eq!(Endpoint::from_str(&endpoint.to_string()).unwrap(), endpoint);
        }
        assert_eq!(Endpoint::VARIANTS.len(), Endpoint::iter().count());
    }
}
