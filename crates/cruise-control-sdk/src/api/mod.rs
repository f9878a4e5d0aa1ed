// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Request types for the Cruise Control endpoints.
//!
//! Every request embeds [`GenericRequest`] (directly or through
//! [`GenericRequestWithReason`]); the embedded fields are merged into the
//! request's own query parameters.

mod admin;
mod broker;
mod execution;
mod load;
mod proposals;
mod review;
mod sampling;
mod state;
mod training;

use cruise_control_params::EncodeParams;
use cruise_control_params_derive::Params;

use crate::endpoint::Endpoint;
use crate::error::Result;

pub use admin::AdminRequest;
pub use broker::{DemoteBrokerRequest, RemoveBrokerRequest, RemoveDisksRequest};
pub use execution::{RightsizeRequest, StopProposalExecutionRequest};
pub use load::{KafkaClusterLoadRequest, KafkaPartitionLoadRequest};
pub use proposals::{ProposalsRequest, RebalanceRequest};
pub use review::{ReviewBoardRequest, ReviewRequest};
pub use sampling::{PauseSamplingRequest, ResumeSamplingRequest};
pub use state::{KafkaClusterStateRequest, StateRequest, UserTasksRequest};
pub use training::{BootstrapRequest, TrainRequest};

/// Default upper bound of ongoing leadership movements.
pub const DEFAULT_CONCURRENT_LEADER_MOVEMENTS: i32 = 1000;
/// Default upper bound of ongoing replica movements per broker.
pub const DEFAULT_CONCURRENT_PARTITION_MOVEMENTS_PER_BROKER: i32 = 5;
/// Default upper bound of ongoing replica movements between disks of a broker.
pub const DEFAULT_CONCURRENT_INTRA_BROKER_PARTITION_MOVEMENTS: i32 = 2;
/// Default execution progress check interval.
pub const DEFAULT_EXECUTION_PROGRESS_CHECK_INTERVAL_MS: i64 = 10_000;

/// A request bound to a Cruise Control endpoint.
pub trait ApiRequest: EncodeParams {
    /// Endpoint the request is sent to.
    const ENDPOINT: Endpoint;

    /// Check business rules before sending.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Parameters accepted by every endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Params)]
pub struct GenericRequest {
    /// Whether to return the response in JSON format or not
    #[param("json,omitempty")]
    pub json: bool,
    /// Whether to return JSON schema in response header or not
    #[param("get_response_schema,omitempty")]
    pub get_response_schema: bool,
    /// The user specified by a trusted proxy in that authentication model
    #[param("doAs,omitempty")]
    pub do_as: String,
}

/// [`GenericRequest`] plus a free-form reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Params)]
pub struct GenericRequestWithReason {
    pub generic: GenericRequest,
    /// Reason for request
    #[param("reason,omitempty")]
    pub reason: String,
}

impl GenericRequestWithReason {
    pub fn with_reason(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            ..Default::default()
        }
    }
}

pub(crate) fn require_positive<T>(value: T, message: &str) -> Result<()>
where
    T: PartialOrd + Default,
{
    if value > T::default() {
        Ok(())
    } else {
        Err(crate::error::SdkError::invalid(message))
    }
}
