// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! STATE, KAFKA_CLUSTER_STATE and USER_TASKS endpoints.

use cruise_control_params_derive::Params;

use super::{ApiRequest, GenericRequestWithReason};
use crate::endpoint::Endpoint;
use crate::error::{Result, SdkError};
use crate::types::{Substate, UserTaskStatus};

/// State of the Cruise Control components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Params)]
pub struct StateRequest {
    pub common: GenericRequestWithReason,
    /// Substates to report
    #[param("substates,omitempty")]
    pub substates: Vec<Substate>,
    /// Return detailed state information
    #[param("verbose,omitempty")]
    pub verbose: bool,
    /// Return more detailed state information
    #[param("super_verbose,omitempty")]
    pub super_verbose: bool,
}

impl StateRequest {
    pub fn with_defaults() -> Self {
        Self {
            substates: vec![
                Substate::Analyzer,
                Substate::AnomalyDetector,
                Substate::Executor,
                Substate::Monitor,
            ],
            ..Default::default()
        }
    }
}

impl ApiRequest for StateRequest {
    const ENDPOINT: Endpoint = Endpoint::State;
}

/// Replica and leadership distribution of the Kafka cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Params)]
pub struct KafkaClusterStateRequest {
    pub common: GenericRequestWithReason,
    /// Return detailed state information
    #[param("verbose,omitempty")]
    pub verbose: bool,
    /// Regular expression limiting the reported topics
    #[param("topic,omitempty")]
    pub topic: String,
}

impl KafkaClusterStateRequest {
    pub fn with_defaults() -> Self {
        Self::default()
    }
}

impl ApiRequest for KafkaClusterStateRequest {
    const ENDPOINT: Endpoint = Endpoint::KafkaClusterState;
}

/// Active and recently finished user tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Params)]
pub struct UserTasksRequest {
    pub common: GenericRequestWithReason,
    /// Only show tasks created by these clients
    #[param("client_ids,omitempty")]
    pub client_ids: Vec<String>,
    /// Only show tasks of these endpoints
    #[param("endpoints,omitempty")]
    pub endpoints: Vec<Endpoint>,
    /// Number of tasks to report
    #[param("entries,omitempty")]
    pub entries: i32,
    /// Only show tasks in these states
    #[param("types,omitempty")]
    pub types: Vec<UserTaskStatus>,
    /// Only show these tasks
    #[param("user_task_ids,omitempty")]
    pub user_task_ids: Vec<String>,
    /// Whether to return the original response of completed tasks
    #[param("fetch_completed_task,omitempty")]
    pub fetch_completed_task: bool,
}

impl UserTasksRequest {
    pub fn with_defaults() -> Self {
        Self {
            entries: i32::MAX,
            ..Default::default()
        }
    }
}

impl ApiRequest for UserTasksRequest {
    const ENDPOINT: Endpoint = Endpoint::UserTasks;

    fn validate(&self) -> Result<()> {
        if self.entries < 0 {
            return Err(SdkError::invalid("number of entries must not be negative"));
        }
        Ok(())
    }
}
