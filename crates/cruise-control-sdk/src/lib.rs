// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Cruise Control SDK
//!
//! Typed client for the Kafka Cruise Control REST API.
//!
//! Requests are plain structs whose fields are annotated with the query
//! parameter they map to; [`cruise_control_params`] turns them into a
//! parameter map, and this crate handles everything around that:
//!
//! - Request types and their business-rule validation ([`api`])
//! - Parameter enums with their wire names ([`types`])
//! - Query string policy, URL and header preparation
//! - Response envelope decoding (result, progress report or service error)
//! - Result models of every endpoint ([`models`])
//! - Configuration and an async HTTP client
//!
//! # Example
//!
//! ```no_run
//! use cruise_control_sdk::{ClientConfig, CruiseControlClient, RemoveBrokerRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CruiseControlClient::new(
//!     ClientConfig::new().with_server_url("http://cruise-control:8090/kafkacruisecontrol"),
//! )?;
//!
//! let request = RemoveBrokerRequest {
//!     broker_ids: vec![3],
//!     dry_run: true,
//!     ..RemoveBrokerRequest::with_defaults()
//! };
//! let response = client.remove_broker(&request).await?;
//! match response.result() {
//!     Some(result) => println!("{} replica movements", result.summary.num_replica_movements),
//!     None => println!("Still running as task {:?}", response.task_id),
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
mod auth;
mod client;
mod config;
mod content_type;
mod endpoint;
mod error;
pub mod models;
mod query;
mod request;
mod response;
pub mod types;

pub use api::{
    AdminRequest, ApiRequest, BootstrapRequest, DemoteBrokerRequest, GenericRequest,
    GenericRequestWithReason, KafkaClusterLoadRequest, KafkaClusterStateRequest,
    KafkaPartitionLoadRequest, PauseSamplingRequest, ProposalsRequest, RebalanceRequest,
    RemoveBrokerRequest, RemoveDisksRequest, ResumeSamplingRequest, ReviewBoardRequest,
    ReviewRequest, RightsizeRequest, StateRequest, StopProposalExecutionRequest, TrainRequest,
    UserTasksRequest,
};
pub use auth::Auth;
pub use client::CruiseControlClient;
pub use config::{AuthType, ClientConfig, DEFAULT_SERVER_URL, DEFAULT_USER_AGENT};
pub use content_type::ContentType;
pub use endpoint::Endpoint;
pub use error::{Result, SdkError};
pub use models::{
    AdminResult, BrokerStats, KafkaClusterState, MessageResult, OptimizationResult,
    PartitionLoadState, ReviewResult, RightsizeResult, StateResult, UserTaskState,
};
pub use query::{QueryPolicy, parse_query, to_query_string};
pub use request::{PreparedRequest, RequestPreparer, base_url};
pub use response::{
    ApiError, ApiResponse, CRUISE_CONTROL_VERSION_HEADER, OperationProgress, ProgressResult,
    ProgressStep, ResponseBody, USER_TASK_ID_HEADER, decode_response,
};
pub use types::{
    AnomalyType, BrokerIdAndLogDirs, ConcurrencyType, Goal, ProposalDataSource,
    ReplicaMovementStrategy, ResourceType, Substate, UserTaskStatus,
};

pub use cruise_control_params::{Encoder, Params, to_params};
pub use cruise_control_params_derive::Params;
