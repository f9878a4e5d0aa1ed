// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! CruiseControlClient for the Cruise Control REST API.

use std::fmt;

use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use crate::api::{
    AdminRequest, ApiRequest, BootstrapRequest, DemoteBrokerRequest, KafkaClusterLoadRequest,
    KafkaClusterStateRequest, KafkaPartitionLoadRequest, PauseSamplingRequest, ProposalsRequest,
    RebalanceRequest, RemoveBrokerRequest, RemoveDisksRequest, ResumeSamplingRequest,
    ReviewBoardRequest, ReviewRequest, RightsizeRequest, StateRequest,
    StopProposalExecutionRequest, TrainRequest, UserTasksRequest,
};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::{
    AdminResult, BrokerStats, KafkaClusterState, MessageResult, OptimizationResult,
    PartitionLoadState, ReviewResult, RightsizeResult, StateResult, UserTaskState,
};
use crate::query::QueryPolicy;
use crate::request::RequestPreparer;
use crate::response::{ApiResponse, decode_response};

/// Async client for Cruise Control.
///
/// Requests are validated and encoded locally before anything is sent; a
/// rejected request never reaches the server. The client is cheap to clone
/// and can be shared between tasks.
#[derive(Clone)]
pub struct CruiseControlClient {
    http: reqwest::Client,
    preparer: RequestPreparer,
    config: ClientConfig,
}

impl CruiseControlClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        let preparer = RequestPreparer::new(&config)?;
        info!(
            url = %preparer.base_url(),
            auth = %config.auth_type,
            "Created Cruise Control client"
        );

        Ok(Self {
            http,
            preparer,
            config,
        })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Send multi-valued parameters as repeated keys instead of comma-joined values.
    pub fn with_query_policy(mut self, policy: QueryPolicy) -> Self {
        self.preparer = self.preparer.with_query_policy(policy);
        self
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Validate, encode and send `request`, decoding the result as `T`.
    #[instrument(
        skip(self, request),
        fields(endpoint = %R::ENDPOINT, method = %R::ENDPOINT.method())
    )]
    pub async fn send<R, T>(&self, request: &R) -> Result<ApiResponse<T>>
    where
        R: ApiRequest,
        T: DeserializeOwned,
    {
        let prepared = self.preparer.prepare(request)?;
        debug!(url = %prepared.url, "Sending request");

        let response = self
            .http
            .request(prepared.method, prepared.url)
            .headers(prepared.headers)
            .send()
            .await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "Got response");

        decode_response(status, &headers, &body)
    }

    /// Report the state of the Cruise Control components.
    pub async fn state(&self, request: &StateRequest) -> Result<ApiResponse<StateResult>> {
        self.send(request).await
    }

    /// Replica and leadership distribution of the Kafka cluster.
    pub async fn kafka_cluster_state(
        &self,
        request: &KafkaClusterStateRequest,
    ) -> Result<ApiResponse<KafkaClusterState>> {
        self.send(request).await
    }

    /// Load of every broker in the cluster.
    pub async fn kafka_cluster_load(
        &self,
        request: &KafkaClusterLoadRequest,
    ) -> Result<ApiResponse<BrokerStats>> {
        self.send(request).await
    }

    /// Load of the busiest partitions.
    pub async fn kafka_partition_load(
        &self,
        request: &KafkaPartitionLoadRequest,
    ) -> Result<ApiResponse<PartitionLoadState>> {
        self.send(request).await
    }

    /// Query optimization proposals.
    pub async fn proposals(
        &self,
        request: &ProposalsRequest,
    ) -> Result<ApiResponse<OptimizationResult>> {
        self.send(request).await
    }

    /// List active and recently finished user tasks.
    pub async fn user_tasks(
        &self,
        request: &UserTasksRequest,
    ) -> Result<ApiResponse<UserTaskState>> {
        self.send(request).await
    }

    /// List requests waiting for review.
    pub async fn review_board(
        &self,
        request: &ReviewBoardRequest,
    ) -> Result<ApiResponse<ReviewResult>> {
        self.send(request).await
    }

    /// Rebalance the cluster.
    pub async fn rebalance(
        &self,
        request: &RebalanceRequest,
    ) -> Result<ApiResponse<OptimizationResult>> {
        self.send(request).await
    }

    /// Move all replicas off the given brokers.
    pub async fn remove_broker(
        &self,
        request: &RemoveBrokerRequest,
    ) -> Result<ApiResponse<OptimizationResult>> {
        self.send(request).await
    }

    /// Move leadership off the given brokers.
    pub async fn demote_broker(
        &self,
        request: &DemoteBrokerRequest,
    ) -> Result<ApiResponse<OptimizationResult>> {
        self.send(request).await
    }

    /// Move all replicas off the given log directories.
    pub async fn remove_disks(
        &self,
        request: &RemoveDisksRequest,
    ) -> Result<ApiResponse<OptimizationResult>> {
        self.send(request).await
    }

    /// Stop the ongoing proposal execution.
    pub async fn stop_proposal_execution(
        &self,
        request: &StopProposalExecutionRequest,
    ) -> Result<ApiResponse<MessageResult>> {
        self.send(request).await
    }

    /// Pause metric sampling.
    pub async fn pause_sampling(
        &self,
        request: &PauseSamplingRequest,
    ) -> Result<ApiResponse<MessageResult>> {
        self.send(request).await
    }

    /// Resume metric sampling.
    pub async fn resume_sampling(
        &self,
        request: &ResumeSamplingRequest,
    ) -> Result<ApiResponse<MessageResult>> {
        self.send(request).await
    }

    /// Change runtime settings.
    pub async fn admin(&self, request: &AdminRequest) -> Result<ApiResponse<AdminResult>> {
        self.send(request).await
    }

    /// Approve or discard pending requests.
    pub async fn review(&self, request: &ReviewRequest) -> Result<ApiResponse<ReviewResult>> {
        self.send(request).await
    }

    /// Ask the provisioner to resize the cluster.
    pub async fn rightsize(
        &self,
        request: &RightsizeRequest,
    ) -> Result<ApiResponse<RightsizeResult>> {
        self.send(request).await
    }

    /// Bootstrap the load monitor.
    pub async fn bootstrap(
        &self,
        request: &BootstrapRequest,
    ) -> Result<ApiResponse<MessageResult>> {
        self.send(request).await
    }

    /// Train the load model.
    pub async fn train(&self, request: &TrainRequest) -> Result<ApiResponse<MessageResult>> {
        self.send(request).await
    }
}

impl fmt::Debug for CruiseControlClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CruiseControlClient")
            .field("url", &self.preparer.base_url().as_str())
            .field("user_agent", &self.config.user_agent)
            .finish_non_exhaustive()
    }
}
