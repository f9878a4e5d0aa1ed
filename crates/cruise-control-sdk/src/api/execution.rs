// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! STOP_PROPOSAL_EXECUTION and RIGHTSIZE endpoints.

use cruise_control_params_derive::Params;

use super::{ApiRequest, GenericRequestWithReason};
use crate::endpoint::Endpoint;
use crate::error::{Result, SdkError};

/// Stop the ongoing proposal execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Params)]
pub struct StopProposalExecutionRequest {
    pub common: GenericRequestWithReason,
    /// Whether to force stop the execution
    #[param("force_stop,omitempty")]
    pub force_stop: bool,
    /// Review id for 2-step verification
    #[param("review_id,omitempty")]
    pub review_id: i32,
    /// Whether to stop executions started by external agents
    #[param("stop_external_agent,omitempty")]
    pub stop_external_agent: bool,
}

impl StopProposalExecutionRequest {
    pub fn with_defaults() -> Self {
        Self::default()
    }
}

impl ApiRequest for StopProposalExecutionRequest {
    const ENDPOINT: Endpoint = Endpoint::StopProposalExecution;
}

/// Ask the provisioner to resize the cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Params)]
pub struct RightsizeRequest {
    pub common: GenericRequestWithReason,
    /// Number of brokers to add
    #[param("num_brokers_to_add,omitempty")]
    pub num_brokers_to_add: i32,
    /// Target number of partitions of `topic`
    #[param("partition_count,omitempty")]
    pub partition_count: i32,
    /// Regular expression of topics to resize
    #[param("topic,omitempty")]
    pub topic: String,
}

impl RightsizeRequest {
    pub fn with_defaults() -> Self {
        Self::default()
    }
}

impl ApiRequest for RightsizeRequest {
    const ENDPOINT: Endpoint = Endpoint::Rightsize;

    fn validate(&self) -> Result<()> {
        if self.num_brokers_to_add < 0 || self.partition_count < 0 {
            return Err(SdkError::invalid(
                "number of brokers to add and partition count must not be negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cruise_control_params::to_params;

    use super::*;

    #[test]
    fn test_stop_execution_force() {
        let request = StopProposalExecutionRequest {
            force_stop: true,
            ..Default::default()
        };
        let params = to_params(&request).unwrap();
        assert_eq!(params.pairs().collect::<Vec<_>>(), [("force_stop", "true")]);
    }

    #[test]
    fn test_rightsize() {
        let request = RightsizeRequest {
            num_brokers_to_add: 2,
            topic: "orders-.*".to_string(),
            ..Default::default()
        };
        request.validate().unwrap();

        let params = to_params(&request).unwrap();
        assert_eq!(params.get("num_brokers_to_add"), Some("2"));
        assert_eq!(params.get("topic"), Some("orders-.*"));
        assert!(!params.contains_key("partition_count"));
    }

    #[test]
    fn test_rightsize_negative() {
        let request = RightsizeRequest {
            partition_count: -1,
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
