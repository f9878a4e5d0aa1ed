// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! BOOTSTRAP and TRAIN endpoints.

use cruise_control_params_derive::Params;

use super::{ApiRequest, GenericRequest};
use crate::endpoint::Endpoint;
use crate::error::{Result, SdkError};

/// Bootstrap the load monitor from historical metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Params)]
pub struct BootstrapRequest {
    pub common: GenericRequest,
    /// Whether to clear all the existing metric samples
    #[param("clearmetrics,omitempty")]
    pub clear_metrics: bool,
    /// Whether to run in developer mode
    #[param("developer_mode,omitempty")]
    pub developer_mode: bool,
    /// End timestamp in milliseconds, open-ended when unset
    #[param("end,omitempty")]
    pub end: i64,
    /// Start timestamp in milliseconds
    #[param("start")]
    pub start: i64,
}

impl BootstrapRequest {
    pub fn with_defaults() -> Self {
        Self {
            developer_mode: true,
            ..Default::default()
        }
    }
}

impl ApiRequest for BootstrapRequest {
    const ENDPOINT: Endpoint = Endpoint::Bootstrap;

    fn validate(&self) -> Result<()> {
        if self.start < 1 {
            return Err(SdkError::invalid(
                "timestamp for bootstrap start must be bigger than 0",
            ));
        }
        if self.end != 0 && self.end < self.start {
            return Err(SdkError::invalid(
                "timestamp for bootstrap end must not be before start",
            ));
        }
        Ok(())
    }
}

/// Train the linear regression model of the load monitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Params)]
pub struct TrainRequest {
    pub common: GenericRequest,
    /// End timestamp in milliseconds
    #[param("end,omitempty")]
    pub end: i64,
    /// Start timestamp in milliseconds, `-1` for the earliest available
    #[param("start")]
    pub start: i64,
}

impl TrainRequest {
    pub fn with_defaults() -> Self {
        Self {
            start: -1,
            ..Default::default()
        }
    }
}

impl ApiRequest for TrainRequest {
    const ENDPOINT: Endpoint = Endpoint::Train;

    fn validate(&self) -> Result<()> {
        if self.start < -1 {
            return Err(SdkError::invalid(
                "timestamp for training start must be bigger than -1",
            ));
        }
        if self.end < 0 {
            return Err(SdkError::invalid(
                "timestamp for training end must be 0 or bigger number",
            ));
        }
        Ok(())
    }
}
