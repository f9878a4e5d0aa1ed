// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! PAUSE_SAMPLING and RESUME_SAMPLING endpoints.

use cruise_control_params_derive::Params;

use super::{ApiRequest, GenericRequestWithReason};
use crate::endpoint::Endpoint;

/// Pause metric sampling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Params)]
pub struct PauseSamplingRequest {
    pub common: GenericRequestWithReason,
    /// Review id for 2-step verification
    #[param("review_id,omitempty")]
    pub review_id: i32,
}

impl PauseSamplingRequest {
    pub fn with_defaults() -> Self {
        Self::default()
    }
}

impl ApiRequest for PauseSamplingRequest {
    const ENDPOINT: Endpoint = Endpoint::PauseSampling;
}

/// Resume metric sampling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Params)]
pub struct ResumeSamplingRequest {
    pub common: GenericRequestWithReason,
    /// Review id for 2-step verification
    #[param("review_id,omitempty")]
    pub review_id: i32,
}

impl ResumeSamplingRequest {
    pub fn with_defaults() -> Self {
        Self::default()
    }
}

impl ApiRequest for ResumeSamplingRequest {
    const ENDPOINT: Endpoint = Endpoint::ResumeSampling;
}
