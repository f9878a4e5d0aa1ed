// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! REVIEW and REVIEW_BOARD endpoints of the two-step verification flow.

use cruise_control_params_derive::Params;

use super::{ApiRequest, GenericRequest, GenericRequestWithReason};
use crate::endpoint::Endpoint;
use crate::error::{Result, SdkError};

/// Approve or discard pending requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Params)]
pub struct ReviewRequest {
    pub common: GenericRequestWithReason,
    /// Review ids to approve
    #[param("approve,omitempty")]
    pub approve: Vec<i32>,
    /// Review ids to discard
    #[param("discard,omitempty")]
    pub discard: Vec<i32>,
}

impl ReviewRequest {
    pub fn with_defaults() -> Self {
        Self::default()
    }
}

impl ApiRequest for ReviewRequest {
    const ENDPOINT: Endpoint = Endpoint::Review;

    fn validate(&self) -> Result<()> {
        if let Some(id) = self.approve.iter().find(|id| self.discard.contains(id)) {
            return Err(SdkError::InvalidRequest(format!(
                "review {id} cannot be approved and discarded at the same time"
            )));
        }
        Ok(())
    }
}

/// List requests waiting for review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Params)]
pub struct ReviewBoardRequest {
    pub common: GenericRequest,
    /// Only show these reviews
    #[param("review_ids,omitempty")]
    pub review_ids: Vec<i32>,
}

impl ReviewBoardRequest {
    pub fn with_defaults() -> Self {
        Self::default()
    }
}

impl ApiRequest for ReviewBoardRequest {
    const ENDPOINT: Endpoint = Endpoint::ReviewBoard;
}
