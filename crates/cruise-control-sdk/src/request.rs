// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Turning a typed request into a method, URL and header set.

use cruise_control_params::Encoder;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, Url};
use tracing::debug;

use crate::api::ApiRequest;
use crate::auth::Auth;
use crate::config::{ClientConfig, DEFAULT_SERVER_URL};
use crate::content_type::{ContentType, MIME_TYPE_JSON};
use crate::error::{Result, SdkError};
use crate::query::{QueryPolicy, to_query_string};

/// Parse the server URL, falling back to the default and making sure it ends
/// with `/` so endpoint paths resolve below it.
pub fn base_url(server_url: &str) -> Result<Url> {
    let mut url = if server_url.is_empty() {
        DEFAULT_SERVER_URL.to_string()
    } else {
        server_url.to_string()
    };
    if !url.ends_with('/') {
        url.push('/');
    }
    Url::parse(&url)
        .map_err(|e| SdkError::Config(format!("failed to parse Cruise Control server URL: {e}")))
}

/// A request ready to be handed to the HTTP client.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

/// Builds [`PreparedRequest`]s for one server.
#[derive(Debug, Clone)]
pub struct RequestPreparer {
    base_url: Url,
    user_agent: HeaderValue,
    authorization: Option<HeaderValue>,
    encoder: Encoder,
    policy: QueryPolicy,
}

impl RequestPreparer {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| SdkError::Config(format!("invalid user agent: {e}")))?;
        let authorization = config
            .auth()
            .as_ref()
            .map(authorization_header)
            .transpose()?;

        Ok(Self {
            base_url: base_url(&config.server_url)?,
            user_agent,
            authorization,
            encoder: Encoder::default(),
            policy: QueryPolicy::default(),
        })
    }

    /// Use a different multi-value policy for the query string.
    pub fn with_query_policy(mut self, policy: QueryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Validate and encode `request`. `json=true` is always sent.
    pub fn prepare<R: ApiRequest>(&self, request: &R) -> Result<PreparedRequest> {
        request.validate()?;

        let mut params = self.encoder.encode(request)?;
        params.set("json", ["true"]);

        let endpoint = R::ENDPOINT;
        let mut url = self
            .base_url
            .join(&endpoint.path())
            .map_err(|e| {
                SdkError::Config(format!("invalid endpoint path {}: {e}", endpoint.path()))
            })?;
        let query = to_query_string(&params, self.policy);
        url.set_query(Some(&query));

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, self.user_agent.clone());
        headers.insert(ACCEPT, HeaderValue::from_static(MIME_TYPE_JSON));
        let content_type = HeaderValue::from_str(&ContentType::json_utf8().to_string())
            .map_err(|e| SdkError::Config(format!("invalid content type: {e}")))?;
        headers.insert(CONTENT_TYPE, content_type);
        if let Some(authorization) = &self.authorization {
            headers.insert(AUTHORIZATION, authorization.clone());
        }

        debug!(endpoint = %endpoint, params = params.len(), "prepared request");

        Ok(PreparedRequest {
            method: endpoint.method(),
            url,
            headers,
        })
    }
}

fn authorization_header(auth: &Auth) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&auth.header_value())
        .map_err(|e| SdkError::Config(format!("invalid credentials: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}
