// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Configuration for the Cruise Control client.

use std::time::Duration;

use strum::{Display, EnumString};

use crate::auth::Auth;
use crate::error::{Result, SdkError};

/// Server URL used when none is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8090/kafkacruisecontrol/";
/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "cruise-control-sdk";
/// Request timeout used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const ENV_SERVER_URL: &str = "CC_SERVER_URL";
const ENV_AUTH_TYPE: &str = "CC_AUTH_TYPE";
const ENV_USERNAME: &str = "CC_USERNAME";
const ENV_PASSWORD: &str = "CC_PASSWORD";
const ENV_ACCESS_TOKEN: &str = "CC_ACCESS_TOKEN";
const ENV_USER_AGENT: &str = "CC_USER_AGENT";
const ENV_REQUEST_TIMEOUT_MS: &str = "CC_REQUEST_TIMEOUT_MS";

/// How requests authenticate against Cruise Control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthType {
    #[default]
    None,
    Basic,
    AccessToken,
}

impl AuthType {
    /// Parse an auth type, falling back to [`AuthType::None`] for unknown values.
    pub fn from_str_or_none(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

/// Configuration for the CruiseControlClient.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Cruise Control REST API.
    pub server_url: String,
    /// Authentication scheme.
    pub auth_type: AuthType,
    /// Username for basic authentication.
    pub username: String,
    /// Password for basic authentication.
    pub password: String,
    /// Token for bearer authentication.
    pub access_token: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Request timeout.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            auth_type: AuthType::None,
            username: String::new(),
            password: String::new(),
            access_token: String::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CC_SERVER_URL`: Cruise Control URL (default: "http://localhost:8090/kafkacruisecontrol/")
    /// - `CC_AUTH_TYPE`: `NONE`, `BASIC` or `ACCESS_TOKEN` (default: "NONE")
    /// - `CC_USERNAME` / `CC_PASSWORD`: Basic auth credentials
    /// - `CC_ACCESS_TOKEN`: Bearer token
    /// - `CC_USER_AGENT`: User agent (default: "cruise-control-sdk")
    /// - `CC_REQUEST_TIMEOUT_MS`: Request timeout in milliseconds (default: 30000)
    pub fn from_env() -> Result<Self> {
        let server_url = non_empty_var(ENV_SERVER_URL)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        let auth_type = non_empty_var(ENV_AUTH_TYPE)
            .map(|v| AuthType::from_str_or_none(&v))
            .unwrap_or_default();

        let user_agent = non_empty_var(ENV_USER_AGENT)
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let request_timeout_ms: u64 = std::env::var(ENV_REQUEST_TIMEOUT_MS)
            .unwrap_or_else(|_| "30000".to_string())
            .parse()
            .map_err(|e| SdkError::Config(format!("invalid {ENV_REQUEST_TIMEOUT_MS}: {e}")))?;

        Ok(Self {
            server_url,
            auth_type,
            username: std::env::var(ENV_USERNAME).unwrap_or_default(),
            password: std::env::var(ENV_PASSWORD).unwrap_or_default(),
            access_token: std::env::var(ENV_ACCESS_TOKEN).unwrap_or_default(),
            user_agent,
            request_timeout: Duration::from_millis(request_timeout_ms),
        })
    }

    /// Set the server URL.
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = url.into();
        self
    }

    /// Use basic authentication.
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.auth_type = AuthType::Basic;
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Use bearer token authentication.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.auth_type = AuthType::AccessToken;
        self.access_token = token.into();
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Credentials matching the configured auth type.
    pub fn auth(&self) -> Option<Auth> {
        match self.auth_type {
            AuthType::None => None,
            AuthType::Basic => Some(Auth::Basic {
                username: self.username.clone(),
                password: self.password.clone(),
            }),
            AuthType::AccessToken => Some(Auth::AccessToken(self.access_token.clone())),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
        assert_eq!(config.user_agent, "cruise-control-sdk");
        assert_eq!(config.auth_type, AuthType::None);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.auth().is_none());
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::new()
            .with_server_url("https://cc.example.com/kafkacruisecontrol")
            .with_basic_auth("admin", "secret")
            .with_user_agent("ops-bot")
            .with_request_timeout(Duration::from_secs(5));

        assert_eq!(config.server_url, "https://cc.example.com/kafkacruisecontrol");
        assert_eq!(config.user_agent, "ops-bot");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(
            config.auth(),
            Some(Auth::Basic {
                username: "admin".to_string(),
                password: "secret".to_string(),
            })
        );
    }

    #[test]
    fn test_auth_type_parsing() {
        assert_eq!(AuthType::from_str_or_none("BASIC"), AuthType::Basic);
        assert_eq!(AuthType::from_str_or_none("ACCESS_TOKEN"), AuthType::AccessToken);
        assert_eq!(AuthType::from_str_or_none("NONE"), AuthType::None);
        assert_eq!(AuthType::from_str_or_none("kerberos"), AuthType::None);
        assert_eq!(AuthType::AccessToken.to_string(), "ACCESS_TOKEN");
    }
}
