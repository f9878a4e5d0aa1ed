// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Request authentication.

use std::fmt;

use base64::{Engine as _, engine::general_purpose};

/// Credentials attached to every request as an `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    Basic { username: String, password: String },
    AccessToken(String),
}

impl Auth {
    /// Value of the `Authorization` header.
    pub fn header_value(&self) -> String {
        match self {
            Auth::Basic { username, password } => {
                let credentials =
                    general_purpose::STANDARD.encode(format!("{username}:{password}"));
                format!("Basic {credentials}")
            }
            Auth::AccessToken(token) => format!("Bearer {token}"),
        }
    }
}

// Never print secrets.
impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Auth::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .finish_non_exhaustive(),
            Auth::AccessToken(_) => f.write_str("AccessToken(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_header() {
        let auth = Auth::Basic {
            username: "Aladdin".to_string(),
            password: "open sesame".to_string(),
        };
        assert_eq!(auth.header_value(), "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
    }

    #[test]
    fn test_bearer_header() {
        let auth = Auth::AccessToken("t0k3n".to_string());
        assert_eq!(auth.header_value(), "Bearer t0k3n");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let auth = Auth::Basic {
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{auth:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
        assert!(!format!("{:?}", Auth::AccessToken("abc".to_string())).contains("abc"));
    }
}
