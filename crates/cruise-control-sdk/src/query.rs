// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Query string construction.
//!
//! The encoder leaves multi-valued keys as separate values; how they reach
//! the wire is decided here.

use cruise_control_params::Params;

use crate::error::{Result, SdkError};

/// How keys with more than one value are written to the query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryPolicy {
    /// `goals=A%2CB` - the form Cruise Control expects.
    #[default]
    CommaJoined,
    /// `goals=A&goals=B`
    RepeatedKeys,
}

impl QueryPolicy {
    /// Collapse multi-valued keys according to the policy.
    pub fn apply(&self, params: &Params) -> Params {
        match self {
            QueryPolicy::RepeatedKeys => params.clone(),
            QueryPolicy::CommaJoined => params
                .iter()
                .map(|(key, values)| (key.to_string(), values.join(",")))
                .collect(),
        }
    }
}

/// Render percent-encoded `key=value` pairs joined by `&`, in key order.
pub fn to_query_string(params: &Params, policy: QueryPolicy) -> String {
    policy
        .apply(params)
        .pairs()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse a query string back into parameters.
///
/// Comma-joined values are kept as a single value; `+` decodes to a space.
pub fn parse_query(query: &str) -> Result<Params> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = Params::new();
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        params.push(decode_component(key)?, decode_component(value)?);
    }
    Ok(params)
}

fn decode_component(component: &str) -> Result<String> {
    let component = component.replace('+', " ");
    urlencoding::decode(&component)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| SdkError::Serialization(format!("invalid query component {component:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Params {
        let mut params = Params::new();
        params.add("goals", ["RackAwareGoal", "DiskCapacityGoal"]);
        params.push("brokerid", "1");
        params.push("excluded_topics", "__consumer offsets&more");
        params
    }

    #[test]
    fn test_comma_joined() {
        assert_eq!(
            to_query_string(&sample(), QueryPolicy::CommaJoined),
            "brokerid=1&excluded_topics=__consumer%20offsets%26more&goals=RackAwareGoal%2CDiskCapacityGoal"
        );
    }

    #[test]
    fn test_repeated_keys() {
        assert_eq!(
            to_query_string(&sample(), QueryPolicy::RepeatedKeys),
            "brokerid=1&excluded_topics=__consumer%20offsets%26more&goals=RackAwareGoal&goals=DiskCapacityGoal"
        );
    }

    #[test]
    fn test_parse_round_trip() {
        let query = to_query_string(&sample(), QueryPolicy::RepeatedKeys);
        assert_eq!(parse_query(&query).unwrap(), sample());
    }

    #[test]
    fn test_parse_comma_joined_keeps_single_value() {
        let params = parse_query("?goals=A%2CB&verbose=true&flag").unwrap();
        assert_eq!(params.values("goals"), ["A,B"]);
        assert_eq!(params.get("verbose"), Some("true"));
        assert_eq!(params.get("flag"), Some(""));
    }

    #[test]
    fn test_parse_plus_as_space() {
        let params = parse_query("reason=rolling+restart").unwrap();
        assert_eq!(params.get("reason"), Some("rolling restart"));
    }

    #[test]
    fn test_parse_invalid_utf8() {
        assert!(parse_query("k=%FF").is_err());
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_query_string(&Params::new(), QueryPolicy::CommaJoined), "");
        assert!(parse_query("").unwrap().is_empty());
    }
}
