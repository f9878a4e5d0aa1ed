// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Multi-valued parameter map.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

/// Ordered multi-valued string map produced by the encoder.
///
/// Values under one key keep the order in which they were added. Keys are
/// kept sorted so that rendering is deterministic, but callers must not rely
/// on any particular order across different keys. A key is never present
/// with an empty value list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, Vec<String>>);

impl Params {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values stored under `key`, empty if the key is absent.
    pub fn values(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `key` has at least one value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Append one value to `key`.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// Append values to `key`, preserving their order.
    pub fn add<I, V>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let mut values = values.into_iter().map(Into::into).peekable();
        if values.peek().is_none() {
            return;
        }
        self.0.entry(key.into()).or_default().extend(values);
    }

    /// Replace the values of `key`. An empty list removes the key.
    pub fn set<I, V>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let key = key.into();
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.0.remove(&key);
        } else {
            self.0.insert(key, values);
        }
    }

    /// Remove `key`, returning its values.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.0.remove(key)
    }

    /// Merge `other` into `self`, appending values for keys present in both.
    pub fn merge(&mut self, other: Params) {
        for (key, values) in other.0 {
            match self.0.entry(key) {
                btree_map::Entry::Occupied(mut entry) => entry.get_mut().extend(values),
                btree_map::Entry::Vacant(entry) => {
                    entry.insert(values);
                }
            }
        }
    }

    /// Flatten into `<key>-<value>` tokens, one per value.
    ///
    /// Nested maps are rendered under their parent key this way, which is the
    /// token format the service expects for e.g. `brokerid_and_logdirs`.
    pub fn list(&self) -> Vec<String> {
        self.0
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |value| format!("{key}-{value}")))
            .collect()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map holds no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over `(key, values)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Iterate over every `(key, value)` pair, repeating keys with several values.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().flat_map(|(key, values)| {
            values
                .iter()
                .map(move |value| (key.as_str(), value.as_str()))
        })
    }
}

impl IntoIterator for Params {
    type Item = (String, Vec<String>);
    type IntoIter = btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.push(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_order() {
        let mut params = Params::new();
        params.add("brokerid", ["2", "3"]);
        params.push("brokerid", "1");

        assert_eq!(params.values("brokerid"), ["2", "3", "1"]);
        assert_eq!(params.get("brokerid"), Some("2"));
    }

    #[test]
    fn test_add_nothing_does_not_create_key() {
        let mut params = Params::new();
        params.add("goals", Vec::<String>::new());

        assert!(!params.contains_key("goals"));
        assert!(params.is_empty());
    }

    #[test]
    fn test_set_overwrites_and_empty_set_removes() {
        let mut params = Params::new();
        params.add("dryrun", ["true", "false"]);
        params.set("dryrun", ["false"]);
        assert_eq!(params.values("dryrun"), ["false"]);

        params.set("dryrun", Vec::<String>::new());
        assert!(!params.contains_key("dryrun"));
    }

    #[test]
    fn test_merge_appends_overlapping_keys() {
        let mut left: Params = [("a", "1"), ("b", "2")].into_iter().collect();
        let right: Params = [("b", "3"), ("c", "4")].into_iter().collect();
        left.merge(right);

        assert_eq!(left.values("a"), ["1"]);
        assert_eq!(left.values("b"), ["2", "3"]);
        assert_eq!(left.values("c"), ["4"]);
    }

    #[test]
    fn test_list_renders_key_value_tokens() {
        let params: Params = [("1", "/data0"), ("1", "/data1"), ("2", "/data0")]
            .into_iter()
            .collect();

        assert_eq!(params.list(), ["1-/data0", "1-/data1", "2-/data0"]);
    }

    #[test]
    fn test_missing_key() {
        let mut params = Params::new();
        assert_eq!(params.get("reason"), None);
        assert!(params.values("reason").is_empty());
        assert_eq!(params.remove("reason"), None);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let params: Params = [("verbose", "true")].into_iter().collect();
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({"verbose": ["true"]}));
    }
}
