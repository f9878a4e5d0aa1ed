// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Encoder state and per-value options.

use std::collections::HashSet;
use std::fmt;

use tracing::trace;

use crate::error::{EncodeError, Result};
use crate::params::Params;

/// Default number of nested composites an encode call may enter.
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Key signalling that a value merges into the enclosing map.
pub const ROOT_KEY: &str = "_";

/// Key and emptiness policy for the value currently being encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions<'k> {
    pub key: &'k str,
    pub omit_empty: bool,
}

impl<'k> EncodeOptions<'k> {
    pub const fn new(key: &'k str, omit_empty: bool) -> Self {
        Self { key, omit_empty }
    }

    /// Options of the top-level value: merge flat, drop zero values.
    pub const fn root() -> EncodeOptions<'static> {
        EncodeOptions {
            key: ROOT_KEY,
            omit_empty: true,
        }
    }

    /// Whether the value merges into the enclosing map instead of nesting.
    pub fn is_root(&self) -> bool {
        self.key == ROOT_KEY
    }
}

impl Default for EncodeOptions<'static> {
    fn default() -> Self {
        Self::root()
    }
}

/// State owned by a single encode call.
///
/// Holds the parameters produced so far, the remaining recursion budget and
/// the identities of shared values already traversed.
pub struct EncoderState {
    params: Params,
    remaining: u32,
    limit: u32,
    visited: HashSet<usize>,
}

impl EncoderState {
    /// Create a state allowing `max_depth` nested composites.
    pub fn new(max_depth: u32) -> Self {
        Self {
            params: Params::new(),
            remaining: max_depth,
            limit: max_depth,
            visited: HashSet::new(),
        }
    }

    /// Parameters accumulated in the current scope.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Mutable access to the parameters of the current scope.
    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    /// Remaining recursion budget.
    pub fn remaining_depth(&self) -> u32 {
        self.remaining
    }

    /// Consume the state, returning the accumulated parameters.
    pub fn into_params(self) -> Params {
        self.params
    }

    /// Enter a composite that writes into the current parameter scope.
    ///
    /// Fails without running `f` when the budget is exhausted.
    pub fn descend<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        if self.remaining == 0 {
            return Err(EncodeError::MaxRecursion { limit: self.limit });
        }
        self.remaining -= 1;
        let result = f(self);
        self.remaining += 1;
        result
    }

    /// Enter a composite that writes into a fresh, isolated parameter scope.
    ///
    /// The visited set stays shared with the parent. The parameters produced
    /// by `f` are returned instead of being merged, so the caller decides how
    /// they land in the parent scope.
    pub fn isolated<F>(&mut self, f: F) -> Result<Params>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let parent = std::mem::take(&mut self.params);
        let result = self.descend(f);
        let scope = std::mem::replace(&mut self.params, parent);
        result.map(|()| scope)
    }

    /// Encode a shared value identified by `identity` at most once.
    pub fn visit<F>(&mut self, identity: usize, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        if !self.visited.insert(identity) {
            trace!(identity, "skipping already visited value");
            return Ok(());
        }
        f(self)
    }

    /// Append a scalar under `options.key` unless it is a dropped zero value.
    pub fn push_scalar<F>(&mut self, options: EncodeOptions<'_>, is_zero: bool, render: F)
    where
        F: FnOnce() -> String,
    {
        if is_zero && options.omit_empty {
            return;
        }
        self.params.push(options.key, render());
    }
}

impl Default for EncoderState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl fmt::Debug for EncoderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncoderState")
            .field("params", &self.params)
            .field("remaining", &self.remaining)
            .field("limit", &self.limit)
            .field("visited", &self.visited.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descend_consumes_and_restores_budget() {
        let mut state = EncoderState::new(2);
        state
            .descend(|state| {
                assert_eq!(state.remaining_depth(), 1);
                Ok(())
            })
            .unwrap();
        assert_eq!(state.remaining_depth(), 2);
    }

    #[test]
    fn test_descend_fails_when_exhausted() {
        let mut state = EncoderState::new(1);
        let err = state
            .descend(|state| state.descend(|_| Ok(())))
            .unwrap_err();
        assert!(matches!(err, EncodeError::MaxRecursion { limit: 1 }));
    }

    #[test]
    fn test_isolated_scope_does_not_leak_into_parent() {
        let mut state = EncoderState::default();
        state.params_mut().push("a", "1");

        let scope = state
            .isolated(|state| {
                assert!(state.params().is_empty());
                state.params_mut().push("b", "2");
                Ok(())
            })
            .unwrap();

        assert_eq!(scope.values("b"), ["2"]);
        assert!(!state.params().contains_key("b"));
        assert_eq!(state.params().values("a"), ["1"]);
    }

    #[test]
    fn test_visit_runs_once_per_identity() {
        let mut state = EncoderState::default();
        let mut calls = 0;
        state
            .visit(42, |_| {
                calls += 1;
                Ok(())
            })
            .unwrap();
        state
            .visit(42, |_| {
                calls += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_push_scalar_respects_omit_empty() {
        let mut state = EncoderState::default();
        state.push_scalar(EncodeOptions::new("a", true), true, || "0".to_string());
        state.push_scalar(EncodeOptions::new("b", false), true, || "0".to_string());
        state.push_scalar(EncodeOptions::new("c", true), false, || "1".to_string());

        assert!(!state.params().contains_key("a"));
        assert_eq!(state.params().values("b"), ["0"]);
        assert_eq!(state.params().values("c"), ["1"]);
    }

    #[test]
    fn test_root_options() {
        let options = EncodeOptions::root();
        assert!(options.is_root());
        assert!(options.omit_empty);
        assert!(!EncodeOptions::new("dryrun", false).is_root());
    }
}
