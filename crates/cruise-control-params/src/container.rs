// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Sequence and map strategies.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::fmt::Display;
use std::hash::BuildHasher;

use crate::encode::EncodeParams;
use crate::error::Result;
use crate::state::{EncodeOptions, EncoderState};

/// Encode every element under the same key, producing one value per element.
///
/// Elements are encoded into an isolated scope that is merged back into the
/// current one, so the values of a sequence stay grouped under its key.
/// `omit_empty` applies to the sequence as a whole: zero elements are kept.
pub fn encode_elements<'a, I, T>(
    items: I,
    state: &mut EncoderState,
    options: EncodeOptions<'_>,
) -> Result<()>
where
    I: IntoIterator<Item = &'a T>,
    T: EncodeParams + ?Sized + 'a,
{
    let element = EncodeOptions::new(options.key, false);
    let scope = state.isolated(|state| {
        for item in items {
            item.encode_params(state, element)?;
        }
        Ok(())
    })?;
    state.params_mut().merge(scope);
    Ok(())
}

/// Encode map entries, each value under its stringified key.
///
/// At the root the entries become top-level keys. Anywhere else they are
/// rendered as `<key>-<value>` tokens under the map's own key.
pub fn encode_map<'a, I, V>(
    entries: I,
    state: &mut EncoderState,
    options: EncodeOptions<'_>,
) -> Result<()>
where
    I: IntoIterator<Item = (String, &'a V)>,
    V: EncodeParams + ?Sized + 'a,
{
    let scope = state.isolated(|state| {
        for (key, value) in entries {
            value.encode_params(state, EncodeOptions::new(&key, options.omit_empty))?;
        }
        Ok(())
    })?;

    if options.is_root() {
        state.params_mut().merge(scope);
    } else {
        state.params_mut().add(options.key, scope.list());
    }
    Ok(())
}

impl<T: EncodeParams> EncodeParams for [T] {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        T::encode_seq(self, state, options)
    }
}

impl<T: EncodeParams> EncodeParams for Vec<T> {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        T::encode_seq(self, state, options)
    }
}

// Fixed-size arrays always iterate, byte arrays included.
impl<T: EncodeParams, const N: usize> EncodeParams for [T; N] {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        encode_elements(self, state, options)
    }
}

impl<T: EncodeParams> EncodeParams for VecDeque<T> {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        encode_elements(self, state, options)
    }
}

impl<T: EncodeParams> EncodeParams for BTreeSet<T> {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        encode_elements(self, state, options)
    }
}

impl<K: Display, V: EncodeParams> EncodeParams for BTreeMap<K, V> {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        encode_map(
            self.iter().map(|(key, value)| (key.to_string(), value)),
            state,
            options,
        )
    }
}

impl<K: Display, V: EncodeParams, S: BuildHasher> EncodeParams for HashMap<K, V, S> {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        // Hash order is not stable; sort by rendered key instead.
        let mut entries: Vec<(String, &V)> = self
            .iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        encode_map(entries, state, options)
    }
}
