// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Hooks for types that bypass the generic strategies.

use std::fmt::Display;

use crate::error::{BoxError, EncodeError, Result};
use crate::params::Params;
use crate::state::{EncodeOptions, EncoderState};

/// Custom flattening of a value into parameters.
///
/// The hook receives the key the value would have been encoded under and
/// returns the complete set of parameters it stands for. Wire it up with
/// `#[derive(Params)]` and `#[params(marshal)]`, or call
/// [`encode_marshaled`] from a hand-written [`EncodeParams`] impl.
///
/// [`EncodeParams`]: crate::EncodeParams
pub trait MarshalParams {
    fn marshal_params(&self, key: &str) -> std::result::Result<Params, BoxError>;
}

/// Encode `value` through its [`MarshalParams`] hook, merging the result.
pub fn encode_marshaled<T>(
    value: &T,
    state: &mut EncoderState,
    options: EncodeOptions<'_>,
) -> Result<()>
where
    T: MarshalParams + ?Sized,
{
    let params = value
        .marshal_params(options.key)
        .map_err(|source| EncodeError::marshal(options.key, source))?;
    state.params_mut().merge(params);
    Ok(())
}

/// Encode `value` as a scalar rendered with [`Display`].
///
/// Values equal to `Default::default()` count as empty, so an enum's
/// default variant disappears under omit-empty.
pub fn encode_display<T>(
    value: &T,
    state: &mut EncoderState,
    options: EncodeOptions<'_>,
) -> Result<()>
where
    T: Display + Default + PartialEq,
{
    state.push_scalar(options, *value == T::default(), || value.to_string());
    Ok(())
}
