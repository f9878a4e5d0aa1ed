// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! The [`EncodeParams`] trait and its scalar and pointer implementations.
//!
//! Every encodable shape picks its strategy through the trait impl of its
//! type, so the choice is made at compile time:
//!
//! | Shape                                  | Strategy                          |
//! |----------------------------------------|-----------------------------------|
//! | types with `#[params(marshal)]`        | custom marshaler hook             |
//! | bool, integers, floats, char, strings  | scalar                            |
//! | `Option`, `Box`, `&T`                  | pointer                           |
//! | `Rc`, `Arc`, `Weak`                    | pointer with identity tracking    |
//! | `dyn EncodeParams`, `serde_json::Value`| dynamically typed value           |
//! | derived structs                        | struct                            |
//! | `[T; N]`, `BTreeSet`, `VecDeque`       | array                             |
//! | `Vec<T>`, `[T]`                        | slice (raw text for `u8`)         |
//! | `HashMap`, `BTreeMap`                  | map                               |

use std::borrow::Cow;
use std::rc::{self, Rc};
use std::sync::{self, Arc};

use crate::container::{encode_elements, encode_map};
use crate::error::Result;
use crate::state::{EncodeOptions, EncoderState};

/// A value that can be flattened into query parameters.
pub trait EncodeParams {
    /// Encode `self` into `state` under `options`.
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()>;

    /// Encode a slice of `Self`.
    ///
    /// Iterates the elements by default; byte-like element types override it
    /// to emit the whole slice as one value.
    fn encode_seq(
        items: &[Self],
        state: &mut EncoderState,
        options: EncodeOptions<'_>,
    ) -> Result<()>
    where
        Self: Sized,
    {
        encode_elements(items, state, options)
    }
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EncodeParams for $ty {
                fn encode_params(
                    &self,
                    state: &mut EncoderState,
                    options: EncodeOptions<'_>,
                ) -> Result<()> {
                    state.push_scalar(options, *self == 0, || self.to_string());
                    Ok(())
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u16, u32, u64, u128, usize);

impl EncodeParams for u8 {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        state.push_scalar(options, *self == 0, || self.to_string());
        Ok(())
    }

    fn encode_seq(
        items: &[Self],
        state: &mut EncoderState,
        options: EncodeOptions<'_>,
    ) -> Result<()> {
        state.push_scalar(options, items.is_empty(), || {
            String::from_utf8_lossy(items).into_owned()
        });
        Ok(())
    }
}

macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EncodeParams for $ty {
                fn encode_params(
                    &self,
                    state: &mut EncoderState,
                    options: EncodeOptions<'_>,
                ) -> Result<()> {
                    // Negative zero is not the zero value.
                    state.push_scalar(options, self.to_bits() == 0, || self.to_string());
                    Ok(())
                }
            }
        )*
    };
}

impl_float!(f32, f64);

impl EncodeParams for bool {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        state.push_scalar(options, !*self, || self.to_string());
        Ok(())
    }
}

impl EncodeParams for char {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        state.push_scalar(options, *self == '\0', || self.to_string());
        Ok(())
    }
}

impl EncodeParams for str {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        state.push_scalar(options, self.is_empty(), || self.to_string());
        Ok(())
    }
}

impl EncodeParams for String {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        self.as_str().encode_params(state, options)
    }
}

impl EncodeParams for Cow<'_, str> {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        self.as_ref().encode_params(state, options)
    }
}

// =============================================================================
// Pointers
// =============================================================================

impl<T: EncodeParams> EncodeParams for Option<T> {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        // An absent value is dropped even when omit_empty is off.
        match self {
            Some(value) => value.encode_params(state, options),
            None => Ok(()),
        }
    }
}

impl<T: EncodeParams + ?Sized> EncodeParams for &T {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        (**self).encode_params(state, options)
    }
}

impl<T: EncodeParams + ?Sized> EncodeParams for Box<T> {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        (**self).encode_params(state, options)
    }
}

impl<T: EncodeParams + ?Sized> EncodeParams for Rc<T> {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        let identity = Rc::as_ptr(self).cast::<()>() as usize;
        state.visit(identity, |state| (**self).encode_params(state, options))
    }
}

impl<T: EncodeParams + ?Sized> EncodeParams for Arc<T> {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        let identity = Arc::as_ptr(self).cast::<()>() as usize;
        state.visit(identity, |state| (**self).encode_params(state, options))
    }
}

impl<T: EncodeParams + ?Sized> EncodeParams for rc::Weak<T> {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        match self.upgrade() {
            Some(strong) => strong.encode_params(state, options),
            None => Ok(()),
        }
    }
}

impl<T: EncodeParams + ?Sized> EncodeParams for sync::Weak<T> {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        match self.upgrade() {
            Some(strong) => strong.encode_params(state, options),
            None => Ok(()),
        }
    }
}

// =============================================================================
// Dynamically typed values
// =============================================================================

impl EncodeParams for serde_json::Value {
    fn encode_params(&self, state: &mut EncoderState, options: EncodeOptions<'_>) -> Result<()> {
        use serde_json::Value;

        match self {
            Value::Null => Ok(()),
            Value::Bool(value) => value.encode_params(state, options),
            Value::Number(number) => {
                let is_zero = number.as_f64().is_some_and(|n| n.to_bits() == 0);
                state.push_scalar(options, is_zero, || number.to_string());
                Ok(())
            }
            Value::String(value) => value.encode_params(state, options),
            Value::Array(items) => encode_elements(items, state, options),
            Value::Object(entries) => encode_map(
                entries.iter().map(|(key, value)| (key.clone(), value)),
                state,
                options,
            ),
        }
    }
}
