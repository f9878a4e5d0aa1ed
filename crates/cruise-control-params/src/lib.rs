// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Cruise Control parameter encoder
//!
//! Turns typed request values into a multi-valued parameter map ready to be
//! rendered as an HTTP query string.
//!
//! # Architecture
//!
//! - [`Params`]: ordered multi-valued map, the encoder's output
//! - [`FieldDescriptor`]: parsed `key,omitempty` field annotation
//! - [`EncoderState`]: output scope, recursion budget and visited identities
//! - [`EncodeParams`]: per-type strategy, picked at compile time
//! - [`MarshalParams`]: escape hatch for bespoke flattening
//!
//! Field tables are built once per type, either at compile time by
//! `#[derive(Params)]` from the `cruise-control-params-derive` crate, or at
//! startup with [`FieldTable::builder`]. A malformed annotation therefore
//! never surfaces as a per-request failure of a derived type.
//!
//! # Example
//!
//! ```
//! use cruise_control_params::{
//!     EncodeOptions, EncodeParams, EncoderState, Field, FieldDescriptor, encode_struct, to_params,
//! };
//!
//! struct RemoveBroker {
//!     broker_ids: Vec<i32>,
//!     dry_run: bool,
//!     reason: String,
//! }
//!
//! const FIELDS: [Field; 3] = [
//!     Field::new("broker_ids", FieldDescriptor::new("brokerid", false)),
//!     Field::new("dry_run", FieldDescriptor::new("dryrun", false)),
//!     Field::new("reason", FieldDescriptor::new("reason", true)),
//! ];
//!
//! impl EncodeParams for RemoveBroker {
//!     fn encode_params(
//!         &self,
//!         state: &mut EncoderState,
//!         _options: EncodeOptions<'_>,
//!     ) -> cruise_control_params::Result<()> {
//!         encode_struct(state, |state| {
//!             FIELDS[0].encode(&self.broker_ids, state)?;
//!             FIELDS[1].encode(&self.dry_run, state)?;
//!             FIELDS[2].encode(&self.reason, state)
//!         })
//!     }
//! }
//!
//! let params = to_params(&RemoveBroker {
//!     broker_ids: vec![2, 3],
//!     dry_run: true,
//!     reason: String::new(),
//! })?;
//! assert_eq!(params.values("brokerid"), ["2", "3"]);
//! assert_eq!(params.get("dryrun"), Some("true"));
//! assert!(!params.contains_key("reason"));
//! # Ok::<(), cruise_control_params::EncodeError>(())
//! ```

mod annotation;
mod container;
mod encode;
mod error;
mod fields;
mod marshal;
mod params;
mod state;

use tracing::{debug, instrument};

pub use annotation::{
    ANNOTATION_DELIMITER, AnnotationFlag, FLAG_OMIT_EMPTY, FLAG_SEPARATOR, FieldDescriptor,
    SKIP_KEY,
};
pub use container::{encode_elements, encode_map};
pub use encode::EncodeParams;
pub use error::{AnnotationError, BoxError, EncodeError, Result};
pub use fields::{Field, FieldTable, FieldTableBuilder, ParamFields, encode_struct};
pub use marshal::{MarshalParams, encode_display, encode_marshaled};
pub use params::Params;
pub use state::{DEFAULT_MAX_DEPTH, EncodeOptions, EncoderState, ROOT_KEY};

/// Entry point turning values into [`Params`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    max_depth: u32,
}

impl Default for Encoder {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Encoder {
    /// Create an encoder with the default recursion budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many nested composites a value may contain.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Configured recursion budget.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Encode `value`, returning every parameter or the first error.
    #[instrument(level = "debug", skip_all, fields(max_depth = self.max_depth))]
    pub fn encode<T>(&self, value: &T) -> Result<Params>
    where
        T: EncodeParams + ?Sized,
    {
        let mut state = EncoderState::new(self.max_depth);
        if let Err(err) = value.encode_params(&mut state, EncodeOptions::root()) {
            debug!(error = %err, "encoding parameters failed");
            return Err(err);
        }
        let params = state.into_params();
        debug!(keys = params.len(), "encoded parameters");
        Ok(params)
    }
}

/// Encode `value` with the default recursion budget.
pub fn to_params<T>(value: &T) -> Result<Params>
where
    T: EncodeParams + ?Sized,
{
    Encoder::new().encode(value)
}
