// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Struct field tables.
//!
//! A struct is encoded field by field, in declaration order, using one
//! [`FieldDescriptor`] per field. `#[derive(Params)]` builds the table at
//! compile time; hand-written impls can build one with [`FieldTable::builder`],
//! which parses every annotation up front and reports the offending field.

use tracing::trace;

use crate::annotation::FieldDescriptor;
use crate::encode::EncodeParams;
use crate::error::{EncodeError, Result};
use crate::state::EncoderState;

/// A named struct field and its descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub descriptor: FieldDescriptor,
}

impl Field {
    pub const fn new(name: &'static str, descriptor: FieldDescriptor) -> Self {
        Self { name, descriptor }
    }

    /// Encode `value` as this field, unless the field is skipped.
    pub fn encode<T>(&self, value: &T, state: &mut EncoderState) -> Result<()>
    where
        T: EncodeParams + ?Sized,
    {
        if self.descriptor.is_skipped() {
            return Ok(());
        }
        trace!(field = self.name, key = %self.descriptor.key, "encoding field");
        value.encode_params(state, self.descriptor.options())
    }
}

/// Types exposing the field table used to encode them.
pub trait ParamFields {
    /// One entry per declared field, in declaration order.
    const FIELDS: &'static [Field];

    /// Look up a field by name.
    fn field(name: &str) -> Option<&'static Field> {
        Self::FIELDS.iter().find(|field| field.name == name)
    }
}

/// Enter a struct scope and encode its fields with `f`.
///
/// Structs share the enclosing parameter scope: their fields land next to
/// the fields of the parent, whatever key the struct itself was given.
pub fn encode_struct<F>(state: &mut EncoderState, f: F) -> Result<()>
where
    F: FnOnce(&mut EncoderState) -> Result<()>,
{
    state.descend(f)
}

/// Field table built at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTable {
    fields: Vec<Field>,
}

impl FieldTable {
    /// Start building a table.
    pub fn builder() -> FieldTableBuilder {
        FieldTableBuilder::default()
    }

    /// Field at `index` in declaration order.
    pub fn get(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// Field called `name`.
    pub fn by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl std::ops::Index<usize> for FieldTable {
    type Output = Field;

    fn index(&self, index: usize) -> &Field {
        &self.fields[index]
    }
}

/// Builder collecting annotated fields; parsing happens in [`build`].
///
/// [`build`]: FieldTableBuilder::build
#[derive(Debug, Default)]
pub struct FieldTableBuilder {
    fields: Vec<(&'static str, Option<&'static str>)>,
}

impl FieldTableBuilder {
    /// Add a field carrying an annotation such as `"brokerid,omitempty"`.
    pub fn field(mut self, name: &'static str, annotation: &'static str) -> Self {
        self.fields.push((name, Some(annotation)));
        self
    }

    /// Add a field without annotation, merged into the enclosing map.
    pub fn embedded(mut self, name: &'static str) -> Self {
        self.fields.push((name, None));
        self
    }

    /// Parse every annotation, failing on the first malformed one.
    pub fn build(self) -> Result<FieldTable> {
        let fields = self
            .fields
            .into_iter()
            .map(|(name, annotation)| {
                let descriptor = match annotation {
                    Some(annotation) => FieldDescriptor::parse(annotation)
                        .map_err(|source| EncodeError::annotation(name, source))?,
                    None => FieldDescriptor::EMBEDDED,
                };
                Ok(Field::new(name, descriptor))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(FieldTable { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnnotationError;

    #[test]
    fn test_builder_parses_annotations() {
        let table = FieldTable::builder()
            .embedded("common")
            .field("broker_ids", "brokerid")
            .field("reason", "reason,omitempty")
            .field("internal", "-")
            .build()
            .unwrap();

        assert_eq!(table.len(), 4);
        assert!(table[0].descriptor.is_embedded());
        assert_eq!(table[1].descriptor, FieldDescriptor::new("brokerid", false));
        assert_eq!(table[2].descriptor, FieldDescriptor::new("reason", true));
        assert!(table.by_name("internal").unwrap().descriptor.is_skipped());
    }

    #[test]
    fn test_builder_reports_offending_field() {
        let err = FieldTable::builder()
            .field("dry_run", "dryrun")
            .field("goals", "goals,sorted")
            .build()
            .unwrap_err();

        match err {
            EncodeError::Annotation { field, source } => {
                assert_eq!(field, "goals");
                assert_eq!(source, AnnotationError::UnsupportedFlag("sorted".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_skipped_field_is_not_encoded() {
        let field = Field::new("internal", FieldDescriptor::SKIPPED);
        let mut state = EncoderState::default();
        field.encode(&"secret", &mut state).unwrap();
        assert!(state.params().is_empty());
    }
}
