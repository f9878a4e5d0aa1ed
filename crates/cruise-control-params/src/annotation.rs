// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Field annotation parsing.
//!
//! A field annotation is a comma-separated list whose first item is the
//! parameter key and whose remaining items are flags:
//!
//! ```text
//! brokerid
//! reason,omitempty
//! -
//! ```
//!
//! An empty key or `-` marks the field as skipped. `omitempty` is the only
//! supported flag; flags may carry a `=value` suffix which is ignored.

use std::borrow::Cow;

use crate::error::AnnotationError;
use crate::state::{EncodeOptions, ROOT_KEY};

/// Separates the key and the flags of an annotation.
pub const ANNOTATION_DELIMITER: char = ',';
/// Separates a flag name from its value.
pub const FLAG_SEPARATOR: char = '=';
/// Flag dropping zero values from the output.
pub const FLAG_OMIT_EMPTY: &str = "omitempty";
/// Key marking a field as skipped.
pub const SKIP_KEY: &str = "-";

/// Parsed per-field configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Parameter key the field is encoded under.
    pub key: Cow<'static, str>,
    /// Drop the field when it holds its zero value.
    pub omit_empty: bool,
}

impl FieldDescriptor {
    /// Descriptor for fields without an annotation: contents are merged into
    /// the enclosing map and zero values are dropped.
    pub const EMBEDDED: FieldDescriptor = FieldDescriptor {
        key: Cow::Borrowed(ROOT_KEY),
        omit_empty: true,
    };

    /// Descriptor excluding a field from encoding.
    pub const SKIPPED: FieldDescriptor = FieldDescriptor {
        key: Cow::Borrowed(SKIP_KEY),
        omit_empty: false,
    };

    /// Build a descriptor from an already validated key.
    pub const fn new(key: &'static str, omit_empty: bool) -> Self {
        Self {
            key: Cow::Borrowed(key),
            omit_empty,
        }
    }

    /// Parse an annotation such as `"brokerid,omitempty"`.
    pub fn parse(annotation: &str) -> Result<Self, AnnotationError> {
        if annotation.is_empty() {
            return Err(AnnotationError::Empty);
        }

        let mut items = annotation.split(ANNOTATION_DELIMITER);
        let key = items.next().unwrap_or_default();
        let mut omit_empty = false;

        for item in items {
            let flag = AnnotationFlag::parse(item)?;
            match flag.key {
                FLAG_OMIT_EMPTY => omit_empty = true,
                _ => return Err(AnnotationError::UnsupportedFlag(item.to_string())),
            }
        }

        Ok(Self {
            key: Cow::Owned(key.to_string()),
            omit_empty,
        })
    }

    /// Whether the field is excluded from encoding.
    pub fn is_skipped(&self) -> bool {
        self.key.is_empty() || self.key == SKIP_KEY
    }

    /// Whether the field's contents merge into the enclosing map.
    pub fn is_embedded(&self) -> bool {
        self.key == ROOT_KEY
    }

    /// Options used to encode the field's value.
    pub fn options(&self) -> EncodeOptions<'_> {
        EncodeOptions::new(&self.key, self.omit_empty)
    }
}

impl Default for FieldDescriptor {
    fn default() -> Self {
        Self::EMBEDDED
    }
}

/// One `name[=value]` flag of an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationFlag<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> AnnotationFlag<'a> {
    /// Parse a single flag.
    pub fn parse(flag: &'a str) -> Result<Self, AnnotationError> {
        if flag.is_empty() {
            return Err(AnnotationError::EmptyFlag);
        }
        let (key, value) = flag.split_once(FLAG_SEPARATOR).unwrap_or((flag, ""));
        Ok(Self { key, value })
    }

    /// A flag is valid when its name is not empty.
    pub fn is_valid(&self) -> bool {
        !self.key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_with_empty_key() {
        let descriptor = FieldDescriptor::new("", false);
        assert!(descriptor.is_skipped());
    }

    #[test]
    fn test_skip_with_dash_key() {
        assert!(FieldDescriptor::new("-", false).is_skipped());
        assert!(FieldDescriptor::SKIPPED.is_skipped());
    }

    #[test]
    fn test_not_skipped_with_valid_key() {
        assert!(!FieldDescriptor::new("valid.key", false).is_skipped());
    }

    #[test]
    fn test_embedded_default() {
        let descriptor = FieldDescriptor::default();
        assert!(descriptor.is_embedded());
        assert!(descriptor.omit_empty);
        assert!(!descriptor.is_skipped());
    }

    #[test]
    fn test_flag_validity() {
        assert!(!AnnotationFlag { key: "", value: "" }.is_valid());
        assert!(AnnotationFlag { key: "omitempty", value: "" }.is_valid());
    }

    #[test]
    fn test_parse_empty_flag() {
        assert_eq!(AnnotationFlag::parse(""), Err(AnnotationError::EmptyFlag));
    }

    #[test]
    fn test_parse_bool_flag() {
        let flag = AnnotationFlag::parse("omitempty").unwrap();
        assert_eq!(flag, AnnotationFlag { key: "omitempty", value: "" });
    }

    #[test]
    fn test_parse_key_value_flag() {
        let flag = AnnotationFlag::parse("default=default value").unwrap();
        assert_eq!(
            flag,
            AnnotationFlag {
                key: "default",
                value: "default value"
            }
        );
    }

    #[test]
    fn test_parse_empty_annotation() {
        assert_eq!(FieldDescriptor::parse(""), Err(AnnotationError::Empty));
    }

    #[test]
    fn test_parse_key_without_flags() {
        let descriptor = FieldDescriptor::parse("testTag").unwrap();
        assert_eq!(descriptor, FieldDescriptor::new("testTag", false));
    }

    #[test]
    fn test_parse_key_with_supported_flag() {
        let descriptor = FieldDescriptor::parse("testTag,omitempty").unwrap();
        assert_eq!(descriptor, FieldDescriptor::new("testTag", true));
    }

    #[test]
    fn test_parse_flag_value_is_ignored() {
        let descriptor = FieldDescriptor::parse("testTag,omitempty=false").unwrap();
        assert!(descriptor.omit_empty);
    }

    #[test]
    fn test_parse_unsupported_flag() {
        assert_eq!(
            FieldDescriptor::parse("testTag,omitempty,invalidFlag"),
            Err(AnnotationError::UnsupportedFlag("invalidFlag".to_string()))
        );
    }

    #[test]
    fn test_parse_empty_flags() {
        assert_eq!(
            FieldDescriptor::parse("testTag,,,,"),
            Err(AnnotationError::EmptyFlag)
        );
    }

    #[test]
    fn test_parse_skip_markers() {
        assert!(FieldDescriptor::parse("-").unwrap().is_skipped());
        assert!(FieldDescriptor::parse(",omitempty").unwrap().is_skipped());
    }
}
