// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! `Content-Type` header parsing.

use std::fmt;

/// MIME type of Cruise Control JSON responses.
pub const MIME_TYPE_JSON: &str = "application/json";
/// Charset sent with JSON requests.
pub const CHARSET_UTF8: &str = "utf-8";

/// Parsed `Content-Type` header. All parts are lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentType {
    pub mime_type: String,
    pub charset: Option<String>,
    pub boundary: Option<String>,
}

impl ContentType {
    pub fn parse(value: &str) -> Self {
        let mut parts = value.split(';');
        let mime_type = parts
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        let mut content_type = ContentType {
            mime_type,
            ..Default::default()
        };
        for part in parts {
            let part = part.trim().to_ascii_lowercase();
            let Some((name, value)) = part.split_once('=') else {
                continue;
            };
            let value = value.trim().trim_matches('"').to_string();
            match name.trim() {
                "charset" => content_type.charset = Some(value),
                "boundary" => content_type.boundary = Some(value),
                _ => {}
            }
        }
        content_type
    }

    pub fn is_json(&self) -> bool {
        self.mime_type == MIME_TYPE_JSON
    }

    /// Header value for JSON requests.
    pub fn json_utf8() -> Self {
        Self {
            mime_type: MIME_TYPE_JSON.to_string(),
            charset: Some(CHARSET_UTF8.to_string()),
            boundary: None,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mime_type)?;
        if let Some(charset) = &self.charset {
            write!(f, "; charset={charset}")?;
        }
        if let Some(boundary) = &self.boundary {
            write!(f, "; boundary={boundary}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        let ct = ContentType::parse("Application/JSON; Charset=UTF-8");
        assert_eq!(ct.mime_type, "application/json");
        assert_eq!(ct.charset.as_deref(), Some("utf-8"));
        assert!(ct.boundary.is_none());
        assert!(ct.is_json());
    }

    #[test]
    fn test_parse_multipart() {
        let ct = ContentType::parse("multipart/form-data; boundary=\"xyz\"; foo");
        assert_eq!(ct.mime_type, "multipart/form-data");
        assert_eq!(ct.boundary.as_deref(), Some("xyz"));
        assert!(!ct.is_json());
    }

    #[test]
    fn test_parse_empty() {
        let ct = ContentType::parse("");
        assert_eq!(ct, ContentType::default());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ContentType::json_utf8().to_string(),
            "application/json; charset=utf-8"
        );
    }
}
