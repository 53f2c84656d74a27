//! Parsed representation of an upstream response body.
//!
//! OMDb reports its own outcome in-band: every JSON body carries a
//! `Response` field that is literally `"True"` on success and `"False"`
//! otherwise, with a human-readable `Error` field on failure. Some error
//! modes (bad API key behind certain proxies) come back as plain text
//! rather than JSON, so parsing starts with a cheap shape check before
//! any decoding is attempted.

use serde_json::{Map, Value};
use thiserror::Error;

/// Reasons a response body could not be decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Body is empty or does not look like a JSON object.
    #[error("non-JSON response")]
    NotJson,

    /// Body looked like JSON but failed to decode.
    #[error("malformed JSON: {0}")]
    Malformed(String),
}

/// A decoded upstream response body.
///
/// Wraps the generic key/value mapping so callers never touch raw
/// `serde_json` values directly. Field access is tolerant: missing or
/// non-string values read as empty.
#[derive(Debug, Clone)]
pub struct UpstreamPayload {
    fields: Map<String, Value>,
}

impl UpstreamPayload {
    /// Decodes a response body into a payload.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NotJson`] if the trimmed body is empty or does
    /// not begin with `{`, and [`ParseError::Malformed`] if JSON decoding
    /// fails after that check.
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        let trimmed = body.trim();
        if !trimmed.starts_with('{') {
            return Err(ParseError::NotJson);
        }

        let fields = serde_json::from_str::<Map<String, Value>>(trimmed)
            .map_err(|e| ParseError::Malformed(e.to_string()))?;

        Ok(Self { fields })
    }

    /// True when the top-level `Response` field equals the string `"True"`.
    ///
    /// Any other value, a non-string value, or an absent field all count
    /// as unsuccessful.
    pub fn is_success(&self) -> bool {
        self.fields.get("Response").and_then(Value::as_str) == Some("True")
    }

    /// The upstream `Error` field, when present.
    pub fn error_message(&self) -> Option<&str> {
        self.fields.get("Error").and_then(Value::as_str)
    }

    /// Reads a top-level string field, defaulting to empty.
    pub fn str_field(&self, key: &str) -> String {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// The object elements of the `Search` array, upstream order preserved.
    ///
    /// An absent or non-array `Search` field yields an empty list;
    /// non-object elements are skipped.
    pub fn search_entries(&self) -> Vec<&Map<String, Value>> {
        self.fields
            .get("Search")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_object).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_body_is_not_json() {
        assert_eq!(UpstreamPayload::parse("").unwrap_err(), ParseError::NotJson);
        assert_eq!(
            UpstreamPayload::parse("   \n ").unwrap_err(),
            ParseError::NotJson
        );
    }

    #[test]
    fn test_parse_plain_text_error_is_not_json() {
        let result = UpstreamPayload::parse("Error: Invalid API Key!");
        assert_eq!(result.unwrap_err(), ParseError::NotJson);
    }

    #[test]
    fn test_parse_truncated_object_is_malformed() {
        let result = UpstreamPayload::parse(r#"{"Response": "True", "Search": ["#);
        assert!(matches!(result.unwrap_err(), ParseError::Malformed(_)));
    }

    #[test]
    fn test_parse_accepts_leading_whitespace() {
        let payload = UpstreamPayload::parse("  \n {\"Response\":\"True\"}").unwrap();
        assert!(payload.is_success());
    }

    #[test]
    fn test_response_must_literally_equal_true() {
        let cases = [
            (r#"{"Response":"True"}"#, true),
            (r#"{"Response":"False"}"#, false),
            (r#"{"Response":"true"}"#, false),
            (r#"{"Response":true}"#, false),
            (r#"{"Search":[]}"#, false),
        ];

        for (body, expected) in cases {
            let payload = UpstreamPayload::parse(body).unwrap();
            assert_eq!(payload.is_success(), expected, "body: {body}");
        }
    }

    #[test]
    fn test_error_message_surfaced() {
        let payload =
            UpstreamPayload::parse(r#"{"Response":"False","Error":"Movie not found!"}"#).unwrap();

        assert!(!payload.is_success());
        assert_eq!(payload.error_message(), Some("Movie not found!"));
    }

    #[test]
    fn test_str_field_defaults_to_empty() {
        let payload = UpstreamPayload::parse(r#"{"Title":"Batman","Runtime":140}"#).unwrap();

        assert_eq!(payload.str_field("Title"), "Batman");
        assert_eq!(payload.str_field("Plot"), "");
        assert_eq!(payload.str_field("Runtime"), "");
    }

    #[test]
    fn test_search_entries_preserve_order() {
        let payload = UpstreamPayload::parse(
            r#"{
                "Response": "True",
                "Search": [
                    {"Title": "Batman Begins"},
                    {"Title": "The Dark Knight"},
                    {"Title": "The Dark Knight Rises"}
                ]
            }"#,
        )
        .unwrap();

        let titles: Vec<String> = payload
            .search_entries()
            .iter()
            .map(|e| e.get("Title").and_then(Value::as_str).unwrap().to_string())
            .collect();

        assert_eq!(
            titles,
            ["Batman Begins", "The Dark Knight", "The Dark Knight Rises"]
        );
    }

    #[test]
    fn test_search_entries_skip_non_objects() {
        let payload = UpstreamPayload::parse(
            r#"{"Response":"True","Search":[{"Title":"Batman"},"stray",42]}"#,
        )
        .unwrap();

        assert_eq!(payload.search_entries().len(), 1);
    }

    #[test]
    fn test_search_entries_absent_yields_empty() {
        let payload = UpstreamPayload::parse(r#"{"Response":"True"}"#).unwrap();
        assert!(payload.search_entries().is_empty());

        let payload = UpstreamPayload::parse(r#"{"Response":"True","Search":"none"}"#).unwrap();
        assert!(payload.search_entries().is_empty());
    }
}
