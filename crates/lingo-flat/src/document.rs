//! Reading and writing whole translation documents.
//!
//! A translation document is always a JSON object at the top level. Uploads
//! are additionally required to be non-empty.

use crate::error::{FlatError, FlatResult};
use crate::JsonObject;

/// Parse raw bytes into a JSON object.
///
/// Malformed JSON, and well-formed JSON whose top-level value is not an
/// object, both fail with [`FlatError::InvalidJson`] carrying the parser
/// diagnostic.
///
/// # Examples
///
/// ```
/// use lingo_flat::parse_document;
///
/// let doc = parse_document(br#"{"greeting": "hello"}"#).unwrap();
/// assert_eq!(doc["greeting"], "hello");
/// assert!(parse_document(b"[1, 2]").is_err());
/// ```
pub fn parse_document(bytes: &[u8]) -> FlatResult<JsonObject> {
    serde_json::from_slice::<JsonObject>(bytes).map_err(|e| FlatError::InvalidJson(e.to_string()))
}

/// Check that `bytes` hold a usable translation file.
///
/// Fails with [`FlatError::InvalidJson`] for anything [`parse_document`]
/// rejects and with [`FlatError::EmptyDocument`] for `{}`.
pub fn validate_document(bytes: &[u8]) -> FlatResult<()> {
    let doc = parse_document(bytes)?;
    if doc.is_empty() {
        return Err(FlatError::EmptyDocument);
    }
    Ok(())
}

/// Serialize a nested object with two-space indentation.
///
/// Keys come out in the object's iteration order, which is sorted as long as
/// `serde_json`'s `preserve_order` feature stays off.
pub fn to_pretty_json(doc: &JsonObject) -> FlatResult<String> {
    serde_json::to_string_pretty(doc).map_err(|e| FlatError::Serialization(e.to_string()))
}
