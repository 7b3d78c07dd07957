//! Flattening engine for lingo.
//!
//! Translation files are nested JSON objects. Editing and comparing them is
//! done on a flat view where every leaf lives under a dotted path
//! (`{"user": {"name": "John"}}` becomes `{"user.name": "John"}`).
//!
//! # Key Types
//!
//! - [`FlatMap`] -- Ordered dotted-path to string map
//! - [`JsonObject`] -- A parsed JSON object (`serde_json::Map`)
//! - [`skeleton`] -- A blank copy of a document, used to start a translation
//! - [`ConflictPolicy`] -- How [`unflatten_with`] treats a path that runs through a leaf
//! - [`FlatError`] -- Parse, validation and conflict errors

pub mod document;
pub mod error;
pub mod flatten;
pub mod skeleton;
pub mod unflatten;

use std::collections::BTreeMap;

pub use document::{parse_document, to_pretty_json, validate_document};
pub use error::{FlatError, FlatResult};
pub use flatten::{flatten, leaf_string};
pub use skeleton::{skeleton, skeleton_object};
pub use unflatten::{unflatten, unflatten_with, ConflictPolicy};

/// A parsed JSON object.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Dotted-path keys mapped to their string values.
///
/// Ordered, so every collection derived from it is sorted by key.
pub type FlatMap = BTreeMap<String, String>;
