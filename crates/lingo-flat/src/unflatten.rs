//! Flat map back to a nested object.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{FlatError, FlatResult};
use crate::{FlatMap, JsonObject};

/// What to do when a dotted key needs an object at a segment that already
/// holds a leaf (`{"a": "x", "a.b": "y"}`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Replace the leaf with an object and keep going. The leaf value is lost.
    #[default]
    Overwrite,
    /// Stop with [`FlatError::ConflictingPath`].
    Reject,
}

/// Rebuild a nested object from a flat map, overwriting conflicting leaves.
///
/// Keys are split on `.` and intermediate objects are created as needed.
/// Values that look like a JSON array (`[` ... `]`) are parsed back into
/// arrays when they are valid JSON; everything else is stored as a string.
///
/// # Examples
///
/// ```
/// use lingo_flat::{unflatten, FlatMap};
/// use serde_json::json;
///
/// let mut flat = FlatMap::new();
/// flat.insert("user.name".into(), "John".into());
/// flat.insert("tags".into(), r#"["a","b"]"#.into());
///
/// let doc = unflatten(&flat);
/// assert_eq!(doc["user"], json!({"name": "John"}));
/// assert_eq!(doc["tags"], json!(["a", "b"]));
/// ```
pub fn unflatten(flat: &FlatMap) -> JsonObject {
    // Overwrite never reports a conflict.
    unflatten_with(flat, ConflictPolicy::Overwrite).unwrap_or_default()
}

/// Rebuild a nested object from a flat map under the given conflict policy.
///
/// Keys are visited in sorted order, so a shorter key such as `a` is always
/// placed before `a.b` extends it.
pub fn unflatten_with(flat: &FlatMap, policy: ConflictPolicy) -> FlatResult<JsonObject> {
    let mut root = JsonObject::new();
    for (key, raw) in flat {
        let segments: Vec<&str> = key.split('.').collect();
        insert_path(&mut root, key, &segments, leaf_value(raw), policy)?;
    }
    Ok(root)
}

fn insert_path(
    node: &mut JsonObject,
    key: &str,
    segments: &[&str],
    value: Value,
    policy: ConflictPolicy,
) -> FlatResult<()> {
    let Some((segment, rest)) = segments.split_first() else {
        return Ok(());
    };

    if rest.is_empty() {
        node.insert((*segment).to_string(), value);
        return Ok(());
    }

    let slot = node
        .entry((*segment).to_string())
        .or_insert_with(|| Value::Object(JsonObject::new()));

    if !slot.is_object() {
        match policy {
            ConflictPolicy::Reject => {
                return Err(FlatError::ConflictingPath {
                    key: key.to_string(),
                    segment: (*segment).to_string(),
                });
            }
            ConflictPolicy::Overwrite => {
                warn!(key, segment, "overwriting leaf value with nested object");
                *slot = Value::Object(JsonObject::new());
            }
        }
    }

    match slot {
        Value::Object(nested) => insert_path(nested, key, rest, value, policy),
        _ => Ok(()),
    }
}

fn leaf_value(raw: &str) -> Value {
    if raw.starts_with('[') && raw.ends_with(']') {
        if let Ok(parsed) = serde_json::from_str::<Value>(raw) {
            return parsed;
        }
    }
    Value::String(raw.to_string())
}
