//! Nested object to flat map.

use serde_json::Value;

use crate::{FlatMap, JsonObject};

/// Flatten a nested object into dotted-path keys.
///
/// Nested objects are descended into and their keys joined with `.`. Arrays
/// are kept whole: their compact JSON text is stored under the array's path.
/// Every other value is stored in the form given by [`leaf_string`].
///
/// `prefix` is prepended to every key; pass `""` at the top level.
///
/// # Examples
///
/// ```
/// use lingo_flat::flatten;
/// use serde_json::json;
///
/// let doc = json!({"user": {"name": "John"}, "tags": ["a", "b"]});
/// let flat = flatten(doc.as_object().unwrap(), "");
/// assert_eq!(flat["user.name"], "John");
/// assert_eq!(flat["tags"], r#"["a","b"]"#);
/// ```
pub fn flatten(doc: &JsonObject, prefix: &str) -> FlatMap {
    let mut out = FlatMap::new();
    flatten_into(doc, prefix, &mut out);
    out
}

fn flatten_into(doc: &JsonObject, prefix: &str, out: &mut FlatMap) {
    for (key, value) in doc {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            Value::Object(nested) => flatten_into(nested, &full_key, out),
            other => {
                out.insert(full_key, leaf_string(other));
            }
        }
    }
}

/// Canonical string form of a non-object value.
///
/// - strings are stored as-is
/// - numbers use `serde_json`'s shortest round-trippable form (`42`, `1.5`)
/// - booleans become `true` / `false`
/// - `null` becomes `null`
/// - arrays become their compact JSON text
///
/// Objects are rendered as compact JSON too, although [`flatten`] never
/// passes one here.
pub fn leaf_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
