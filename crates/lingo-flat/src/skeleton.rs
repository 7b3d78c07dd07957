//! Blank target documents shaped like a base document.

use serde_json::Value;

use crate::JsonObject;

/// Copy the shape of `value` with every primitive leaf replaced by `""`.
///
/// Objects keep their keys and arrays keep their length; both are descended
/// into. Strings, numbers, booleans and `null` all become empty strings.
///
/// # Examples
///
/// ```
/// use lingo_flat::skeleton;
/// use serde_json::json;
///
/// let blank = skeleton(&json!({"menu": {"file": "File"}, "tags": ["a", 1]}));
/// assert_eq!(blank, json!({"menu": {"file": ""}, "tags": ["", ""]}));
/// ```
pub fn skeleton(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(skeleton_object(map)),
        Value::Array(items) => Value::Array(items.iter().map(skeleton).collect()),
        _ => Value::String(String::new()),
    }
}

/// [`skeleton`] for a top-level object.
pub fn skeleton_object(doc: &JsonObject) -> JsonObject {
    doc.iter()
        .map(|(key, value)| (key.clone(), skeleton(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten;
    use serde_json::json;

    #[test]
    fn nested_objects_are_blanked() {
        let base = json!({"user": {"name": "John", "address": {"city": "Oslo"}}, "title": "Hi"});
        assert_eq!(
            skeleton(&base),
            json!({"user": {"name": "", "address": {"city": ""}}, "title": ""})
        );
    }

    #[test]
    fn arrays_are_blanked_per_element() {
        assert_eq!(skeleton(&json!(["a", 1])), json!(["", ""]));
        assert_eq!(
            skeleton(&json!([{"k": true}, [null, 2.5]])),
            json!([{"k": ""}, ["", ""]])
        );
    }

    #[test]
    fn every_primitive_becomes_empty_string() {
        for leaf in [json!("x"), json!(42), json!(false), json!(null)] {
            assert_eq!(skeleton(&leaf), json!(""));
        }
    }

    #[test]
    fn empty_containers_stay_empty() {
        assert_eq!(skeleton(&json!({})), json!({}));
        assert_eq!(skeleton(&json!([])), json!([]));
    }

    #[test]
    fn skeleton_keeps_flat_keys() {
        let base = json!({"a": {"b": "1", "c": 2}, "d": "x"});
        let doc = base.as_object().unwrap();
        let blank = skeleton_object(doc);
        let flat = flatten(&blank, "");
        assert_eq!(
            flat.keys().collect::<Vec<_>>(),
            flatten(doc, "").keys().collect::<Vec<_>>()
        );
        assert!(flat.values().all(String::is_empty));
    }
}
