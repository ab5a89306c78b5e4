//! Value escaping for request bodies.
//!
//! The remote parser chokes on raw special characters, so every string
//! leaf of a POST body is stripped of double quotes and tabs and then
//! percent-encoded. Keys are left as they are.

use serde_json::{Map, Value};

/// Remove every `"` and tab character.
pub fn clean(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '"' | '\t')).collect()
}

/// Clean a string and percent-encode everything outside the unreserved set.
pub fn encode_str(value: &str) -> String {
    urlencoding::encode(&clean(value)).into_owned()
}

/// Encode every string leaf of `value`, preserving map and sequence shape.
/// Numbers, booleans and nulls pass through untouched.
pub fn encode_value(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(encode_str(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(encode_value).collect()),
        Value::Object(map) => Value::Object(encode_map(map)),
        other => other,
    }
}

pub fn encode_map(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| (key, encode_value(value)))
        .collect()
}
