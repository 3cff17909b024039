//! Canonical cache-key derivation.
//!
//! Keys are a 16-hex-character digest of `"<prefix>:<canonical-json>"`,
//! where the canonical JSON renders object keys in sorted order. Two
//! parameter maps with equal key/value pairs therefore derive the same key
//! regardless of declaration order. Keys are process-local, so a stable
//! in-process hash is sufficient.

use std::collections::BTreeMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use serde::Serialize;
use serde_json::Value;

/// Derive a cache key from an operation prefix and its parameters.
pub fn cache_key<T: Serialize>(prefix: &str, params: &T) -> String {
    let value = serde_json::to_value(params).unwrap_or(Value::Null);
    let canonical = canonicalize(&value);
    let key_string = format!("{}:{}", prefix, canonical);

    let mut hasher = DefaultHasher::new();
    key_string.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

/// Render a JSON value with all object keys sorted.
fn canonicalize(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<&String, String> =
                map.iter().map(|(k, v)| (k, canonicalize(v))).collect();
            let inner: Vec<String> = sorted
                .iter()
                .map(|(k, v)| format!("{}:{}", serde_json::to_string(k).unwrap_or_default(), v))
                .collect();
            format!("{{{}}}", inner.join(","))
        }
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(canonicalize).collect();
            format!("[{}]", inner.join(","))
        }
        other => other.to_string(),
    }
}
