//! Request payload type and merge rules.

use serde_json::{Map, Value};

/// Key/value data sent with a request, either as query string or JSON body.
///
/// Keys keep insertion order, so defaults come first and caller-only keys
/// follow in the order the caller wrote them.
pub type Payload = Map<String, Value>;

/// Overlays `overrides` onto `defaults`. Keys present in both take the
/// override's value but keep the default's position.
///
/// ## Examples
///
/// ```rust
/// use resource_client::payload::merge;
/// use serde_json::json;
///
/// let defaults = json!({"a": 1, "b": 2});
/// let caller = json!({"b": 3, "c": 4});
/// let merged = merge(defaults.as_object().unwrap(), caller.as_object().unwrap());
/// assert_eq!(serde_json::Value::Object(merged), json!({"a": 1, "b": 3, "c": 4}));
/// ```
pub fn merge(defaults: &Payload, overrides: &Payload) -> Payload {
    let mut merged = defaults.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
