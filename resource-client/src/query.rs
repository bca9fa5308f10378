//! Query string encoding for GET payloads.

use percent_encoding::utf8_percent_encode;
use serde_json::Value;

use crate::payload::Payload;
use crate::template::COMPONENT_ENCODE_SET;

/// Encodes `payload` as `key=value` pairs joined by `&`, in payload order.
///
/// Strings are used as-is, numbers and booleans as their JSON text, `null`
/// as an empty value, arrays as comma-joined elements and nested objects as
/// compact JSON. Keys and values are percent-encoded.
///
/// ## Examples
///
/// ```rust
/// use resource_client::query::encode;
/// use serde_json::json;
///
/// let payload = json!({"limit": 10, "sort": "balance:desc"});
/// assert_eq!(encode(payload.as_object().unwrap()), "limit=10&sort=balance%3Adesc");
/// ```
pub fn encode(payload: &Payload) -> String {
    payload
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, COMPONENT_ENCODE_SET),
                utf8_percent_encode(&render(value), COMPONENT_ENCODE_SET)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}
