//! Wire representations for values that have no `Into<Value>` of their own.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Encodes a timestamp as RFC 3339 with a `Z` offset.
pub fn timestamp(at: DateTime<Utc>) -> Value {
    Value::String(at.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

/// Optional flavour of [`timestamp`] for the nullable and omittable setters.
pub fn timestamp_opt(at: Option<DateTime<Utc>>) -> Option<Value> {
    at.map(timestamp)
}

/// String form of a scalar as it appears in a query string or header.
///
/// Returns `None` for arrays and objects; callers decide how to flatten those.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some("null".to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
