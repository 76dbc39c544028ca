//! Query-string rendering for parameter bags.
//!
//! Pairs come out in bag order. Arrays repeat their key once per element and
//! nested objects expand as `key[sub]=value`.

use serde_json::Value;
use url::form_urlencoded;

use crate::raw::RawBag;
use crate::wire::scalar_to_string;

/// Flattens `bag` into ordered `(key, value)` pairs.
pub fn pairs(bag: &RawBag) -> Vec<(String, String)> {
    let mut out = Vec::with_capacity(bag.len());
    for (key, value) in bag.iter() {
        flatten(key.to_string(), value, &mut out);
    }
    out
}

fn flatten(key: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten(key.clone(), item, out);
            }
        }
        Value::Object(fields) => {
            for (sub, item) in fields {
                flatten(format!("{key}[{sub}]"), item, out);
            }
        }
        scalar => {
            if let Some(text) = scalar_to_string(scalar) {
                out.push((key, text));
            }
        }
    }
}

/// Encoded query string, or `None` when the bag renders no pairs.
pub fn render(bag: &RawBag) -> Option<String> {
    let pairs = pairs(bag);
    if pairs.is_empty() {
        return None;
    }
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        serializer.append_pair(key, value);
    }
    Some(serializer.finish())
}
