//! RawBag: the ordered, string-keyed storage behind every model and
//! parameter object.
//!
//! A bag only stores; it never validates. Key absence means "omitted on the
//! wire" and a key holding `Value::Null` means "explicitly null". Keys the
//! typed accessors do not know about are kept verbatim so they round-trip.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::FieldError;

type Fields = IndexMap<String, Value>;

/// Ordered map from wire key to JSON value.
///
/// Storage is shared copy-on-write: cloning a bag or freezing it into a
/// [`RawView`] is cheap, and the first write afterwards detaches this bag
/// from every other holder, so clones and views behave as snapshots.
#[derive(Debug, Clone, Default)]
pub struct RawBag {
    fields: Arc<Fields>,
}

impl RawBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts a decoded wire object, keeping its key order.
    pub fn from_object(object: Map<String, Value>) -> Self {
        Self {
            fields: Arc::new(object.into_iter().collect()),
        }
    }

    /// Returns the stored value, or `None` when the key was never set.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// True when `key` is present and holds an explicit null.
    pub fn is_null(&self, key: &str) -> bool {
        matches!(self.fields.get(key), Some(Value::Null))
    }

    /// Stores `value` under `key`. An existing key keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        Arc::make_mut(&mut self.fields).insert(key.into(), value);
    }

    /// Deletes `key`, keeping the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        if !self.fields.contains_key(key) {
            return None;
        }
        Arc::make_mut(&mut self.fields).shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The wire object, in insertion order.
    pub fn to_wire_value(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Hands out a read-only snapshot. Writes made to this bag afterwards
    /// are not visible through the returned view.
    pub fn freeze(&self) -> RawView {
        RawView {
            fields: Arc::clone(&self.fields),
        }
    }

    /// True when both bags currently share one allocation.
    pub fn shares_storage_with(&self, other: &RawBag) -> bool {
        Arc::ptr_eq(&self.fields, &other.fields)
    }
}

impl PartialEq for RawBag {
    fn eq(&self, other: &Self) -> bool {
        // Order-sensitive: two bags are equal when they serialize identically.
        self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .zip(other.fields.iter())
                .all(|(a, b)| a == b)
    }
}

impl Eq for RawBag {}

impl<K: Into<String>> FromIterator<(K, Value)> for RawBag {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            fields: Arc::new(iter.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }
}

impl TryFrom<Value> for RawBag {
    type Error = FieldError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(object) => Ok(Self::from_object(object)),
            other => Err(FieldError::invalid(
                "",
                format!("expected a JSON object, found {}", kind_of(&other)),
            )),
        }
    }
}

impl From<RawBag> for Value {
    fn from(bag: RawBag) -> Self {
        match Arc::try_unwrap(bag.fields) {
            Ok(fields) => Value::Object(fields.into_iter().collect()),
            Err(shared) => Value::Object(
                shared
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            ),
        }
    }
}

impl Serialize for RawBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawBag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Fields::deserialize(deserializer)?;
        Ok(Self {
            fields: Arc::new(fields),
        })
    }
}

/// Frozen, shareable view of a bag at the moment it was frozen.
#[derive(Debug, Clone)]
pub struct RawView {
    fields: Arc<Fields>,
}

impl RawView {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Starts a new, independently writable bag from this view.
    pub fn thaw(&self) -> RawBag {
        RawBag {
            fields: Arc::clone(&self.fields),
        }
    }
}

impl Serialize for RawView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
