//! Typed accessors over a [`RawBag`].
//!
//! Every model and parameter method is a one-line call into this module. The
//! getter picks the field's presence/nullability class; the setter picks its
//! [`NullPolicy`]. Getters decode on demand, so a malformed field only fails
//! the call that reads it.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FieldError;
use crate::model::Validate;
use crate::raw::{kind_of, RawBag};

/// Three states of an optional, nullable field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Slot<T> {
    /// Key not present in the bag.
    #[default]
    Absent,
    /// Key present, holding JSON null.
    Null,
    /// Key present, holding a value.
    Present(T),
}

impl<T> Slot<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn present(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Collapses absent and null into `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Slot<&T> {
        match self {
            Self::Absent => Slot::Absent,
            Self::Null => Slot::Null,
            Self::Present(value) => Slot::Present(value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Slot<U> {
        match self {
            Self::Absent => Slot::Absent,
            Self::Null => Slot::Null,
            Self::Present(value) => Slot::Present(f(value)),
        }
    }
}

/// What a setter does when handed `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullPolicy {
    /// Write an explicit JSON null; the key appears on the wire.
    Explicit,
    /// Leave the bag untouched; the key stays off the wire.
    Omit,
}

fn decode<T: DeserializeOwned>(key: &str, value: &Value) -> Result<T, FieldError> {
    T::deserialize(value).map_err(|err| {
        FieldError::invalid(key, format!("cannot decode {}: {err}", kind_of(value)))
    })
}

/// Required, non-nullable field.
pub fn required<T: DeserializeOwned>(bag: &RawBag, key: &str) -> Result<T, FieldError> {
    match bag.get(key) {
        None => Err(FieldError::missing(key)),
        Some(Value::Null) => Err(FieldError::null_not_allowed(key)),
        Some(value) => decode(key, value),
    }
}

/// Required key whose value may be null.
pub fn required_nullable<T: DeserializeOwned>(
    bag: &RawBag,
    key: &str,
) -> Result<Option<T>, FieldError> {
    match bag.get(key) {
        None => Err(FieldError::missing(key)),
        Some(Value::Null) => Ok(None),
        Some(value) => decode(key, value).map(Some),
    }
}

/// Optional, non-nullable field. A stray null reads the same as absence.
pub fn optional<T: DeserializeOwned>(bag: &RawBag, key: &str) -> Result<Option<T>, FieldError> {
    match bag.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => decode(key, value).map(Some),
    }
}

/// Optional, nullable field, keeping absent and null apart.
pub fn optional_nullable<T: DeserializeOwned>(
    bag: &RawBag,
    key: &str,
) -> Result<Slot<T>, FieldError> {
    match bag.get(key) {
        None => Ok(Slot::Absent),
        Some(Value::Null) => Ok(Slot::Null),
        Some(value) => decode(key, value).map(Slot::Present),
    }
}

/// Setter for required fields: always writes.
pub fn set(bag: &mut RawBag, key: &str, value: impl Into<Value>) {
    bag.set(key, value.into());
}

/// Setter for nullable fields: `None` writes an explicit null.
pub fn set_nullable<V: Into<Value>>(bag: &mut RawBag, key: &str, value: Option<V>) {
    set_with_policy(bag, key, value, NullPolicy::Explicit);
}

/// Setter for non-nullable optional parameters: `None` is a no-op.
pub fn set_omittable<V: Into<Value>>(bag: &mut RawBag, key: &str, value: Option<V>) {
    set_with_policy(bag, key, value, NullPolicy::Omit);
}

pub fn set_with_policy<V: Into<Value>>(
    bag: &mut RawBag,
    key: &str,
    value: Option<V>,
    policy: NullPolicy,
) {
    match (value, policy) {
        (Some(value), _) => bag.set(key, value.into()),
        (None, NullPolicy::Explicit) => bag.set(key, Value::Null),
        (None, NullPolicy::Omit) => {}
    }
}

/// Validates a nested value and reports failures under `key`.
pub fn validate_field<V: Validate + ?Sized>(key: &str, value: &V) -> Result<(), FieldError> {
    value.validate().map_err(|err| err.within(key))
}
