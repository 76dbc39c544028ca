//! OpenEnum: server-defined enumerations that keep unknown wire values.
//!
//! Decoding never fails on an unrecognised string; the value is stored
//! verbatim and only [`OpenEnum::known`] (or `validate`) reports it.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::FieldError;
use crate::model::Validate;

/// A closed set of wire strings known when the client was built.
pub trait WireEnum: Copy + Sized + 'static {
    /// Type name used in error messages.
    const NAME: &'static str;
    const VARIANTS: &'static [Self];

    fn as_wire(&self) -> &'static str;

    fn from_wire(raw: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.as_wire() == raw)
    }
}

/// Declares a closed enum and its [`WireEnum`] mapping.
///
/// ```
/// paywire_core::wire_enum! {
///     /// Lifecycle of a refund.
///     pub enum RefundStatus {
///         Succeeded => "succeeded",
///         Failed => "failed",
///     }
/// }
/// use paywire_core::WireEnum;
/// assert_eq!(RefundStatus::from_wire("failed"), Some(RefundStatus::Failed));
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const VARIANTS: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn as_wire(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::WireEnum::as_wire(self))
            }
        }
    };
}

/// An enum value as it travelled on the wire.
pub struct OpenEnum<E> {
    raw: String,
    _known: PhantomData<fn() -> E>,
}

impl<E: WireEnum> OpenEnum<E> {
    /// Accepts any string verbatim.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            _known: PhantomData,
        }
    }

    pub fn from_known(variant: E) -> Self {
        Self::from_raw(variant.as_wire())
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn into_raw(self) -> String {
        self.raw
    }

    /// Maps the raw string onto the known variant set.
    pub fn known(&self) -> Result<E, FieldError> {
        E::from_wire(&self.raw).ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(kind = E::NAME, raw = %self.raw, "rejected unknown enum value");
            FieldError::invalid(
                "",
                format!("`{}` is not a known {} value", self.raw, E::NAME),
            )
        })
    }

    pub fn is_known(&self) -> bool {
        E::from_wire(&self.raw).is_some()
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.known().map(|_| ())
    }
}

impl<E: WireEnum> From<E> for OpenEnum<E> {
    fn from(variant: E) -> Self {
        Self::from_known(variant)
    }
}

impl<E: WireEnum> From<OpenEnum<E>> for Value {
    fn from(value: OpenEnum<E>) -> Self {
        Value::String(value.raw)
    }
}

impl<E> Clone for OpenEnum<E> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            _known: PhantomData,
        }
    }
}

impl<E> PartialEq for OpenEnum<E> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<E> Eq for OpenEnum<E> {}

impl<E> Hash for OpenEnum<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<E: WireEnum> PartialEq<E> for OpenEnum<E> {
    fn eq(&self, other: &E) -> bool {
        self.raw == other.as_wire()
    }
}

impl<E> fmt::Debug for OpenEnum<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OpenEnum").field(&self.raw).finish()
    }
}

impl<E> fmt::Display for OpenEnum<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<E: WireEnum> Validate for OpenEnum<E> {
    fn validate(&self) -> Result<(), FieldError> {
        OpenEnum::validate(self)
    }
}

impl<E> Serialize for OpenEnum<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de, E: WireEnum> Deserialize<'de> for OpenEnum<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        #[cfg(feature = "tracing")]
        if E::from_wire(&raw).is_none() {
            tracing::debug!(kind = E::NAME, raw = %raw, "decoded unknown enum value");
        }
        Ok(Self::from_raw(raw))
    }
}
