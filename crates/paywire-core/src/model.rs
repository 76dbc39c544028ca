//! Traits shared by every generated model.

use indexmap::IndexMap;
use serde_json::Value;

use crate::accessor::Slot;
use crate::error::FieldError;
use crate::raw::RawBag;

/// A model whose only storage is a [`RawBag`].
pub trait RawBacked: Sized {
    fn from_raw(raw: RawBag) -> Self;

    fn raw(&self) -> &RawBag;

    fn raw_mut(&mut self) -> &mut RawBag;

    fn into_raw(self) -> RawBag;

    /// Decodes a wire object. Only the top-level shape is checked here;
    /// fields are decoded when read.
    fn from_wire_value(value: Value) -> Result<Self, FieldError> {
        RawBag::try_from(value).map(Self::from_raw)
    }

    fn from_json(json: &str) -> Result<Self, FieldError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|err| FieldError::invalid("", format!("malformed JSON: {err}")))?;
        Self::from_wire_value(value)
    }

    fn to_wire_value(&self) -> Value {
        self.raw().to_wire_value()
    }

    fn to_json(&self) -> String {
        self.to_wire_value().to_string()
    }
}

/// Explicit, eager check of everything the lazy accessors would check.
///
/// Implementations stop at the first failing field.
pub trait Validate {
    fn validate(&self) -> Result<(), FieldError>;
}

impl<T: Validate> Validate for [T] {
    fn validate(&self) -> Result<(), FieldError> {
        for (index, item) in self.iter().enumerate() {
            item.validate().map_err(|err| err.within(&format!("[{index}]")))?;
        }
        Ok(())
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), FieldError> {
        self.as_slice().validate()
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), FieldError> {
        match self {
            Some(value) => value.validate(),
            None => Ok(()),
        }
    }
}

impl<T: Validate> Validate for Slot<T> {
    fn validate(&self) -> Result<(), FieldError> {
        match self {
            Slot::Present(value) => value.validate(),
            Slot::Absent | Slot::Null => Ok(()),
        }
    }
}

impl<T: Validate> Validate for IndexMap<String, T> {
    fn validate(&self) -> Result<(), FieldError> {
        for (key, value) in self {
            value.validate().map_err(|err| err.within(key))?;
        }
        Ok(())
    }
}

/// Implements [`RawBacked`], serde and `Into<Value>` for a
/// `struct Name { raw: RawBag }`.
#[macro_export]
macro_rules! impl_raw_backed {
    ($name:ident) => {
        impl $crate::RawBacked for $name {
            fn from_raw(raw: $crate::RawBag) -> Self {
                Self { raw }
            }

            fn raw(&self) -> &$crate::RawBag {
                &self.raw
            }

            fn raw_mut(&mut self) -> &mut $crate::RawBag {
                &mut self.raw
            }

            fn into_raw(self) -> $crate::RawBag {
                self.raw
            }
        }

        impl ::std::convert::From<$name> for $crate::serde_json::Value {
            fn from(model: $name) -> Self {
                model.raw.into()
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S: $crate::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                $crate::serde::Serialize::serialize(&self.raw, serializer)
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D: $crate::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let raw = <$crate::RawBag as $crate::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self { raw })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    struct Line {
        raw: RawBag,
    }

    crate::impl_raw_backed!(Line);

    impl Line {
        fn amount(&self) -> Result<i64, FieldError> {
            accessor::required(&self.raw, "amount")
        }
    }

    impl Validate for Line {
        fn validate(&self) -> Result<(), FieldError> {
            self.amount()?;
            Ok(())
        }
    }

    #[test]
    fn wire_round_trip_keeps_unknown_keys() {
        let line = Line::from_json(r#"{"amount":5,"extra":[true]}"#).unwrap();
        assert_eq!(line.amount(), Ok(5));
        assert_eq!(line.to_json(), r#"{"amount":5,"extra":[true]}"#);
        let value: Value = line.clone().into();
        assert_eq!(value, json!({"amount": 5, "extra": [true]}));
    }

    #[test]
    fn collection_validation_reports_index_path() {
        let lines = vec![
            Line::from_wire_value(json!({"amount": 1})).unwrap(),
            Line::from_wire_value(json!({})).unwrap(),
        ];
        let err = lines.validate().unwrap_err();
        assert_eq!(err, FieldError::missing("[1].amount"));

        let mut map = IndexMap::new();
        map.insert("main".to_string(), lines[1].clone());
        assert_eq!(map.validate().unwrap_err().key(), "main.amount");
    }

    #[test]
    fn option_and_slot_skip_unset_values() {
        let missing: Option<Line> = None;
        assert!(missing.validate().is_ok());
        assert!(Slot::<Line>::Null.validate().is_ok());
        let bad = Slot::Present(Line::from_raw(RawBag::new()));
        assert!(bad.validate().is_err());
    }

    #[test]
    fn malformed_json_is_invalid_data() {
        assert!(Line::from_json("{").unwrap_err().is_invalid_data());
        assert!(Line::from_json("[]").unwrap_err().is_invalid_data());
    }
}
