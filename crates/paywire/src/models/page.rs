use std::marker::PhantomData;

use paywire_core::serde::{Deserialize, Deserializer, Serialize, Serializer};
use paywire_core::{accessor, FieldError, RawBacked, RawBag, Validate};
use serde_json::Value;

/// One page of a page-number paginated list.
#[derive(Debug)]
pub struct PageNumberPage<T> {
    raw: RawBag,
    _item: PhantomData<fn() -> T>,
}

impl<T> PageNumberPage<T>
where
    T: RawBacked + Into<Value> + for<'de> Deserialize<'de>,
{
    pub fn new(items: Vec<T>) -> Self {
        let mut page = Self::from_raw(RawBag::new());
        page.set_items(items);
        page
    }

    pub fn items(&self) -> Result<Vec<T>, FieldError> {
        accessor::required(&self.raw, "items")
    }

    pub fn set_items(&mut self, value: Vec<T>) {
        accessor::set(&mut self.raw, "items", value);
    }
}

impl<T> RawBacked for PageNumberPage<T> {
    fn from_raw(raw: RawBag) -> Self {
        Self {
            raw,
            _item: PhantomData,
        }
    }

    fn raw(&self) -> &RawBag {
        &self.raw
    }

    fn raw_mut(&mut self) -> &mut RawBag {
        &mut self.raw
    }

    fn into_raw(self) -> RawBag {
        self.raw
    }
}

impl<T> Clone for PageNumberPage<T> {
    fn clone(&self) -> Self {
        Self::from_raw(self.raw.clone())
    }
}

impl<T> PartialEq for PageNumberPage<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> Validate for PageNumberPage<T>
where
    T: RawBacked + Into<Value> + Validate + for<'de> Deserialize<'de>,
{
    fn validate(&self) -> Result<(), FieldError> {
        accessor::validate_field("items", &self.items()?)
    }
}

impl<T> Serialize for PageNumberPage<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for PageNumberPage<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawBag::deserialize(deserializer).map(Self::from_raw)
    }
}
