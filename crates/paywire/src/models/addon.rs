use chrono::{DateTime, Utc};
use paywire_core::{accessor, impl_raw_backed, wire, FieldError, OpenEnum, RawBag, Slot, Validate};
use serde_json::Value;

use crate::enums::{Currency, TaxCategory};

/// A purchasable extra attached to a subscription product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addon {
    raw: RawBag,
}

impl_raw_backed!(Addon);

/// Required fields of an [`Addon`].
#[derive(Debug, Clone)]
pub struct AddonFields {
    pub id: String,
    pub business_id: String,
    pub created_at: DateTime<Utc>,
    pub currency: OpenEnum<Currency>,
    pub name: String,
    pub price: i64,
    pub tax_category: OpenEnum<TaxCategory>,
    pub updated_at: DateTime<Utc>,
}

impl Addon {
    pub fn new(fields: AddonFields) -> Self {
        let mut addon = Self { raw: RawBag::new() };
        addon.set_id(fields.id);
        addon.set_business_id(fields.business_id);
        addon.set_created_at(fields.created_at);
        addon.set_currency(fields.currency);
        addon.set_name(fields.name);
        addon.set_price(fields.price);
        addon.set_tax_category(fields.tax_category);
        addon.set_updated_at(fields.updated_at);
        addon
    }

    pub fn id(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "id")
    }

    pub fn set_id(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "id", Value::String(value.into()));
    }

    pub fn business_id(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "business_id")
    }

    pub fn set_business_id(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "business_id", Value::String(value.into()));
    }

    pub fn created_at(&self) -> Result<DateTime<Utc>, FieldError> {
        accessor::required(&self.raw, "created_at")
    }

    pub fn set_created_at(&mut self, value: DateTime<Utc>) {
        accessor::set(&mut self.raw, "created_at", wire::timestamp(value));
    }

    pub fn currency(&self) -> Result<OpenEnum<Currency>, FieldError> {
        accessor::required(&self.raw, "currency")
    }

    pub fn set_currency(&mut self, value: impl Into<OpenEnum<Currency>>) {
        let value: OpenEnum<Currency> = value.into();
        accessor::set(&mut self.raw, "currency", value);
    }

    pub fn name(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "name")
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "name", Value::String(value.into()));
    }

    /// Price in the smallest currency unit.
    pub fn price(&self) -> Result<i64, FieldError> {
        accessor::required(&self.raw, "price")
    }

    pub fn set_price(&mut self, value: i64) {
        accessor::set(&mut self.raw, "price", value);
    }

    pub fn tax_category(&self) -> Result<OpenEnum<TaxCategory>, FieldError> {
        accessor::required(&self.raw, "tax_category")
    }

    pub fn set_tax_category(&mut self, value: impl Into<OpenEnum<TaxCategory>>) {
        let value: OpenEnum<TaxCategory> = value.into();
        accessor::set(&mut self.raw, "tax_category", value);
    }

    pub fn updated_at(&self) -> Result<DateTime<Utc>, FieldError> {
        accessor::required(&self.raw, "updated_at")
    }

    pub fn set_updated_at(&mut self, value: DateTime<Utc>) {
        accessor::set(&mut self.raw, "updated_at", wire::timestamp(value));
    }

    pub fn description(&self) -> Result<Slot<String>, FieldError> {
        accessor::optional_nullable(&self.raw, "description")
    }

    pub fn set_description(&mut self, value: Option<String>) {
        accessor::set_nullable(&mut self.raw, "description", value);
    }

    /// Url of the add-on image.
    pub fn image(&self) -> Result<Slot<String>, FieldError> {
        accessor::optional_nullable(&self.raw, "image")
    }

    pub fn set_image(&mut self, value: Option<String>) {
        accessor::set_nullable(&mut self.raw, "image", value);
    }
}

impl Validate for Addon {
    fn validate(&self) -> Result<(), FieldError> {
        self.id()?;
        self.business_id()?;
        self.created_at()?;
        accessor::validate_field("currency", &self.currency()?)?;
        self.name()?;
        self.price()?;
        accessor::validate_field("tax_category", &self.tax_category()?)?;
        self.updated_at()?;
        self.description()?;
        self.image()?;
        Ok(())
    }
}
