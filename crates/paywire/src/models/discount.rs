use chrono::{DateTime, Utc};
use paywire_core::{accessor, impl_raw_backed, wire, FieldError, OpenEnum, RawBag, Slot, Validate};
use serde_json::Value;

use crate::enums::DiscountType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discount {
    raw: RawBag,
}

impl_raw_backed!(Discount);

/// Required fields of a [`Discount`].
#[derive(Debug, Clone)]
pub struct DiscountFields {
    pub amount: i64,
    pub business_id: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub discount_id: String,
    pub restricted_to: Vec<String>,
    pub times_used: i64,
    pub kind: OpenEnum<DiscountType>,
}

impl Discount {
    pub fn new(fields: DiscountFields) -> Self {
        let mut discount = Self { raw: RawBag::new() };
        discount.set_amount(fields.amount);
        discount.set_business_id(fields.business_id);
        discount.set_code(fields.code);
        discount.set_created_at(fields.created_at);
        discount.set_discount_id(fields.discount_id);
        discount.set_restricted_to(fields.restricted_to);
        discount.set_times_used(fields.times_used);
        discount.set_kind(fields.kind);
        discount
    }

    /// For percentage discounts, basis points (`540` is 5.4%).
    pub fn amount(&self) -> Result<i64, FieldError> {
        accessor::required(&self.raw, "amount")
    }

    pub fn set_amount(&mut self, value: i64) {
        accessor::set(&mut self.raw, "amount", value);
    }

    pub fn business_id(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "business_id")
    }

    pub fn set_business_id(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "business_id", Value::String(value.into()));
    }

    pub fn code(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "code")
    }

    pub fn set_code(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "code", Value::String(value.into()));
    }

    pub fn created_at(&self) -> Result<DateTime<Utc>, FieldError> {
        accessor::required(&self.raw, "created_at")
    }

    pub fn set_created_at(&mut self, value: DateTime<Utc>) {
        accessor::set(&mut self.raw, "created_at", wire::timestamp(value));
    }

    pub fn discount_id(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "discount_id")
    }

    pub fn set_discount_id(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "discount_id", Value::String(value.into()));
    }

    /// Product ids the discount applies to; empty means all products.
    pub fn restricted_to(&self) -> Result<Vec<String>, FieldError> {
        accessor::required(&self.raw, "restricted_to")
    }

    pub fn set_restricted_to(&mut self, value: Vec<String>) {
        accessor::set(&mut self.raw, "restricted_to", value);
    }

    pub fn times_used(&self) -> Result<i64, FieldError> {
        accessor::required(&self.raw, "times_used")
    }

    pub fn set_times_used(&mut self, value: i64) {
        accessor::set(&mut self.raw, "times_used", value);
    }

    /// The `type` field.
    pub fn kind(&self) -> Result<OpenEnum<DiscountType>, FieldError> {
        accessor::required(&self.raw, "type")
    }

    pub fn set_kind(&mut self, value: impl Into<OpenEnum<DiscountType>>) {
        let value: OpenEnum<DiscountType> = value.into();
        accessor::set(&mut self.raw, "type", value);
    }

    pub fn expires_at(&self) -> Result<Slot<DateTime<Utc>>, FieldError> {
        accessor::optional_nullable(&self.raw, "expires_at")
    }

    pub fn set_expires_at(&mut self, value: Option<DateTime<Utc>>) {
        accessor::set_nullable(&mut self.raw, "expires_at", wire::timestamp_opt(value));
    }

    pub fn name(&self) -> Result<Slot<String>, FieldError> {
        accessor::optional_nullable(&self.raw, "name")
    }

    pub fn set_name(&mut self, value: Option<String>) {
        accessor::set_nullable(&mut self.raw, "name", value);
    }

    /// Billing cycles the discount applies to for subscriptions.
    pub fn subscription_cycles(&self) -> Result<Slot<i64>, FieldError> {
        accessor::optional_nullable(&self.raw, "subscription_cycles")
    }

    pub fn set_subscription_cycles(&mut self, value: Option<i64>) {
        accessor::set_nullable(&mut self.raw, "subscription_cycles", value);
    }

    pub fn usage_limit(&self) -> Result<Slot<i64>, FieldError> {
        accessor::optional_nullable(&self.raw, "usage_limit")
    }

    pub fn set_usage_limit(&mut self, value: Option<i64>) {
        accessor::set_nullable(&mut self.raw, "usage_limit", value);
    }
}

impl Validate for Discount {
    fn validate(&self) -> Result<(), FieldError> {
        self.amount()?;
        self.business_id()?;
        self.code()?;
        self.created_at()?;
        self.discount_id()?;
        self.restricted_to()?;
        self.times_used()?;
        accessor::validate_field("type", &self.kind()?)?;
        self.expires_at()?;
        self.name()?;
        self.subscription_cycles()?;
        self.usage_limit()?;
        Ok(())
    }
}
