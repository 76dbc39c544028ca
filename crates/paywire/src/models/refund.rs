use chrono::{DateTime, Utc};
use paywire_core::{accessor, impl_raw_backed, wire, FieldError, OpenEnum, RawBag, Slot, Validate};
use serde_json::Value;

use crate::enums::{Currency, RefundStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refund {
    raw: RawBag,
}

impl_raw_backed!(Refund);

/// Required fields of a [`Refund`].
#[derive(Debug, Clone)]
pub struct RefundFields {
    pub business_id: String,
    pub created_at: DateTime<Utc>,
    pub is_partial: bool,
    pub payment_id: String,
    pub refund_id: String,
    pub status: OpenEnum<RefundStatus>,
}

impl Refund {
    pub fn new(fields: RefundFields) -> Self {
        let mut refund = Self { raw: RawBag::new() };
        refund.set_business_id(fields.business_id);
        refund.set_created_at(fields.created_at);
        refund.set_is_partial(fields.is_partial);
        refund.set_payment_id(fields.payment_id);
        refund.set_refund_id(fields.refund_id);
        refund.set_status(fields.status);
        refund
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

    pub fn is_partial(&self) -> Result<bool, FieldError> {
        accessor::required(&self.raw, "is_partial")
    }

    pub fn set_is_partial(&mut self, value: bool) {
        accessor::set(&mut self.raw, "is_partial", value);
    }

    pub fn payment_id(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "payment_id")
    }

    pub fn set_payment_id(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "payment_id", Value::String(value.into()));
    }

    pub fn refund_id(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "refund_id")
    }

    pub fn set_refund_id(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "refund_id", Value::String(value.into()));
    }

    pub fn status(&self) -> Result<OpenEnum<RefundStatus>, FieldError> {
        accessor::required(&self.raw, "status")
    }

    pub fn set_status(&mut self, value: impl Into<OpenEnum<RefundStatus>>) {
        let value: OpenEnum<RefundStatus> = value.into();
        accessor::set(&mut self.raw, "status", value);
    }

    pub fn amount(&self) -> Result<Slot<i64>, FieldError> {
        accessor::optional_nullable(&self.raw, "amount")
    }

    pub fn set_amount(&mut self, value: Option<i64>) {
        accessor::set_nullable(&mut self.raw, "amount", value);
    }

    pub fn currency(&self) -> Result<Slot<OpenEnum<Currency>>, FieldError> {
        accessor::optional_nullable(&self.raw, "currency")
    }

    pub fn set_currency(&mut self, value: Option<OpenEnum<Currency>>) {
        accessor::set_nullable(&mut self.raw, "currency", value);
    }

    pub fn reason(&self) -> Result<Slot<String>, FieldError> {
        accessor::optional_nullable(&self.raw, "reason")
    }

    pub fn set_reason(&mut self, value: Option<String>) {
        accessor::set_nullable(&mut self.raw, "reason", value);
    }
}

impl Validate for Refund {
    fn validate(&self) -> Result<(), FieldError> {
        self.business_id()?;
        self.created_at()?;
        self.is_partial()?;
        self.payment_id()?;
        self.refund_id()?;
        accessor::validate_field("status", &self.status()?)?;
        self.amount()?;
        accessor::validate_field("currency", &self.currency()?)?;
        self.reason()?;
        Ok(())
    }
}
