use chrono::{DateTime, Utc};
use paywire_core::{accessor, impl_raw_backed, wire, FieldError, OpenEnum, RawBag, Slot, Validate};
use serde_json::Value;

use crate::enums::{Currency, PayoutStatus};

/// A settlement of collected funds to the business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payout {
    raw: RawBag,
}

impl_raw_backed!(Payout);

/// Required fields of a [`Payout`]. Amounts are in the smallest currency unit.
#[derive(Debug, Clone)]
pub struct PayoutFields {
    pub amount: i64,
    pub business_id: String,
    pub chargebacks: i64,
    pub created_at: DateTime<Utc>,
    pub currency: OpenEnum<Currency>,
    pub fee: i64,
    pub payment_method: String,
    pub payout_id: String,
    pub refunds: i64,
    pub status: OpenEnum<PayoutStatus>,
    pub tax: i64,
    pub updated_at: DateTime<Utc>,
}

impl Payout {
    pub fn new(fields: PayoutFields) -> Self {
        let mut payout = Self { raw: RawBag::new() };
        payout.set_amount(fields.amount);
        payout.set_business_id(fields.business_id);
        payout.set_chargebacks(fields.chargebacks);
        payout.set_created_at(fields.created_at);
        payout.set_currency(fields.currency);
        payout.set_fee(fields.fee);
        payout.set_payment_method(fields.payment_method);
        payout.set_payout_id(fields.payout_id);
        payout.set_refunds(fields.refunds);
        payout.set_status(fields.status);
        payout.set_tax(fields.tax);
        payout.set_updated_at(fields.updated_at);
        payout
    }

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

    pub fn chargebacks(&self) -> Result<i64, FieldError> {
        accessor::required(&self.raw, "chargebacks")
    }

    pub fn set_chargebacks(&mut self, value: i64) {
        accessor::set(&mut self.raw, "chargebacks", value);
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

    pub fn fee(&self) -> Result<i64, FieldError> {
        accessor::required(&self.raw, "fee")
    }

    pub fn set_fee(&mut self, value: i64) {
        accessor::set(&mut self.raw, "fee", value);
    }

    pub fn payment_method(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "payment_method")
    }

    pub fn set_payment_method(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "payment_method", Value::String(value.into()));
    }

    pub fn payout_id(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "payout_id")
    }

    pub fn set_payout_id(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "payout_id", Value::String(value.into()));
    }

    pub fn refunds(&self) -> Result<i64, FieldError> {
        accessor::required(&self.raw, "refunds")
    }

    pub fn set_refunds(&mut self, value: i64) {
        accessor::set(&mut self.raw, "refunds", value);
    }

    pub fn status(&self) -> Result<OpenEnum<PayoutStatus>, FieldError> {
        accessor::required(&self.raw, "status")
    }

    pub fn set_status(&mut self, value: impl Into<OpenEnum<PayoutStatus>>) {
        let value: OpenEnum<PayoutStatus> = value.into();
        accessor::set(&mut self.raw, "status", value);
    }

    pub fn tax(&self) -> Result<i64, FieldError> {
        accessor::required(&self.raw, "tax")
    }

    pub fn set_tax(&mut self, value: i64) {
        accessor::set(&mut self.raw, "tax", value);
    }

    pub fn updated_at(&self) -> Result<DateTime<Utc>, FieldError> {
        accessor::required(&self.raw, "updated_at")
    }

    pub fn set_updated_at(&mut self, value: DateTime<Utc>) {
        accessor::set(&mut self.raw, "updated_at", wire::timestamp(value));
    }

    pub fn name(&self) -> Result<Slot<String>, FieldError> {
        accessor::optional_nullable(&self.raw, "name")
    }

    pub fn set_name(&mut self, value: Option<String>) {
        accessor::set_nullable(&mut self.raw, "name", value);
    }

    pub fn payout_document_url(&self) -> Result<Slot<String>, FieldError> {
        accessor::optional_nullable(&self.raw, "payout_document_url")
    }

    pub fn set_payout_document_url(&mut self, value: Option<String>) {
        accessor::set_nullable(&mut self.raw, "payout_document_url", value);
    }

    pub fn remarks(&self) -> Result<Slot<String>, FieldError> {
        accessor::optional_nullable(&self.raw, "remarks")
    }

    pub fn set_remarks(&mut self, value: Option<String>) {
        accessor::set_nullable(&mut self.raw, "remarks", value);
    }
}

impl Validate for Payout {
    fn validate(&self) -> Result<(), FieldError> {
        self.amount()?;
        self.business_id()?;
        self.chargebacks()?;
        self.created_at()?;
        accessor::validate_field("currency", &self.currency()?)?;
        self.fee()?;
        self.payment_method()?;
        self.payout_id()?;
        self.refunds()?;
        accessor::validate_field("status", &self.status()?)?;
        self.tax()?;
        self.updated_at()?;
        self.name()?;
        self.payout_document_url()?;
        self.remarks()?;
        Ok(())
    }
}
