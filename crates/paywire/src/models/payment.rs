use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use paywire_core::{accessor, impl_raw_backed, wire, FieldError, OpenEnum, RawBag, Slot, Validate};
use serde_json::Value;

use super::{BillingAddress, CustomerLimitedDetails, Dispute, Refund};
use crate::enums::{Currency, IntentStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    raw: RawBag,
}

impl_raw_backed!(Payment);

/// Required fields of a [`Payment`].
#[derive(Debug, Clone)]
pub struct PaymentFields {
    pub billing: BillingAddress,
    pub business_id: String,
    pub created_at: DateTime<Utc>,
    pub currency: OpenEnum<Currency>,
    pub customer: CustomerLimitedDetails,
    pub disputes: Vec<Dispute>,
    pub metadata: IndexMap<String, String>,
    pub payment_id: String,
    pub refunds: Vec<Refund>,
    pub total_amount: i64,
}

impl Payment {
    pub fn new(fields: PaymentFields) -> Self {
        let mut payment = Self { raw: RawBag::new() };
        payment.set_billing(fields.billing);
        payment.set_business_id(fields.business_id);
        payment.set_created_at(fields.created_at);
        payment.set_currency(fields.currency);
        payment.set_customer(fields.customer);
        payment.set_disputes(fields.disputes);
        payment.set_metadata(fields.metadata);
        payment.set_payment_id(fields.payment_id);
        payment.set_refunds(fields.refunds);
        payment.set_total_amount(fields.total_amount);
        payment
    }

    pub fn billing(&self) -> Result<BillingAddress, FieldError> {
        accessor::required(&self.raw, "billing")
    }

    pub fn set_billing(&mut self, value: BillingAddress) {
        accessor::set(&mut self.raw, "billing", value);
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

    pub fn customer(&self) -> Result<CustomerLimitedDetails, FieldError> {
        accessor::required(&self.raw, "customer")
    }

    pub fn set_customer(&mut self, value: CustomerLimitedDetails) {
        accessor::set(&mut self.raw, "customer", value);
    }

    pub fn disputes(&self) -> Result<Vec<Dispute>, FieldError> {
        accessor::required(&self.raw, "disputes")
    }

    pub fn set_disputes(&mut self, value: Vec<Dispute>) {
        accessor::set(&mut self.raw, "disputes", value);
    }

    pub fn metadata(&self) -> Result<IndexMap<String, String>, FieldError> {
        accessor::required(&self.raw, "metadata")
    }

    pub fn set_metadata(&mut self, value: IndexMap<String, String>) {
        let object: serde_json::Map<String, Value> = value
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect();
        accessor::set(&mut self.raw, "metadata", Value::Object(object));
    }

    pub fn payment_id(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "payment_id")
    }

    pub fn set_payment_id(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "payment_id", Value::String(value.into()));
    }

    pub fn refunds(&self) -> Result<Vec<Refund>, FieldError> {
        accessor::required(&self.raw, "refunds")
    }

    pub fn set_refunds(&mut self, value: Vec<Refund>) {
        accessor::set(&mut self.raw, "refunds", value);
    }

    /// Total in the smallest currency unit, tax included.
    pub fn total_amount(&self) -> Result<i64, FieldError> {
        accessor::required(&self.raw, "total_amount")
    }

    pub fn set_total_amount(&mut self, value: i64) {
        accessor::set(&mut self.raw, "total_amount", value);
    }

    pub fn discount_id(&self) -> Result<Slot<String>, FieldError> {
        accessor::optional_nullable(&self.raw, "discount_id")
    }

    pub fn set_discount_id(&mut self, value: Option<String>) {
        accessor::set_nullable(&mut self.raw, "discount_id", value);
    }

    pub fn status(&self) -> Result<Slot<OpenEnum<IntentStatus>>, FieldError> {
        accessor::optional_nullable(&self.raw, "status")
    }

    pub fn set_status(&mut self, value: Option<OpenEnum<IntentStatus>>) {
        accessor::set_nullable(&mut self.raw, "status", value);
    }

    pub fn tax(&self) -> Result<Slot<i64>, FieldError> {
        accessor::optional_nullable(&self.raw, "tax")
    }

    pub fn set_tax(&mut self, value: Option<i64>) {
        accessor::set_nullable(&mut self.raw, "tax", value);
    }
}

impl Validate for Payment {
    fn validate(&self) -> Result<(), FieldError> {
        accessor::validate_field("billing", &self.billing()?)?;
        self.business_id()?;
        self.created_at()?;
        accessor::validate_field("currency", &self.currency()?)?;
        accessor::validate_field("customer", &self.customer()?)?;
        accessor::validate_field("disputes", &self.disputes()?)?;
        self.metadata()?;
        self.payment_id()?;
        accessor::validate_field("refunds", &self.refunds()?)?;
        self.total_amount()?;
        self.discount_id()?;
        accessor::validate_field("status", &self.status()?)?;
        self.tax()?;
        Ok(())
    }
}
