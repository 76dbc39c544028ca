use chrono::{DateTime, Utc};
use paywire_core::{accessor, impl_raw_backed, wire, FieldError, OpenEnum, RawBag, Slot, Validate};
use serde_json::Value;

use crate::enums::{DisputeStage, DisputeStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispute {
    raw: RawBag,
}

impl_raw_backed!(Dispute);

/// Required fields of a [`Dispute`].
#[derive(Debug, Clone)]
pub struct DisputeFields {
    pub amount: String,
    pub business_id: String,
    pub created_at: DateTime<Utc>,
    pub currency: String,
    pub dispute_id: String,
    pub dispute_stage: OpenEnum<DisputeStage>,
    pub dispute_status: OpenEnum<DisputeStatus>,
    pub payment_id: String,
}

impl Dispute {
    pub fn new(fields: DisputeFields) -> Self {
        let mut dispute = Self { raw: RawBag::new() };
        dispute.set_amount(fields.amount);
        dispute.set_business_id(fields.business_id);
        dispute.set_created_at(fields.created_at);
        dispute.set_currency(fields.currency);
        dispute.set_dispute_id(fields.dispute_id);
        dispute.set_dispute_stage(fields.dispute_stage);
        dispute.set_dispute_status(fields.dispute_status);
        dispute.set_payment_id(fields.payment_id);
        dispute
    }

    /// Disputed amount as a decimal string.
    pub fn amount(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "amount")
    }

    pub fn set_amount(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "amount", Value::String(value.into()));
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

    pub fn currency(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "currency")
    }

    pub fn set_currency(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "currency", Value::String(value.into()));
    }

    pub fn dispute_id(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "dispute_id")
    }

    pub fn set_dispute_id(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "dispute_id", Value::String(value.into()));
    }

    pub fn dispute_stage(&self) -> Result<OpenEnum<DisputeStage>, FieldError> {
        accessor::required(&self.raw, "dispute_stage")
    }

    pub fn set_dispute_stage(&mut self, value: impl Into<OpenEnum<DisputeStage>>) {
        let value: OpenEnum<DisputeStage> = value.into();
        accessor::set(&mut self.raw, "dispute_stage", value);
    }

    pub fn dispute_status(&self) -> Result<OpenEnum<DisputeStatus>, FieldError> {
        accessor::required(&self.raw, "dispute_status")
    }

    pub fn set_dispute_status(&mut self, value: impl Into<OpenEnum<DisputeStatus>>) {
        let value: OpenEnum<DisputeStatus> = value.into();
        accessor::set(&mut self.raw, "dispute_status", value);
    }

    pub fn payment_id(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "payment_id")
    }

    pub fn set_payment_id(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "payment_id", Value::String(value.into()));
    }

    pub fn remarks(&self) -> Result<Slot<String>, FieldError> {
        accessor::optional_nullable(&self.raw, "remarks")
    }

    pub fn set_remarks(&mut self, value: Option<String>) {
        accessor::set_nullable(&mut self.raw, "remarks", value);
    }
}

impl Validate for Dispute {
    fn validate(&self) -> Result<(), FieldError> {
        self.amount()?;
        self.business_id()?;
        self.created_at()?;
        self.currency()?;
        self.dispute_id()?;
        accessor::validate_field("dispute_stage", &self.dispute_stage()?)?;
        accessor::validate_field("dispute_status", &self.dispute_status()?)?;
        self.payment_id()?;
        self.remarks()?;
        Ok(())
    }
}
