use chrono::{DateTime, Utc};
use paywire_core::{accessor, impl_raw_backed, wire, FieldError, RawBag, Slot, Validate};
use serde_json::Value;

/// A customer of the business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    raw: RawBag,
}

impl_raw_backed!(Customer);

impl Customer {
    pub fn new(
        business_id: impl Into<String>,
        created_at: DateTime<Utc>,
        customer_id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let mut customer = Self { raw: RawBag::new() };
        customer.set_business_id(business_id);
        customer.set_created_at(created_at);
        customer.set_customer_id(customer_id);
        customer.set_email(email);
        customer.set_name(name);
        customer
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

    pub fn customer_id(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "customer_id")
    }

    pub fn set_customer_id(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "customer_id", Value::String(value.into()));
    }

    pub fn email(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "email")
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "email", Value::String(value.into()));
    }

    pub fn name(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "name")
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "name", Value::String(value.into()));
    }

    pub fn phone_number(&self) -> Result<Slot<String>, FieldError> {
        accessor::optional_nullable(&self.raw, "phone_number")
    }

    pub fn set_phone_number(&mut self, value: Option<String>) {
        accessor::set_nullable(&mut self.raw, "phone_number", value);
    }
}

impl Validate for Customer {
    fn validate(&self) -> Result<(), FieldError> {
        self.business_id()?;
        self.created_at()?;
        self.customer_id()?;
        self.email()?;
        self.name()?;
        self.phone_number()?;
        Ok(())
    }
}

/// The customer summary embedded in payments and subscriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerLimitedDetails {
    raw: RawBag,
}

impl_raw_backed!(CustomerLimitedDetails);

impl CustomerLimitedDetails {
    pub fn new(
        customer_id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let mut details = Self { raw: RawBag::new() };
        details.set_customer_id(customer_id);
        details.set_email(email);
        details.set_name(name);
        details
    }

    pub fn customer_id(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "customer_id")
    }

    pub fn set_customer_id(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "customer_id", Value::String(value.into()));
    }

    pub fn email(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "email")
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "email", Value::String(value.into()));
    }

    pub fn name(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "name")
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "name", Value::String(value.into()));
    }
}

impl Validate for CustomerLimitedDetails {
    fn validate(&self) -> Result<(), FieldError> {
        self.customer_id()?;
        self.email()?;
        self.name()?;
        Ok(())
    }
}
