use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use paywire_core::{accessor, impl_raw_backed, wire, FieldError, RawBag, Slot, Validate};
use serde_json::Value;

/// A metered usage event recorded against a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageEvent {
    raw: RawBag,
}

impl_raw_backed!(UsageEvent);

impl UsageEvent {
    pub fn new(
        business_id: impl Into<String>,
        customer_id: impl Into<String>,
        event_id: impl Into<String>,
        event_name: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let mut event = Self { raw: RawBag::new() };
        event.set_business_id(business_id);
        event.set_customer_id(customer_id);
        event.set_event_id(event_id);
        event.set_event_name(event_name);
        event.set_timestamp(timestamp);
        event
    }

    pub fn business_id(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "business_id")
    }

    pub fn set_business_id(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "business_id", Value::String(value.into()));
    }

    pub fn customer_id(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "customer_id")
    }

    pub fn set_customer_id(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "customer_id", Value::String(value.into()));
    }

    pub fn event_id(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "event_id")
    }

    pub fn set_event_id(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "event_id", Value::String(value.into()));
    }

    pub fn event_name(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "event_name")
    }

    pub fn set_event_name(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "event_name", Value::String(value.into()));
    }

    pub fn timestamp(&self) -> Result<DateTime<Utc>, FieldError> {
        accessor::required(&self.raw, "timestamp")
    }

    pub fn set_timestamp(&mut self, value: DateTime<Utc>) {
        accessor::set(&mut self.raw, "timestamp", wire::timestamp(value));
    }

    /// Free-form properties; values are strings, numbers or booleans.
    pub fn metadata(&self) -> Result<Slot<IndexMap<String, Value>>, FieldError> {
        accessor::optional_nullable(&self.raw, "metadata")
    }

    pub fn set_metadata(&mut self, value: Option<IndexMap<String, Value>>) {
        let value = value.map(|map| Value::Object(map.into_iter().collect()));
        accessor::set_nullable(&mut self.raw, "metadata", value);
    }
}

impl Validate for UsageEvent {
    fn validate(&self) -> Result<(), FieldError> {
        self.business_id()?;
        self.customer_id()?;
        self.event_id()?;
        self.event_name()?;
        self.timestamp()?;
        if let Slot::Present(metadata) = self.metadata()? {
            for (key, value) in &metadata {
                if value.is_array() || value.is_object() {
                    return Err(FieldError::invalid(
                        format!("metadata.{key}"),
                        "metadata values must be scalars",
                    ));
                }
            }
        }
        Ok(())
    }
}
