use paywire_core::{accessor, impl_raw_backed, FieldError, OpenEnum, RawBag, Validate};
use serde_json::Value;

use crate::enums::CountryCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingAddress {
    raw: RawBag,
}

impl_raw_backed!(BillingAddress);

impl BillingAddress {
    pub fn new(
        city: impl Into<String>,
        country: impl Into<OpenEnum<CountryCode>>,
        state: impl Into<String>,
        street: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        let mut address = Self { raw: RawBag::new() };
        address.set_city(city);
        address.set_country(country);
        address.set_state(state);
        address.set_street(street);
        address.set_zipcode(zipcode);
        address
    }

    pub fn city(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "city")
    }

    pub fn set_city(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "city", Value::String(value.into()));
    }

    pub fn country(&self) -> Result<OpenEnum<CountryCode>, FieldError> {
        accessor::required(&self.raw, "country")
    }

    pub fn set_country(&mut self, value: impl Into<OpenEnum<CountryCode>>) {
        let value: OpenEnum<CountryCode> = value.into();
        accessor::set(&mut self.raw, "country", value);
    }

    pub fn state(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "state")
    }

    pub fn set_state(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "state", Value::String(value.into()));
    }

    pub fn street(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "street")
    }

    pub fn set_street(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "street", Value::String(value.into()));
    }

    pub fn zipcode(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "zipcode")
    }

    pub fn set_zipcode(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "zipcode", Value::String(value.into()));
    }
}

impl Validate for BillingAddress {
    fn validate(&self) -> Result<(), FieldError> {
        self.city()?;
        accessor::validate_field("country", &self.country()?)?;
        self.state()?;
        self.street()?;
        self.zipcode()?;
        Ok(())
    }
}
