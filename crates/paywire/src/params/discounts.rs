use chrono::{DateTime, Utc};
use paywire_core::{
    accessor, wire, FieldError, Method, OpenEnum, Params, ParamsBags, Slot, Validate,
};

use crate::enums::DiscountType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountCreateParams {
    bags: ParamsBags,
}

impl DiscountCreateParams {
    pub fn new(amount: i64, kind: impl Into<OpenEnum<DiscountType>>) -> Self {
        let mut params = Self {
            bags: ParamsBags::default(),
        };
        params.set_amount(amount);
        params.set_kind(kind);
        params
    }

    pub fn amount(&self) -> Result<i64, FieldError> {
        accessor::required(&self.bags.body, "amount")
    }

    pub fn set_amount(&mut self, value: i64) {
        accessor::set(&mut self.bags.body, "amount", value);
    }

    pub fn kind(&self) -> Result<OpenEnum<DiscountType>, FieldError> {
        accessor::required(&self.bags.body, "type")
    }

    pub fn set_kind(&mut self, value: impl Into<OpenEnum<DiscountType>>) {
        let value: OpenEnum<DiscountType> = value.into();
        accessor::set(&mut self.bags.body, "type", value);
    }

    /// Left unset, the server generates a code.
    pub fn code(&self) -> Result<Slot<String>, FieldError> {
        accessor::optional_nullable(&self.bags.body, "code")
    }

    pub fn set_code(&mut self, value: Option<String>) {
        accessor::set_nullable(&mut self.bags.body, "code", value);
    }

    pub fn expires_at(&self) -> Result<Slot<DateTime<Utc>>, FieldError> {
        accessor::optional_nullable(&self.bags.body, "expires_at")
    }

    pub fn set_expires_at(&mut self, value: Option<DateTime<Utc>>) {
        accessor::set_nullable(&mut self.bags.body, "expires_at", wire::timestamp_opt(value));
    }

    pub fn name(&self) -> Result<Slot<String>, FieldError> {
        accessor::optional_nullable(&self.bags.body, "name")
    }

    pub fn set_name(&mut self, value: Option<String>) {
        accessor::set_nullable(&mut self.bags.body, "name", value);
    }

    pub fn restricted_to(&self) -> Result<Slot<Vec<String>>, FieldError> {
        accessor::optional_nullable(&self.bags.body, "restricted_to")
    }

    pub fn set_restricted_to(&mut self, value: Option<Vec<String>>) {
        accessor::set_nullable(&mut self.bags.body, "restricted_to", value);
    }

    pub fn usage_limit(&self) -> Result<Slot<i64>, FieldError> {
        accessor::optional_nullable(&self.bags.body, "usage_limit")
    }

    pub fn set_usage_limit(&mut self, value: Option<i64>) {
        accessor::set_nullable(&mut self.bags.body, "usage_limit", value);
    }
}

impl Validate for DiscountCreateParams {
    fn validate(&self) -> Result<(), FieldError> {
        self.amount()?;
        accessor::validate_field("type", &self.kind()?)?;
        self.code()?;
        self.expires_at()?;
        self.name()?;
        self.restricted_to()?;
        self.usage_limit()?;
        Ok(())
    }
}

impl Params for DiscountCreateParams {
    const METHOD: Method = Method::Post;
    const PATH: &'static str = "/discounts";

    fn bags(&self) -> &ParamsBags {
        &self.bags
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountRetrieveParams {
    discount_id: String,
    bags: ParamsBags,
}

impl DiscountRetrieveParams {
    pub fn new(discount_id: impl Into<String>) -> Self {
        Self {
            discount_id: discount_id.into(),
            bags: ParamsBags::default(),
        }
    }

    pub fn discount_id(&self) -> &str {
        &self.discount_id
    }
}

impl Params for DiscountRetrieveParams {
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/discounts/{discount_id}";

    fn bags(&self) -> &ParamsBags {
        &self.bags
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("discount_id", self.discount_id.clone())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountDeleteParams {
    discount_id: String,
    bags: ParamsBags,
}

impl DiscountDeleteParams {
    pub fn new(discount_id: impl Into<String>) -> Self {
        Self {
            discount_id: discount_id.into(),
            bags: ParamsBags::default(),
        }
    }

    pub fn discount_id(&self) -> &str {
        &self.discount_id
    }
}

impl Params for DiscountDeleteParams {
    const METHOD: Method = Method::Delete;
    const PATH: &'static str = "/discounts/{discount_id}";

    fn bags(&self) -> &ParamsBags {
        &self.bags
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("discount_id", self.discount_id.clone())]
    }
}

/// Partial update. `None` on a nullable field clears it; `expires_at`
/// cleared means the discount never expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountUpdateParams {
    discount_id: String,
    bags: ParamsBags,
}

impl DiscountUpdateParams {
    pub fn new(discount_id: impl Into<String>) -> Self {
        Self {
            discount_id: discount_id.into(),
            bags: ParamsBags::default(),
        }
    }

    pub fn discount_id(&self) -> &str {
        &self.discount_id
    }

    pub fn amount(&self) -> Result<Option<i64>, FieldError> {
        accessor::optional(&self.bags.body, "amount")
    }

    /// Not nullable: `None` leaves the amount unchanged.
    pub fn set_amount(&mut self, value: Option<i64>) {
        accessor::set_omittable(&mut self.bags.body, "amount", value);
    }

    pub fn kind(&self) -> Result<Option<OpenEnum<DiscountType>>, FieldError> {
        accessor::optional(&self.bags.body, "type")
    }

    pub fn set_kind(&mut self, value: Option<OpenEnum<DiscountType>>) {
        accessor::set_omittable(&mut self.bags.body, "type", value);
    }

    pub fn code(&self) -> Result<Slot<String>, FieldError> {
        accessor::optional_nullable(&self.bags.body, "code")
    }

    pub fn set_code(&mut self, value: Option<String>) {
        accessor::set_nullable(&mut self.bags.body, "code", value);
    }

    pub fn expires_at(&self) -> Result<Slot<DateTime<Utc>>, FieldError> {
        accessor::optional_nullable(&self.bags.body, "expires_at")
    }

    pub fn set_expires_at(&mut self, value: Option<DateTime<Utc>>) {
        accessor::set_nullable(&mut self.bags.body, "expires_at", wire::timestamp_opt(value));
    }

    pub fn name(&self) -> Result<Slot<String>, FieldError> {
        accessor::optional_nullable(&self.bags.body, "name")
    }

    pub fn set_name(&mut self, value: Option<String>) {
        accessor::set_nullable(&mut self.bags.body, "name", value);
    }

    pub fn restricted_to(&self) -> Result<Slot<Vec<String>>, FieldError> {
        accessor::optional_nullable(&self.bags.body, "restricted_to")
    }

    pub fn set_restricted_to(&mut self, value: Option<Vec<String>>) {
        accessor::set_nullable(&mut self.bags.body, "restricted_to", value);
    }

    pub fn usage_limit(&self) -> Result<Slot<i64>, FieldError> {
        accessor::optional_nullable(&self.bags.body, "usage_limit")
    }

    pub fn set_usage_limit(&mut self, value: Option<i64>) {
        accessor::set_nullable(&mut self.bags.body, "usage_limit", value);
    }
}

impl Validate for DiscountUpdateParams {
    fn validate(&self) -> Result<(), FieldError> {
        self.amount()?;
        accessor::validate_field("type", &self.kind()?)?;
        self.code()?;
        self.expires_at()?;
        self.name()?;
        self.restricted_to()?;
        self.usage_limit()?;
        Ok(())
    }
}

impl Params for DiscountUpdateParams {
    const METHOD: Method = Method::Patch;
    const PATH: &'static str = "/discounts/{discount_id}";

    fn bags(&self) -> &ParamsBags {
        &self.bags
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("discount_id", self.discount_id.clone())]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscountListParams {
    bags: ParamsBags,
}

impl DiscountListParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only discounts that are currently usable.
    pub fn active(&self) -> Result<Option<bool>, FieldError> {
        accessor::optional(&self.bags.query, "active")
    }

    pub fn set_active(&mut self, value: Option<bool>) {
        accessor::set_omittable(&mut self.bags.query, "active", value);
    }

    pub fn code(&self) -> Result<Option<String>, FieldError> {
        accessor::optional(&self.bags.query, "code")
    }

    pub fn set_code(&mut self, value: Option<String>) {
        accessor::set_omittable(&mut self.bags.query, "code", value);
    }

    pub fn page_number(&self) -> Result<Option<i64>, FieldError> {
        accessor::optional(&self.bags.query, "page_number")
    }

    pub fn set_page_number(&mut self, value: Option<i64>) {
        accessor::set_omittable(&mut self.bags.query, "page_number", value);
    }

    pub fn page_size(&self) -> Result<Option<i64>, FieldError> {
        accessor::optional(&self.bags.query, "page_size")
    }

    pub fn set_page_size(&mut self, value: Option<i64>) {
        accessor::set_omittable(&mut self.bags.query, "page_size", value);
    }
}

impl Params for DiscountListParams {
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/discounts";

    fn bags(&self) -> &ParamsBags {
        &self.bags
    }
}
