use chrono::{DateTime, Utc};
use paywire_core::{
    accessor, impl_raw_backed, wire, FieldError, Method, OpenEnum, Params, ParamsBags, RawBag,
    Slot, Validate,
};
use serde_json::Value;

use crate::enums::RefundStatus;

/// One line of a partial refund.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefundItem {
    raw: RawBag,
}

impl_raw_backed!(RefundItem);

impl RefundItem {
    pub fn new(item_id: impl Into<String>) -> Self {
        let mut item = Self { raw: RawBag::new() };
        item.set_item_id(item_id);
        item
    }

    pub fn item_id(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "item_id")
    }

    pub fn set_item_id(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "item_id", Value::String(value.into()));
    }

    /// Null refunds the full item amount.
    pub fn amount(&self) -> Result<Slot<i64>, FieldError> {
        accessor::optional_nullable(&self.raw, "amount")
    }

    pub fn set_amount(&mut self, value: Option<i64>) {
        accessor::set_nullable(&mut self.raw, "amount", value);
    }

    pub fn tax_inclusive(&self) -> Result<Slot<bool>, FieldError> {
        accessor::optional_nullable(&self.raw, "tax_inclusive")
    }

    pub fn set_tax_inclusive(&mut self, value: Option<bool>) {
        accessor::set_nullable(&mut self.raw, "tax_inclusive", value);
    }
}

impl Validate for RefundItem {
    fn validate(&self) -> Result<(), FieldError> {
        self.item_id()?;
        self.amount()?;
        self.tax_inclusive()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefundCreateParams {
    bags: ParamsBags,
}

impl RefundCreateParams {
    pub fn new(payment_id: impl Into<String>) -> Self {
        let mut params = Self {
            bags: ParamsBags::default(),
        };
        params.set_payment_id(payment_id);
        params
    }

    pub fn payment_id(&self) -> Result<String, FieldError> {
        accessor::required(&self.bags.body, "payment_id")
    }

    pub fn set_payment_id(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.bags.body, "payment_id", Value::String(value.into()));
    }

    /// Null refunds the whole payment.
    pub fn items(&self) -> Result<Slot<Vec<RefundItem>>, FieldError> {
        accessor::optional_nullable(&self.bags.body, "items")
    }

    pub fn set_items(&mut self, value: Option<Vec<RefundItem>>) {
        accessor::set_nullable(&mut self.bags.body, "items", value);
    }

    pub fn reason(&self) -> Result<Slot<String>, FieldError> {
        accessor::optional_nullable(&self.bags.body, "reason")
    }

    pub fn set_reason(&mut self, value: Option<String>) {
        accessor::set_nullable(&mut self.bags.body, "reason", value);
    }

    pub fn idempotency_key(&self) -> Result<Option<String>, FieldError> {
        accessor::optional(&self.bags.headers, "Idempotency-Key")
    }

    pub fn set_idempotency_key(&mut self, value: Option<String>) {
        accessor::set_omittable(&mut self.bags.headers, "Idempotency-Key", value);
    }
}

impl Validate for RefundCreateParams {
    fn validate(&self) -> Result<(), FieldError> {
        self.payment_id()?;
        accessor::validate_field("items", &self.items()?)?;
        self.reason()?;
        self.idempotency_key()?;
        Ok(())
    }
}

impl Params for RefundCreateParams {
    const METHOD: Method = Method::Post;
    const PATH: &'static str = "/refunds";

    fn bags(&self) -> &ParamsBags {
        &self.bags
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefundRetrieveParams {
    refund_id: String,
    bags: ParamsBags,
}

impl RefundRetrieveParams {
    pub fn new(refund_id: impl Into<String>) -> Self {
        Self {
            refund_id: refund_id.into(),
            bags: ParamsBags::default(),
        }
    }

    pub fn refund_id(&self) -> &str {
        &self.refund_id
    }
}

impl Params for RefundRetrieveParams {
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/refunds/{refund_id}";

    fn bags(&self) -> &ParamsBags {
        &self.bags
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("refund_id", self.refund_id.clone())]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefundListParams {
    bags: ParamsBags,
}

impl RefundListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created_at_gte(&self) -> Result<Option<DateTime<Utc>>, FieldError> {
        accessor::optional(&self.bags.query, "created_at_gte")
    }

    pub fn set_created_at_gte(&mut self, value: Option<DateTime<Utc>>) {
        accessor::set_omittable(&mut self.bags.query, "created_at_gte", wire::timestamp_opt(value));
    }

    pub fn created_at_lte(&self) -> Result<Option<DateTime<Utc>>, FieldError> {
        accessor::optional(&self.bags.query, "created_at_lte")
    }

    pub fn set_created_at_lte(&mut self, value: Option<DateTime<Utc>>) {
        accessor::set_omittable(&mut self.bags.query, "created_at_lte", wire::timestamp_opt(value));
    }

    pub fn customer_id(&self) -> Result<Option<String>, FieldError> {
        accessor::optional(&self.bags.query, "customer_id")
    }

    pub fn set_customer_id(&mut self, value: Option<String>) {
        accessor::set_omittable(&mut self.bags.query, "customer_id", value);
    }

    pub fn status(&self) -> Result<Option<OpenEnum<RefundStatus>>, FieldError> {
        accessor::optional(&self.bags.query, "status")
    }

    pub fn set_status(&mut self, value: Option<OpenEnum<RefundStatus>>) {
        accessor::set_omittable(&mut self.bags.query, "status", value);
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

impl Params for RefundListParams {
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/refunds";

    fn bags(&self) -> &ParamsBags {
        &self.bags
    }
}
