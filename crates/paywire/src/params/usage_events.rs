use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use paywire_core::{
    accessor, impl_raw_backed, wire, FieldError, Method, Params, ParamsBags, RawBag, Slot,
    Validate,
};
use serde_json::Value;

/// One event in an ingest batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInput {
    raw: RawBag,
}

impl_raw_backed!(EventInput);

impl EventInput {
    pub fn new(
        customer_id: impl Into<String>,
        event_id: impl Into<String>,
        event_name: impl Into<String>,
    ) -> Self {
        let mut event = Self { raw: RawBag::new() };
        event.set_customer_id(customer_id);
        event.set_event_id(event_id);
        event.set_event_name(event_name);
        event
    }

    pub fn customer_id(&self) -> Result<String, FieldError> {
        accessor::required(&self.raw, "customer_id")
    }

    pub fn set_customer_id(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.raw, "customer_id", Value::String(value.into()));
    }

    /// Client-chosen id; the server deduplicates on it.
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

    pub fn metadata(&self) -> Result<Slot<IndexMap<String, Value>>, FieldError> {
        accessor::optional_nullable(&self.raw, "metadata")
    }

    pub fn set_metadata(&mut self, value: Option<IndexMap<String, Value>>) {
        let value = value.map(|map| Value::Object(map.into_iter().collect()));
        accessor::set_nullable(&mut self.raw, "metadata", value);
    }

    /// Null lets the server stamp the receive time.
    pub fn timestamp(&self) -> Result<Slot<DateTime<Utc>>, FieldError> {
        accessor::optional_nullable(&self.raw, "timestamp")
    }

    pub fn set_timestamp(&mut self, value: Option<DateTime<Utc>>) {
        accessor::set_nullable(&mut self.raw, "timestamp", wire::timestamp_opt(value));
    }
}

impl Validate for EventInput {
    fn validate(&self) -> Result<(), FieldError> {
        self.customer_id()?;
        self.event_id()?;
        self.event_name()?;
        self.metadata()?;
        self.timestamp()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageEventIngestParams {
    bags: ParamsBags,
}

impl UsageEventIngestParams {
    pub fn new(events: Vec<EventInput>) -> Self {
        let mut params = Self {
            bags: ParamsBags::default(),
        };
        params.set_events(events);
        params
    }

    pub fn events(&self) -> Result<Vec<EventInput>, FieldError> {
        accessor::required(&self.bags.body, "events")
    }

    pub fn set_events(&mut self, value: Vec<EventInput>) {
        accessor::set(&mut self.bags.body, "events", value);
    }
}

impl Validate for UsageEventIngestParams {
    fn validate(&self) -> Result<(), FieldError> {
        accessor::validate_field("events", &self.events()?)
    }
}

impl Params for UsageEventIngestParams {
    const METHOD: Method = Method::Post;
    const PATH: &'static str = "/events/ingest";

    fn bags(&self) -> &ParamsBags {
        &self.bags
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageEventRetrieveParams {
    event_id: String,
    bags: ParamsBags,
}

impl UsageEventRetrieveParams {
    pub fn new(event_id: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            bags: ParamsBags::default(),
        }
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }
}

impl Params for UsageEventRetrieveParams {
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/events/{event_id}";

    fn bags(&self) -> &ParamsBags {
        &self.bags
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("event_id", self.event_id.clone())]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageEventListParams {
    bags: ParamsBags,
}

impl UsageEventListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer_id(&self) -> Result<Option<String>, FieldError> {
        accessor::optional(&self.bags.query, "customer_id")
    }

    pub fn set_customer_id(&mut self, value: Option<String>) {
        accessor::set_omittable(&mut self.bags.query, "customer_id", value);
    }

    pub fn event_name(&self) -> Result<Option<String>, FieldError> {
        accessor::optional(&self.bags.query, "event_name")
    }

    pub fn set_event_name(&mut self, value: Option<String>) {
        accessor::set_omittable(&mut self.bags.query, "event_name", value);
    }

    pub fn meter_id(&self) -> Result<Option<String>, FieldError> {
        accessor::optional(&self.bags.query, "meter_id")
    }

    pub fn set_meter_id(&mut self, value: Option<String>) {
        accessor::set_omittable(&mut self.bags.query, "meter_id", value);
    }

    pub fn start(&self) -> Result<Option<DateTime<Utc>>, FieldError> {
        accessor::optional(&self.bags.query, "start")
    }

    pub fn set_start(&mut self, value: Option<DateTime<Utc>>) {
        accessor::set_omittable(&mut self.bags.query, "start", wire::timestamp_opt(value));
    }

    pub fn end(&self) -> Result<Option<DateTime<Utc>>, FieldError> {
        accessor::optional(&self.bags.query, "end")
    }

    pub fn set_end(&mut self, value: Option<DateTime<Utc>>) {
        accessor::set_omittable(&mut self.bags.query, "end", wire::timestamp_opt(value));
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

impl Params for UsageEventListParams {
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/events";

    fn bags(&self) -> &ParamsBags {
        &self.bags
    }
}
