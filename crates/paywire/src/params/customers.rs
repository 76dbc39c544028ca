use paywire_core::{accessor, FieldError, Method, Params, ParamsBags, Slot, Validate};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerCreateParams {
    bags: ParamsBags,
}

impl CustomerCreateParams {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        let mut params = Self {
            bags: ParamsBags::default(),
        };
        params.set_email(email);
        params.set_name(name);
        params
    }

    pub fn email(&self) -> Result<String, FieldError> {
        accessor::required(&self.bags.body, "email")
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.bags.body, "email", Value::String(value.into()));
    }

    pub fn name(&self) -> Result<String, FieldError> {
        accessor::required(&self.bags.body, "name")
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        accessor::set(&mut self.bags.body, "name", Value::String(value.into()));
    }

    pub fn phone_number(&self) -> Result<Slot<String>, FieldError> {
        accessor::optional_nullable(&self.bags.body, "phone_number")
    }

    pub fn set_phone_number(&mut self, value: Option<String>) {
        accessor::set_nullable(&mut self.bags.body, "phone_number", value);
    }
}

impl Validate for CustomerCreateParams {
    fn validate(&self) -> Result<(), FieldError> {
        self.email()?;
        self.name()?;
        self.phone_number()?;
        Ok(())
    }
}

impl Params for CustomerCreateParams {
    const METHOD: Method = Method::Post;
    const PATH: &'static str = "/customers";

    fn bags(&self) -> &ParamsBags {
        &self.bags
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRetrieveParams {
    customer_id: String,
    bags: ParamsBags,
}

impl CustomerRetrieveParams {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            bags: ParamsBags::default(),
        }
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }
}

impl Params for CustomerRetrieveParams {
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/customers/{customer_id}";

    fn bags(&self) -> &ParamsBags {
        &self.bags
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("customer_id", self.customer_id.clone())]
    }
}

/// Partial update; a field set to `None` is cleared server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerUpdateParams {
    customer_id: String,
    bags: ParamsBags,
}

impl CustomerUpdateParams {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            bags: ParamsBags::default(),
        }
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn name(&self) -> Result<Slot<String>, FieldError> {
        accessor::optional_nullable(&self.bags.body, "name")
    }

    pub fn set_name(&mut self, value: Option<String>) {
        accessor::set_nullable(&mut self.bags.body, "name", value);
    }

    pub fn phone_number(&self) -> Result<Slot<String>, FieldError> {
        accessor::optional_nullable(&self.bags.body, "phone_number")
    }

    pub fn set_phone_number(&mut self, value: Option<String>) {
        accessor::set_nullable(&mut self.bags.body, "phone_number", value);
    }
}

impl Validate for CustomerUpdateParams {
    fn validate(&self) -> Result<(), FieldError> {
        self.name()?;
        self.phone_number()?;
        Ok(())
    }
}

impl Params for CustomerUpdateParams {
    const METHOD: Method = Method::Patch;
    const PATH: &'static str = "/customers/{customer_id}";

    fn bags(&self) -> &ParamsBags {
        &self.bags
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("customer_id", self.customer_id.clone())]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerListParams {
    bags: ParamsBags,
}

impl CustomerListParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by exact email address.
    pub fn email(&self) -> Result<Option<String>, FieldError> {
        accessor::optional(&self.bags.query, "email")
    }

    pub fn set_email(&mut self, value: Option<String>) {
        accessor::set_omittable(&mut self.bags.query, "email", value);
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

impl Params for CustomerListParams {
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/customers";

    fn bags(&self) -> &ParamsBags {
        &self.bags
    }
}
