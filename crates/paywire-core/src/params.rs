//! Request parameter objects.
//!
//! A parameter struct owns its path fields directly and keeps everything
//! else in three bags: query, headers and body. The [`Params`] trait turns
//! those into the pieces the transport needs.

use serde_json::Value;
use url::Url;

use crate::config::ClientOptions;
use crate::error::RequestError;
use crate::raw::RawBag;
use crate::wire::scalar_to_string;
use crate::{path, query};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    pub fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Patch | Self::Put)
    }
}

/// The raw storage of one parameter object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamsBags {
    pub query: RawBag,
    pub headers: RawBag,
    pub body: RawBag,
}

/// Everything a transport needs to send one request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestParts {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

pub trait Params {
    const METHOD: Method;
    /// Path template relative to the base url, e.g. `/refunds/{refund_id}`.
    const PATH: &'static str;

    fn bags(&self) -> &ParamsBags;

    /// Values for the placeholders in [`PATH`](Self::PATH).
    fn path_params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn raw_query(&self) -> &RawBag {
        &self.bags().query
    }

    fn raw_headers(&self) -> &RawBag {
        &self.bags().headers
    }

    fn raw_body(&self) -> Option<&RawBag> {
        Self::METHOD.has_body().then(|| &self.bags().body)
    }

    /// Base url + rendered path + query string. No `?` when nothing is set.
    fn url(&self, options: &ClientOptions) -> Result<Url, RequestError> {
        let path = path::render(Self::PATH, &self.path_params())?;
        let mut url = Url::parse(&format!("{}{}", options.base_url(), path))?;
        url.set_query(query::render(self.raw_query()).as_deref());
        #[cfg(feature = "tracing")]
        tracing::trace!(method = Self::METHOD.as_str(), url = %url, "built request url");
        Ok(url)
    }

    /// JSON body; explicit nulls are kept.
    fn body(&self) -> Option<Value> {
        self.raw_body().map(RawBag::to_wire_value)
    }

    /// Header pairs in bag order. Null headers are dropped; arrays and
    /// objects are sent as JSON text.
    fn headers(&self) -> Vec<(String, String)> {
        self.raw_headers()
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(name, value)| {
                let text = scalar_to_string(value).unwrap_or_else(|| value.to_string());
                (name.to_string(), text)
            })
            .collect()
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(path = Self::PATH)))]
    fn request(&self, options: &ClientOptions) -> Result<RequestParts, RequestError> {
        Ok(RequestParts {
            method: Self::METHOD,
            url: self.url(options)?,
            headers: self.headers(),
            body: self.body(),
        })
    }
}
