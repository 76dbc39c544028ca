//! Error taxonomy shared by models, parameters and client options.
//!
//! Field errors are raised lazily: only the accessor (or `validate()`) that
//! touches a malformed field reports it, and the error carries the wire key
//! path of that field.

use thiserror::Error;

/// A failure reading one field out of a [`RawBag`](crate::RawBag).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The key of a required field is absent from the bag.
    #[error("required field `{key}` is missing")]
    MissingRequiredField { key: String },
    /// The key is present with an explicit null, but the field is not nullable.
    #[error("field `{key}` is null but is not nullable")]
    NullNotAllowed { key: String },
    /// The stored value does not decode into the field's declared type.
    #[error("field `{key}` holds invalid data: {reason}")]
    InvalidData { key: String, reason: String },
}

impl FieldError {
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingRequiredField { key: key.into() }
    }

    pub fn null_not_allowed(key: impl Into<String>) -> Self {
        Self::NullNotAllowed { key: key.into() }
    }

    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidData {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Wire key path of the failing field (`""` when raised outside a field).
    pub fn key(&self) -> &str {
        match self {
            Self::MissingRequiredField { key }
            | Self::NullNotAllowed { key }
            | Self::InvalidData { key, .. } => key,
        }
    }

    /// `NullNotAllowed` is a specialisation of invalid data.
    pub fn is_invalid_data(&self) -> bool {
        matches!(self, Self::InvalidData { .. } | Self::NullNotAllowed { .. })
    }

    /// Re-roots the error under `parent`, e.g. `country` within `billing`
    /// becomes `billing.country`.
    pub fn within(self, parent: &str) -> Self {
        let join = |key: String| {
            if key.is_empty() {
                parent.to_string()
            } else if key.starts_with('[') {
                format!("{parent}{key}")
            } else {
                format!("{parent}.{key}")
            }
        };
        match self {
            Self::MissingRequiredField { key } => Self::MissingRequiredField { key: join(key) },
            Self::NullNotAllowed { key } => Self::NullNotAllowed { key: join(key) },
            Self::InvalidData { key, reason } => Self::InvalidData {
                key: join(key),
                reason,
            },
        }
    }
}

/// A failure assembling the pieces of an outgoing request.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("path template `{template}` has no value for `{{{name}}}`")]
    MissingPathParam { template: String, name: String },
    #[error("path parameter `{name}` cannot be the dot segment `{value}`")]
    DotSegmentPathParam { name: String, value: String },
    #[error("invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// A failure building [`ClientOptions`](crate::ClientOptions).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base url `{value}`: {reason}")]
    InvalidBaseUrl {
        value: String,
        reason: String,
        #[source]
        source: Option<url::ParseError>,
    },
    #[error("unknown environment `{0}` (expected `live_mode` or `test_mode`)")]
    UnknownEnvironment(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_builds_dotted_paths() {
        let err = FieldError::missing("country").within("billing");
        assert_eq!(err.key(), "billing.country");

        let err = FieldError::invalid("", "bad").within("status");
        assert_eq!(err.key(), "status");

        let err = FieldError::null_not_allowed("[2].amount").within("items");
        assert_eq!(err.key(), "items[2].amount");
    }

    #[test]
    fn null_not_allowed_counts_as_invalid_data() {
        assert!(FieldError::null_not_allowed("a").is_invalid_data());
        assert!(FieldError::invalid("a", "x").is_invalid_data());
        assert!(!FieldError::missing("a").is_invalid_data());
    }

    #[test]
    fn display_names_the_field() {
        assert_eq!(
            FieldError::missing("customer_id").to_string(),
            "required field `customer_id` is missing"
        );
        let err = RequestError::MissingPathParam {
            template: "/customers/{customer_id}".into(),
            name: "customer_id".into(),
        };
        assert_eq!(
            err.to_string(),
            "path template `/customers/{customer_id}` has no value for `{customer_id}`"
        );
    }
}
