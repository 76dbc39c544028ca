//! Client options: where requests are sent.

use std::str::FromStr;

use url::Url;

use crate::error::ConfigError;

pub const BASE_URL_ENV: &str = "PAYWIRE_BASE_URL";
pub const ENVIRONMENT_ENV: &str = "PAYWIRE_ENVIRONMENT";

/// Hosted API environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    LiveMode,
    TestMode,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Self::LiveMode => "https://live.example.com",
            Self::TestMode => "https://test.example.com",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "live_mode" | "live" => Ok(Self::LiveMode),
            "test_mode" | "test" => Ok(Self::TestMode),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Absolute url without a trailing slash.
    base_url: String,
}

impl ClientOptions {
    pub fn new(environment: Environment) -> Self {
        Self {
            base_url: environment.base_url().to_string(),
        }
    }

    /// The url must be absolute and hierarchical, with no query or
    /// fragment, since request paths are appended to it.
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String, source| ConfigError::InvalidBaseUrl {
            value: base_url.to_string(),
            reason,
            source,
        };
        let url = Url::parse(base_url).map_err(|err| invalid(err.to_string(), Some(err)))?;
        if url.cannot_be_a_base() {
            return Err(invalid("not a hierarchical url".to_string(), None));
        }
        if url.query().is_some() {
            return Err(invalid("must not carry a query".to_string(), None));
        }
        if url.fragment().is_some() {
            return Err(invalid("must not carry a fragment".to_string(), None));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Reads `PAYWIRE_BASE_URL`, falling back to `PAYWIRE_ENVIRONMENT`, then
    /// live mode. A `.env` file in the working directory is loaded first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same resolution as [`from_env`](Self::from_env) over any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            return Self::with_base_url(url.trim());
        }
        match lookup(ENVIRONMENT_ENV).filter(|v| !v.trim().is_empty()) {
            Some(name) => Ok(Self::new(name.parse()?)),
            None => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self::new(Environment::default())
    }
}
