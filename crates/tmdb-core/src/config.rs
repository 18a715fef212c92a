//! Configuration structures for TMDB clients.
//!
//! [`TmdbConfig`] carries the client construction parameters: credentials, base
//! URL, timeout and user agent. It is validated with `validator` on construction
//! and again before a client is built.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Base URL of the v3 API.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Base URL of the v4 API.
pub const V4_BASE_URL: &str = "https://api.themoviedb.org/4";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("tmdb-core/", env!("CARGO_PKG_VERSION"));

/// Authentication scheme selected by the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// `api_key` query parameter (plus bearer header when configured)
    V3,
    /// Bearer token only; `api_key` is never sent
    V4,
}

impl ApiVersion {
    /// Detect the version from a base URL: paths starting with `/4` are v4.
    #[must_use]
    pub fn detect(base_url: &Url) -> Self {
        if base_url.path().starts_with("/4") {
            Self::V4
        } else {
            Self::V3
        }
    }
}

/// Configuration for a TMDB client instance.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct TmdbConfig {
    /// v3 API key
    #[validate(length(min = 1))]
    #[serde(skip_serializing)]
    pub api_key: String,

    /// v4 read access token, sent as `Authorization: Bearer`
    #[serde(default, skip_serializing)]
    pub bearer_token: Option<String>,

    /// API base URL; a path starting with `/4` selects v4 authentication
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Optional `User-Agent` override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl TmdbConfig {
    /// Create a configuration for the v3 API with the given key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let config = Self {
            api_key: api_key.into(),
            bearer_token: None,
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: None,
        };

        config.validate_config()?;
        Ok(config)
    }

    /// Set the bearer token.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Set the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The configured user agent, or [`DEFAULT_USER_AGENT`].
    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Parse the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| Error::ConfigError(format!("Invalid base URL: {e}")))
    }

    /// Authentication scheme implied by the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn api_version(&self) -> Result<ApiVersion> {
        self.parse_base_url().map(|url| ApiVersion::detect(&url))
    }

    /// Run field validation plus the cross-field rules.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if a field is out of range or a v4 base URL
    /// is configured without a bearer token.
    pub fn validate_config(&self) -> Result<()> {
        self.validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;

        if self.api_version()? == ApiVersion::V4
            && self.bearer_token.as_deref().map_or(true, str::is_empty)
        {
            return Err(Error::ConfigError(
                "a bearer token is required for the v4 API".to_string(),
            ));
        }

        Ok(())
    }
}

impl fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbConfig")
            .field("api_key", &"[REDACTED]")
            .field(
                "bearer_token",
                &self.bearer_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
