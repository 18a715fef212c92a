//! Error types for TMDB operations.
//!
//! Every fallible call in the workspace returns [`Error`]. The variants follow the
//! lifecycle of a request: local validation and encoding failures happen before any
//! network I/O, transport failures happen during the exchange, and API and decoding
//! failures describe what the remote side sent back.

use serde::Deserialize;
use thiserror::Error;

/// Main error type for TMDB operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A builder precondition failed before any request was made
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Option record or request body could not be encoded
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// The HTTP exchange exceeded the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The HTTP exchange failed (connection refused, DNS, TLS, ...)
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The API answered with a non-2xx status
    #[error("TMDB API error (HTTP {status}): {message}")]
    ApiError {
        /// HTTP status code of the response
        status: u16,
        /// TMDB `status_code` from the error body, when it could be decoded
        code: Option<i64>,
        /// TMDB `status_message`, or the raw status and body on fallback
        message: String,
    },

    /// A 2xx body did not decode into the expected type
    #[error("Failed to decode response into {type_name}: {message}; body: {body}")]
    DecodingError {
        /// Name of the target type
        type_name: String,
        /// Decoder error message
        message: String,
        /// Raw response body
        body: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The request URL could not be built
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// An identifier could not be parsed
    #[error("Invalid identifier: {0}")]
    InvalidId(String),
}

/// Specialized result type for TMDB operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error body returned by the TMDB API on failures.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiErrorResponse {
    /// TMDB-specific status code (not the HTTP status)
    #[serde(default)]
    pub status_code: Option<i64>,
    /// Human-readable message
    #[serde(default)]
    pub status_message: String,
    /// Present (and false) on most error bodies
    #[serde(default)]
    pub success: Option<bool>,
}

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EncodingError(_) => "ENCODING_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::TransportError(_) => "TRANSPORT_ERROR",
            Self::ApiError { .. } => "API_ERROR",
            Self::DecodingError { .. } => "DECODING_ERROR",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::InvalidId(_) => "INVALID_ID",
        }
    }

    /// Returns true if the request failed because it timed out.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// Returns true for failures of the HTTP exchange itself (timeouts included).
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::TransportError(_))
    }

    /// HTTP status of an API error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build an [`Error::ApiError`] from a non-2xx response.
    ///
    /// The body is decoded as [`ApiErrorResponse`] first. When that fails, or the
    /// message is empty, the raw status and body are embedded in the message.
    #[must_use]
    pub fn from_api_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ApiErrorResponse>(body) {
            Ok(parsed) if !parsed.status_message.is_empty() => Self::ApiError {
                status,
                code: parsed.status_code,
                message: parsed.status_message,
            },
            _ => {
                tracing::warn!(status, "TMDB error body did not match the expected shape");
                Self::ApiError {
                    status,
                    code: None,
                    message: format!("unexpected status code {status} with body: {body}"),
                }
            }
        }
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::TransportError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::EncodingError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}
