/*
[INPUT]:  Error sources (validation, HTTP transport, API responses)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the futures testnet adapter.
///
/// Three categories matter to callers: `Validation` (bad input, never
/// reached the network), `Api` (the exchange rejected a well-formed signed
/// request), and `Http` (the request never got a meaningful response).
/// None of them are retried internally.
#[derive(Error, Debug)]
pub enum FuturesError {
    /// Input rejected before any network activity
    #[error("{0}")]
    Validation(String),

    /// API returned an error response
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    /// Transport-level failure (connect, timeout, DNS, TLS)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Missing credentials or bad client setup
    #[error("Configuration error: {0}")]
    Config(String),

    /// Body did not match the expected response shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl FuturesError {
    /// True when the input never left the process.
    pub fn is_validation(&self) -> bool {
        matches!(self, FuturesError::Validation(_))
    }

    /// True when the exchange answered with an application-level error.
    pub fn is_api(&self) -> bool {
        matches!(self, FuturesError::Api { .. })
    }

    /// True when the request never got a meaningful response.
    pub fn is_transport(&self) -> bool {
        matches!(self, FuturesError::Http(_))
    }

    /// Create an API error from an HTTP status and body text.
    ///
    /// Used when the testnet answers with an error status but no structured
    /// `{code, msg}` body to lift the real error code from.
    pub fn from_status(status: StatusCode, body: impl Into<String>) -> Self {
        FuturesError::Api {
            code: i64::from(status.as_u16()),
            message: body.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        FuturesError::Validation(message.into())
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, FuturesError>;
