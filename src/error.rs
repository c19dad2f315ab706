//! Error types for the LedgerPay client
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use serde::Deserialize;
use thiserror::Error;

/// The main error type for the LedgerPay client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// The request never produced a usable response (connect, timeout,
    /// body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A non-2xx response whose body was not a decodable error envelope
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// A URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // API Errors
    // ============================================================================
    /// A structured error returned by the LedgerPay API itself
    /// (decoded from the `{"error": {...}}` envelope on non-2xx responses).
    #[error("API error: {0}")]
    Api(ApiError),

    // ============================================================================
    // Decode Errors
    // ============================================================================
    /// A response body failed to decode as JSON
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// A generic error with only a message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a generic error from a message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

/// An error payload returned by the LedgerPay API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    /// Error category reported by the server (e.g., "invalid_request_error")
    #[serde(rename = "type", default)]
    pub error_type: String,

    /// Machine-readable error code, when the server provides one
    #[serde(default)]
    pub code: Option<String>,

    /// Human-readable description of the failure
    #[serde(default)]
    pub message: String,

    /// The request parameter the error relates to, if any
    #[serde(default)]
    pub param: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if !self.error_type.is_empty() {
            write!(f, " (type: {})", self.error_type)?;
        }
        if let Some(code) = &self.code {
            write!(f, " (code: {code})")?;
        }
        Ok(())
    }
}

/// Wire shape of an API error response body.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ApiError,
}

/// Result type alias for the LedgerPay client
pub type Result<T> = std::result::Result<T, Error>;
