//! Blocking HTTP transport for the LedgerPay API
//!
//! Thin wrapper around `reqwest::blocking` that handles:
//! - Bearer authentication from the configured API key
//! - Form-encoded request parameters on the query string
//! - JSON response decoding
//! - The `{"error": {...}}` envelope on non-2xx responses

use crate::config::ClientConfig;
use crate::error::{Error, ErrorEnvelope, Result};
use crate::form::FormValues;
use reqwest::blocking;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Header used to pin requests to an API version
const VERSION_HEADER: &str = "Ledgerpay-Version";

/// Blocking API client
///
/// Cheap to clone; clones share the underlying connection pool. Every
/// resource `list`/`search` function captures a clone inside its query
/// closure.
#[derive(Clone)]
pub struct Client {
    http: blocking::Client,
    config: ClientConfig,
}

impl Client {
    /// Create a client for the given API key with default configuration
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let http = blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { http, config }
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Make a GET request with form parameters on the query string and
    /// decode the JSON response
    pub fn get_form<T: DeserializeOwned>(&self, path: &str, form: &FormValues) -> Result<T> {
        let url = self.build_url(path, form);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .headers(self.version_headers())
            .send()?;

        let status = response.status();
        if status.is_success() {
            debug!("Request succeeded: GET {}", url);
            return Ok(response.json()?);
        }

        let body = response.text().unwrap_or_default();
        warn!("Request failed: GET {} -> {}", url, status.as_u16());

        // Non-2xx bodies normally carry a structured error envelope;
        // anything undecodable falls back to the raw status error.
        match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => Err(Error::Api(envelope.error)),
            Err(_) => Err(Error::http_status(status.as_u16(), body)),
        }
    }

    fn version_headers(&self) -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(version) = &self.config.api_version {
            if let Ok(value) = reqwest::header::HeaderValue::from_str(version) {
                headers.insert(VERSION_HEADER, value);
            }
        }
        headers
    }

    /// Build the full URL from a path and form values
    pub(crate) fn build_url(&self, path: &str, form: &FormValues) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        let url = format!("{base}/{path}");

        if form.is_empty() {
            url
        } else {
            format!("{url}?{}", form.encode())
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .field("api_version", &self.config.api_version)
            .finish_non_exhaustive()
    }
}
