//! Client configuration
//!
//! Holds the API key, base URL, and request-level settings shared by every
//! call the client makes.

use std::time::Duration;

/// Default base URL for the LedgerPay API
pub const DEFAULT_BASE_URL: &str = "https://api.ledgerpay.com/v1";

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Secret API key, sent as a bearer token on every request
    pub api_key: String,
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Optional API version pin, sent as the `Ledgerpay-Version` header
    pub api_version: Option<String>,
}

impl ClientConfig {
    /// Create a config with the default base URL and timeouts
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("ledgerpay-rust/{}", env!("CARGO_PKG_VERSION")),
            api_version: None,
        }
    }

    /// Create a new config builder
    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(api_key),
        }
    }
}

/// Builder for client config
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Pin requests to a specific API version
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = Some(version.into());
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
