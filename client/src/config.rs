//! Client configuration options.

use kvk_core::{Credentials, Environment};

use crate::error::Result;

/// Configuration shared by [`KvkClient`](crate::KvkClient) and
/// [`AsyncKvkClient`](crate::AsyncKvkClient).
///
/// # Example
///
/// ```
/// use kvk_client::{ClientConfig, Credentials};
///
/// let credentials = Credentials::new("https://api.kvk.nl/api", "v1", "my-key").unwrap();
/// let config = ClientConfig::new(credentials).with_user_agent("my-app/1.0");
/// assert!(!config.danger_accept_invalid_certs);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Resolved host, API version and API key.
    pub credentials: Credentials,
    /// User-Agent header value.
    pub user_agent: String,
    /// Skip TLS certificate verification. Off unless explicitly enabled.
    pub danger_accept_invalid_certs: bool,
}

impl ClientConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            user_agent: format!("kvk-client/{}", env!("CARGO_PKG_VERSION")),
            danger_accept_invalid_certs: false,
        }
    }

    /// Load `.env` if present, then resolve credentials for `environment`
    /// from the process environment.
    pub fn from_env(environment: Environment) -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "failed to load .env file");
            }
        }
        Ok(Self::new(Credentials::from_env(environment)?))
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Disable TLS certificate verification.
    ///
    /// Only meant for test environments behind self-signed certificates.
    pub fn with_danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.danger_accept_invalid_certs = accept;
        self
    }
}
