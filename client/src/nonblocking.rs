//! Async client over `reqwest`.
//!
//! # Design
//! The client owns one `reqwest::Client`, acquired in the constructor and
//! released when the last clone is dropped, including on error paths.
//! `reqwest::Client` is reference counted and its connection pool is safe
//! for concurrent use, so clones share one pool and concurrent calls on the
//! same `AsyncKvkClient` are fine. There is no timeout or cancellation beyond
//! dropping the returned future.

use kvk_core::{
    BasisProfileResource, Environment, HttpMethod, HttpRequest, KvkApi, KvkError, SearchFilters,
};
use reqwest::{Method, Response};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::Result;

/// Async KVK client.
///
/// ```no_run
/// use kvk_client::{AsyncKvkClient, Environment, SearchFilters};
///
/// # async fn example() -> kvk_client::Result<()> {
/// let kvk = AsyncKvkClient::from_env(Environment::Test)?;
/// let filters = SearchFilters::new().trade_name("Acme").city("Amsterdam");
/// let response = kvk.search_companies(&filters).await?;
/// println!("{}", response.text().await?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AsyncKvkClient {
    api: KvkApi,
    http: reqwest::Client,
}

impl AsyncKvkClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.danger_accept_invalid_certs {
            warn!("TLS certificate verification is disabled for the async KVK client");
        }
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .danger_accept_invalid_certs(config.danger_accept_invalid_certs)
            .build()?;

        Ok(Self {
            api: KvkApi::new(config.credentials),
            http,
        })
    }

    /// Resolve configuration from `.env` and the process environment.
    pub fn from_env(environment: Environment) -> Result<Self> {
        Self::new(ClientConfig::from_env(environment)?)
    }

    pub fn api(&self) -> &KvkApi {
        &self.api
    }

    pub async fn get_basis_profile(
        &self,
        kvk_number: &str,
        subresource: Option<BasisProfileResource>,
        include_geo_data: bool,
    ) -> Result<Response> {
        let request = self
            .api
            .build_basis_profile(kvk_number, subresource, include_geo_data)?;
        self.execute(request).await
    }

    pub async fn get_branch_profile(&self, establishment_number: &str) -> Result<Response> {
        let request = self.api.build_branch_profile(establishment_number)?;
        self.execute(request).await
    }

    pub async fn get_naming(&self, kvk_number: &str) -> Result<Response> {
        let request = self.api.build_naming(kvk_number)?;
        self.execute(request).await
    }

    /// Fails with a validation error, without any network call, if the
    /// filters are inconsistent.
    pub async fn search_companies(&self, filters: &SearchFilters) -> Result<Response> {
        let request = self.api.build_search_companies(filters)?;
        self.execute(request).await
    }

    /// Execute a prebuilt request and return the raw response.
    pub async fn execute(&self, request: HttpRequest) -> Result<Response> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            other => return Err(KvkError::UnsupportedMethod(other).into()),
        };
        debug!(method = %request.method, url = %request.url, "sending KVK request");

        let mut builder = self.http.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        debug!(status = response.status().as_u16(), "KVK response received");
        Ok(response)
    }
}
