//! Blocking client over `ureq`.
//!
//! Each call occupies the calling thread for the full round trip. The agent
//! is configured to return 4xx/5xx responses as data rather than errors, so
//! status inspection stays with the caller.

use std::fmt;

use kvk_core::{
    BasisProfileResource, Environment, HttpMethod, HttpRequest, KvkApi, KvkError, SearchFilters,
};
use tracing::{debug, warn};
use ureq::http::Response;
use ureq::tls::TlsConfig;
use ureq::{Agent, Body};

use crate::config::ClientConfig;
use crate::error::Result;

/// Blocking KVK client.
///
/// ```no_run
/// use kvk_client::{Environment, KvkClient};
///
/// # fn example() -> kvk_client::Result<()> {
/// let kvk = KvkClient::from_env(Environment::Test)?;
/// let response = kvk.get_basis_profile("68750110", None, false)?;
/// println!("{}", response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct KvkClient {
    api: KvkApi,
    agent: Agent,
    user_agent: String,
}

impl KvkClient {
    pub fn new(config: ClientConfig) -> Self {
        if config.danger_accept_invalid_certs {
            warn!("TLS certificate verification is disabled for the blocking KVK client");
        }
        let tls = TlsConfig::builder()
            .disable_verification(config.danger_accept_invalid_certs)
            .build();
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .tls_config(tls)
            .build()
            .new_agent();

        Self {
            api: KvkApi::new(config.credentials),
            agent,
            user_agent: config.user_agent,
        }
    }

    /// Resolve configuration from `.env` and the process environment.
    pub fn from_env(environment: Environment) -> Result<Self> {
        Ok(Self::new(ClientConfig::from_env(environment)?))
    }

    pub fn api(&self) -> &KvkApi {
        &self.api
    }

    pub fn get_basis_profile(
        &self,
        kvk_number: &str,
        subresource: Option<BasisProfileResource>,
        include_geo_data: bool,
    ) -> Result<Response<Body>> {
        let request = self
            .api
            .build_basis_profile(kvk_number, subresource, include_geo_data)?;
        self.execute(request)
    }

    pub fn get_branch_profile(&self, establishment_number: &str) -> Result<Response<Body>> {
        let request = self.api.build_branch_profile(establishment_number)?;
        self.execute(request)
    }

    pub fn get_naming(&self, kvk_number: &str) -> Result<Response<Body>> {
        let request = self.api.build_naming(kvk_number)?;
        self.execute(request)
    }

    /// Fails with a validation error, without any network call, if the
    /// filters are inconsistent.
    pub fn search_companies(&self, filters: &SearchFilters) -> Result<Response<Body>> {
        let request = self.api.build_search_companies(filters)?;
        self.execute(request)
    }

    /// Execute a prebuilt request and return the raw response.
    pub fn execute(&self, request: HttpRequest) -> Result<Response<Body>> {
        debug!(method = %request.method, url = %request.url, "sending KVK request");

        let response = match request.method {
            HttpMethod::Get => {
                let mut builder = self
                    .agent
                    .get(&request.url)
                    .header("user-agent", self.user_agent.as_str());
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()?
            }
            HttpMethod::Post => {
                let mut builder = self
                    .agent
                    .post(&request.url)
                    .header("user-agent", self.user_agent.as_str());
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match request.body {
                    Some(body) => builder.send(body.as_bytes())?,
                    None => builder.send_empty()?,
                }
            }
            other => return Err(KvkError::UnsupportedMethod(other).into()),
        };

        debug!(status = response.status().as_u16(), "KVK response received");
        Ok(response)
    }
}

impl fmt::Debug for KvkClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KvkClient")
            .field("api", &self.api)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}
