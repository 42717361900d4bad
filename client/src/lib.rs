//! Blocking and async clients for the KVK company-registry API.
//!
//! # Overview
//! Both clients wrap the same [`KvkApi`] request builder from `kvk-core` and
//! differ only in how they execute the resulting `HttpRequest`:
//!
//! - [`KvkClient`] runs requests on the calling thread through `ureq`.
//! - [`AsyncKvkClient`] awaits requests through a shared `reqwest` client.
//!
//! Responses are returned raw. A 404 or 401 from the registry is a normal
//! response, not an error; only local failures and transport failures are
//! reported through [`Error`].
//!
//! # Configuration
//! [`ClientConfig::from_env`] loads `.env` and reads `KVK_HOST`,
//! `KVK_API_VERSION`, `KVK_APIKEY_PROD` and, in [`Environment::Test`],
//! `KVK_APIKEY_TEST`. TLS certificate verification stays on unless
//! [`ClientConfig::with_danger_accept_invalid_certs`] is called.

pub mod blocking;
pub mod config;
pub mod error;
pub mod nonblocking;

pub use blocking::KvkClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use nonblocking::AsyncKvkClient;

pub use kvk_core::{
    BasisProfileResource, Credentials, Environment, HttpMethod, HttpRequest, KvkApi, KvkError,
    Resource, SearchFilters, SearchType,
};
