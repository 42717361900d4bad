//! I/O-free request layer for the KVK company-registry API.
//!
//! # Overview
//! Builds `HttpRequest` values for the four read-only KVK lookups without
//! touching the network (host-does-IO pattern). The blocking and async
//! clients in `kvk-client` both execute requests produced here, so path
//! assembly, parameter filtering and search validation exist exactly once.
//!
//! # Design
//! - `KvkApi` is stateless apart from its immutable `Credentials`.
//! - Resource paths are closed enums; an unknown resource cannot be named.
//! - Parameters with absent or empty values never reach the wire.
//! - Response bodies are not parsed; callers decode them themselves.

pub mod client;
pub mod credentials;
pub mod error;
pub mod http;
pub mod paths;
pub mod request;
pub mod search;

pub use client::KvkApi;
pub use credentials::{Credentials, Environment};
pub use error::{KvkError, Result};
pub use http::{HttpMethod, HttpRequest};
pub use paths::{BasisProfileResource, Resource};
pub use request::{build_request, ParamValue, RequestParams, APIKEY_HEADER};
pub use search::{SearchFilters, SearchType};
