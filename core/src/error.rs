//! Error types for the KVK request layer.
//!
//! # Design
//! Only failures the core itself can detect live here: missing configuration,
//! invalid search filter combinations, and misuse of the request builder.
//! Transport failures and non-2xx statuses never pass through this type; the
//! adapters in `kvk-client` hand them to the caller untouched.

use thiserror::Error;

use crate::http::HttpMethod;

/// Convenience alias for results produced by the core.
pub type Result<T> = std::result::Result<T, KvkError>;

/// Errors detected locally, before any request reaches the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KvkError {
    /// A required configuration value is missing or unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The caller supplied an invalid parameter combination.
    #[error("validation error: {0}")]
    Validation(String),

    /// The request builder was asked for a method it does not send.
    #[error("unsupported method {0}: only GET and POST are supported")]
    UnsupportedMethod(HttpMethod),
}
