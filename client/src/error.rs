//! Error type shared by the blocking and async clients.
//!
//! # Design
//! Local failures come from `kvk-core` and are wrapped as-is. Transport
//! failures keep the transport's own error type so callers can inspect them
//! with the transport's API. Non-2xx statuses are not errors at all: the raw
//! response is returned and the caller checks the status.

use kvk_core::KvkError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Configuration, validation or request-building failure detected
    /// before any network call.
    #[error(transparent)]
    Kvk(#[from] KvkError),

    /// Failure reported by the blocking transport.
    #[error("blocking transport error: {0}")]
    Blocking(#[from] ureq::Error),

    /// Failure reported by the async transport.
    #[error("async transport error: {0}")]
    Async(#[from] reqwest::Error),
}

impl Error {
    /// Returns `true` if the request never left the process because of
    /// invalid search filters.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Kvk(KvkError::Validation(_)))
    }

    /// Returns `true` if the client could not be configured.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Kvk(KvkError::Configuration(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_are_transparent() {
        let err: Error = KvkError::Validation("bad filters".to_string()).into();
        assert_eq!(err.to_string(), "validation error: bad filters");
        assert!(err.is_validation());
        assert!(!err.is_configuration());
    }

    #[test]
    fn configuration_errors_are_classified() {
        let err: Error = KvkError::Configuration("KVK_HOST is not set".to_string()).into();
        assert!(err.is_configuration());
    }
}
