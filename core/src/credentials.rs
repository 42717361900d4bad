//! Credential resolution.
//!
//! # Design
//! `Credentials::resolve` takes a lookup function instead of reading the
//! process environment directly, so the resolution rules can be exercised
//! without mutating global state. `from_env` is the thin wrapper callers
//! normally use.

use std::fmt;

use crate::error::{KvkError, Result};

pub const HOST_VAR: &str = "KVK_HOST";
pub const API_VERSION_VAR: &str = "KVK_API_VERSION";
pub const APIKEY_PROD_VAR: &str = "KVK_APIKEY_PROD";
pub const APIKEY_TEST_VAR: &str = "KVK_APIKEY_TEST";

/// Which KVK environment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    /// The KVK test environment: test API key, `test/` version prefix.
    Test,
}

/// Host, API version and API key for one client instance.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    host: String,
    api_version: String,
    api_key: String,
}

impl Credentials {
    /// Build credentials from explicit values. All three must be non-empty.
    pub fn new(
        host: impl Into<String>,
        api_version: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        let credentials = Self {
            host: host.into(),
            api_version: api_version.into(),
            api_key: api_key.into(),
        };
        if credentials.host.is_empty() {
            return Err(not_set(HOST_VAR));
        }
        if credentials.api_version.is_empty() {
            return Err(not_set(API_VERSION_VAR));
        }
        if credentials.api_key.is_empty() {
            return Err(not_set("API key"));
        }
        Ok(credentials)
    }

    /// Resolve credentials for `environment` using `lookup` as the
    /// configuration source. Empty values count as missing.
    ///
    /// The production key is required in both environments; in
    /// `Environment::Test` it is then replaced by the test key and the API
    /// version gets a `test/` prefix.
    pub fn resolve<F>(environment: Environment, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let host = get(HOST_VAR).ok_or_else(|| not_set(HOST_VAR))?;
        let mut api_version = get(API_VERSION_VAR).ok_or_else(|| not_set(API_VERSION_VAR))?;
        let mut api_key = get(APIKEY_PROD_VAR).ok_or_else(|| not_set(APIKEY_PROD_VAR))?;

        if environment == Environment::Test {
            api_key = get(APIKEY_TEST_VAR).ok_or_else(|| not_set(APIKEY_TEST_VAR))?;
            api_version = format!("test/{api_version}");
        }

        Ok(Self {
            host,
            api_version,
            api_key,
        })
    }

    /// Resolve credentials from the process environment.
    pub fn from_env(environment: Environment) -> Result<Self> {
        Self::resolve(environment, |name| std::env::var(name).ok())
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("api_version", &self.api_version)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

fn not_set(name: &str) -> KvkError {
    KvkError::Configuration(format!("{name} is not set"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    fn complete() -> Vec<(&'static str, &'static str)> {
        vec![
            (HOST_VAR, "https://api.kvk.nl/api"),
            (API_VERSION_VAR, "v1"),
            (APIKEY_PROD_VAR, "prod-key"),
            (APIKEY_TEST_VAR, "test-key"),
        ]
    }

    #[test]
    fn production_uses_prod_key_and_plain_version() {
        let creds = Credentials::resolve(Environment::Production, source(&complete())).unwrap();
        assert_eq!(creds.host(), "https://api.kvk.nl/api");
        assert_eq!(creds.api_version(), "v1");
        assert_eq!(creds.api_key(), "prod-key");
    }

    #[test]
    fn test_mode_uses_test_key_and_prefixed_version() {
        let creds = Credentials::resolve(Environment::Test, source(&complete())).unwrap();
        assert_eq!(creds.api_version(), "test/v1");
        assert_eq!(creds.api_key(), "test-key");
    }

    #[test]
    fn each_missing_value_is_a_configuration_error() {
        let cases = [
            (Environment::Production, HOST_VAR),
            (Environment::Production, API_VERSION_VAR),
            (Environment::Production, APIKEY_PROD_VAR),
            (Environment::Test, HOST_VAR),
            (Environment::Test, API_VERSION_VAR),
            (Environment::Test, APIKEY_PROD_VAR),
            (Environment::Test, APIKEY_TEST_VAR),
        ];
        for (environment, missing) in cases {
            let pairs: Vec<_> = complete().into_iter().filter(|(k, _)| *k != missing).collect();
            let err = Credentials::resolve(environment, source(&pairs)).unwrap_err();
            assert_eq!(
                err,
                KvkError::Configuration(format!("{missing} is not set")),
                "{environment:?} without {missing}"
            );
        }
    }

    #[test]
    fn production_does_not_need_test_key() {
        let pairs: Vec<_> = complete()
            .into_iter()
            .filter(|(k, _)| *k != APIKEY_TEST_VAR)
            .collect();
        assert!(Credentials::resolve(Environment::Production, source(&pairs)).is_ok());
    }

    #[test]
    fn empty_values_count_as_missing() {
        let mut pairs = complete();
        pairs.retain(|(k, _)| *k != HOST_VAR);
        pairs.push((HOST_VAR, ""));
        let err = Credentials::resolve(Environment::Production, source(&pairs)).unwrap_err();
        assert!(matches!(err, KvkError::Configuration(_)));
    }

    #[test]
    fn new_rejects_empty_fields() {
        assert!(Credentials::new("", "v1", "key").is_err());
        assert!(Credentials::new("http://h", "", "key").is_err());
        assert!(Credentials::new("http://h", "v1", "").is_err());
        assert!(Credentials::new("http://h", "v1", "key").is_ok());
    }

    #[test]
    fn debug_redacts_api_key() {
        let creds = Credentials::new("http://h", "v1", "secret-key").unwrap();
        let debug = format!("{creds:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }
}
