//! URL composition and parameter filtering shared by every operation.
//!
//! # Design
//! `build_request` is the one place where credentials, resource paths and
//! parameters meet. Both transport adapters consume its output, so the
//! blocking and async clients cannot disagree on what goes over the wire.

use std::fmt;

use url::Url;

use crate::credentials::Credentials;
use crate::error::{KvkError, Result};
use crate::http::{HttpMethod, HttpRequest};
use crate::paths::Resource;

pub const APIKEY_HEADER: &str = "apikey";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A scalar parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl ParamValue {
    /// Empty strings are treated the same as absent values.
    fn is_blank(&self) -> bool {
        matches!(self, ParamValue::Str(s) if s.is_empty())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{n}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// Ordered request parameters whose values may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    entries: Vec<(String, Option<ParamValue>)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, keeping insertion order.
    pub fn push<V: Into<ParamValue>>(&mut self, name: impl Into<String>, value: Option<V>) {
        self.entries.push((name.into(), value.map(Into::into)));
    }

    /// Builder-style variant of [`push`](Self::push).
    pub fn with<V: Into<ParamValue>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.push(name, value);
        self
    }

    /// Drop every entry whose value is absent or an empty string.
    pub fn present(self) -> Self {
        let entries = self
            .entries
            .into_iter()
            .filter(|(_, v)| v.as_ref().is_some_and(|v| !v.is_blank()))
            .collect();
        Self { entries }
    }

    /// Name/value pairs of the present entries, rendered for the wire.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| match v {
                Some(v) if !v.is_blank() => Some((k.clone(), v.to_string())),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compose an [`HttpRequest`] for `resource` below the credentials' host and
/// API version.
///
/// Absent entries in `segments` are skipped, which is how optional
/// sub-resources are appended only when requested. Each present segment is
/// percent-encoded as a single path segment; the API version and resource
/// path may span several segments.
pub fn build_request(
    credentials: &Credentials,
    method: HttpMethod,
    resource: Resource,
    segments: &[Option<&str>],
    params: RequestParams,
) -> Result<HttpRequest> {
    if !matches!(method, HttpMethod::Get | HttpMethod::Post) {
        return Err(KvkError::UnsupportedMethod(method));
    }

    let mut url = Url::parse(credentials.host()).map_err(|e| {
        KvkError::Configuration(format!("invalid host {:?}: {e}", credentials.host()))
    })?;

    {
        let mut path = url.path_segments_mut().map_err(|()| {
            KvkError::Configuration(format!(
                "host {:?} cannot be used as a base URL",
                credentials.host()
            ))
        })?;
        path.pop_if_empty();
        path.extend(credentials.api_version().split('/').filter(|s| !s.is_empty()));
        path.extend(resource.path().split('/'));
        path.extend(segments.iter().flatten());
    }

    let pairs = params.pairs();
    let mut headers = vec![(APIKEY_HEADER.to_string(), credentials.api_key().to_string())];
    let mut body = None;

    match method {
        HttpMethod::Get => {
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(&pairs);
            }
        }
        _ => {
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&pairs)
                .finish();
            headers.push(("content-type".to_string(), FORM_CONTENT_TYPE.to_string()));
            body = Some(encoded);
        }
    }

    Ok(HttpRequest {
        method,
        url: url.into(),
        headers,
        body,
    })
}
