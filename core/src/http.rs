//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe an outgoing request as plain data. The core builds
//! `HttpRequest` values without touching the network; the transport adapters
//! in `kvk-client` execute them and hand the raw response back to the caller.
//! Responses are deliberately not modelled here because the core never
//! inspects them.

use std::fmt;

/// HTTP method for a request.
///
/// The KVK API is read-only, so only `Get` and `Post` are ever sent; the
/// request builder rejects the rest with `KvkError::UnsupportedMethod`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `url` is absolute and already carries the query string. `body` is only
/// set for POST requests and holds form-encoded parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
