//! Stateless request construction for the four KVK lookup operations.
//!
//! # Design
//! `KvkApi` holds only the resolved credentials and carries no mutable state
//! between calls. Each operation has a `build_*` method that validates its
//! arguments and produces an `HttpRequest`. Executing the request and
//! interpreting the response are left to the transport adapters and the
//! caller.

use crate::credentials::Credentials;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::paths::{BasisProfileResource, Resource};
use crate::request::{build_request, RequestParams};
use crate::search::SearchFilters;

/// Builds `HttpRequest` values for the KVK API without touching the network.
#[derive(Debug, Clone)]
pub struct KvkApi {
    credentials: Credentials,
}

impl KvkApi {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Basis profile of a registration, optionally narrowed to a
    /// sub-resource. `geoData` is always sent.
    pub fn build_basis_profile(
        &self,
        kvk_number: &str,
        subresource: Option<BasisProfileResource>,
        include_geo_data: bool,
    ) -> Result<HttpRequest> {
        let geo_data = if include_geo_data { "True" } else { "False" };
        build_request(
            &self.credentials,
            HttpMethod::Get,
            Resource::BasisProfile,
            &[Some(kvk_number), subresource.map(BasisProfileResource::path)],
            RequestParams::new().with("geoData", Some(geo_data)),
        )
    }

    pub fn build_branch_profile(&self, establishment_number: &str) -> Result<HttpRequest> {
        build_request(
            &self.credentials,
            HttpMethod::Get,
            Resource::BranchProfile,
            &[Some(establishment_number)],
            RequestParams::new(),
        )
    }

    pub fn build_naming(&self, kvk_number: &str) -> Result<HttpRequest> {
        build_request(
            &self.credentials,
            HttpMethod::Get,
            Resource::Naming,
            &[Some(kvk_number)],
            RequestParams::new(),
        )
    }

    /// Company search. Fails with `KvkError::Validation` before building
    /// anything if the filters are inconsistent.
    pub fn build_search_companies(&self, filters: &SearchFilters) -> Result<HttpRequest> {
        filters.validate()?;
        build_request(
            &self.credentials,
            HttpMethod::Get,
            Resource::Search,
            &[],
            filters.to_params(),
        )
    }
}
