//! Filters for the company search resource.
//!
//! # Design
//! All filters are optional. Cross-field rules are checked by `validate`
//! before any request is built, so an invalid combination never reaches the
//! network. Empty strings are treated as not supplied, both by validation and
//! by parameter filtering.

use serde::Deserialize;

use crate::error::{KvkError, Result};
use crate::request::RequestParams;

pub const MIN_PAGE: u32 = 1;
pub const MAX_PAGE: u32 = 1000;
pub const MIN_PAGE_SIZE: u32 = 1;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Kind of registration to restrict a search to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SearchType {
    #[serde(rename = "hoofdvestiging")]
    MainBranch,
    #[serde(rename = "nevenvestiging")]
    Branch,
    #[serde(rename = "rechtspersoon")]
    LegalEntity,
}

impl SearchType {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchType::MainBranch => "hoofdvestiging",
            SearchType::Branch => "nevenvestiging",
            SearchType::LegalEntity => "rechtspersoon",
        }
    }
}

/// Optional filters for `search_companies`.
///
/// ```
/// use kvk_core::SearchFilters;
///
/// let filters = SearchFilters::new().trade_name("Acme").city("Amsterdam");
/// assert!(filters.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// Registration number, 8 digits.
    pub kvk_number: Option<String>,
    /// Legal Persons and Partnerships Information Number.
    pub rsin: Option<String>,
    pub establishment_number: Option<String>,
    /// Name under which a branch or legal entity trades.
    pub trade_name: Option<String>,
    pub street_name: Option<String>,
    pub city: Option<String>,
    /// Only together with `house_number`.
    pub postal_code: Option<String>,
    /// Only together with `postal_code`.
    pub house_number: Option<String>,
    /// 1 to 4 characters; only together with `house_number`.
    pub house_number_addition: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<SearchType>,
    pub include_inactive: Option<bool>,
    /// 1 to 1000.
    pub page: Option<u32>,
    /// 1 to 100.
    pub page_size: Option<u32>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kvk_number(mut self, value: impl Into<String>) -> Self {
        self.kvk_number = Some(value.into());
        self
    }

    pub fn rsin(mut self, value: impl Into<String>) -> Self {
        self.rsin = Some(value.into());
        self
    }

    pub fn establishment_number(mut self, value: impl Into<String>) -> Self {
        self.establishment_number = Some(value.into());
        self
    }

    pub fn trade_name(mut self, value: impl Into<String>) -> Self {
        self.trade_name = Some(value.into());
        self
    }

    pub fn street_name(mut self, value: impl Into<String>) -> Self {
        self.street_name = Some(value.into());
        self
    }

    pub fn city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    pub fn postal_code(mut self, value: impl Into<String>) -> Self {
        self.postal_code = Some(value.into());
        self
    }

    pub fn house_number(mut self, value: impl Into<String>) -> Self {
        self.house_number = Some(value.into());
        self
    }

    pub fn house_number_addition(mut self, value: impl Into<String>) -> Self {
        self.house_number_addition = Some(value.into());
        self
    }

    pub fn kind(mut self, value: SearchType) -> Self {
        self.kind = Some(value);
        self
    }

    pub fn include_inactive(mut self, value: bool) -> Self {
        self.include_inactive = Some(value);
        self
    }

    pub fn page(mut self, value: u32) -> Self {
        self.page = Some(value);
        self
    }

    pub fn page_size(mut self, value: u32) -> Self {
        self.page_size = Some(value);
        self
    }

    /// Check the cross-field and range rules.
    pub fn validate(&self) -> Result<()> {
        let postal_code = supplied(&self.postal_code);
        let house_number = supplied(&self.house_number);

        if postal_code != house_number {
            return Err(KvkError::Validation(
                "postal code and house number must be set together".to_string(),
            ));
        }
        if supplied(&self.house_number_addition) && !house_number {
            return Err(KvkError::Validation(
                "house number addition must be set together with house number".to_string(),
            ));
        }
        check_range("page", self.page, MIN_PAGE, MAX_PAGE)?;
        check_range("page size", self.page_size, MIN_PAGE_SIZE, MAX_PAGE_SIZE)?;
        Ok(())
    }

    /// Query parameters under their KVK wire names, in a fixed order.
    pub fn to_params(&self) -> RequestParams {
        RequestParams::new()
            .with("kvkNummer", self.kvk_number.clone())
            .with("rsin", self.rsin.clone())
            .with("vestigingsnummer", self.establishment_number.clone())
            .with("handelsnaam", self.trade_name.clone())
            .with("straatnaam", self.street_name.clone())
            .with("plaats", self.city.clone())
            .with("postcode", self.postal_code.clone())
            .with("huisnummer", self.house_number.clone())
            .with("huisnummerToevoeging", self.house_number_addition.clone())
            .with("type", self.kind.map(SearchType::as_str))
            .with("InclusiefInactieveRegistraties", self.include_inactive)
            .with("pagina", self.page)
            .with("aantal", self.page_size)
    }
}

fn supplied(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn check_range(name: &str, value: Option<u32>, min: u32, max: u32) -> Result<()> {
    match value {
        Some(v) if !(min..=max).contains(&v) => Err(KvkError::Validation(format!(
            "{name} must be between {min} and {max}, got {v}"
        ))),
        _ => Ok(()),
    }
}
