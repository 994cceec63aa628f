use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LIMIT, DEFAULT_OFFSET};
use crate::error::SearchError;

/// Which name the fragment is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchField {
    #[default]
    #[serde(rename = "firstName")]
    FirstName,
    #[serde(rename = "lastName")]
    LastName,
}

impl SearchField {
    /// Upstream query parameter name.
    #[must_use]
    pub const fn as_param(&self) -> &'static str {
        match *self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
        }
    }
}

impl Display for SearchField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_param())
    }
}

impl FromStr for SearchField {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" | "firstname" | "first-name" => Ok(Self::FirstName),
            "last" | "lastname" | "last-name" => Ok(Self::LastName),
            other => Err(SearchError::InvalidQuery(format!("unknown search field: {other}"))),
        }
    }
}

/// One search request. Built per user action and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    fragment: String,
    field: SearchField,
    offset: u32,
    limit: u32,
}

impl SearchQuery {
    /// Creates a query with the default page (`offset` 0, `limit` 3).
    ///
    /// # Errors
    /// Returns `InvalidQuery` if the fragment is empty or whitespace only.
    /// This is stricter than a plain emptiness check: blank fragments are
    /// rejected as well. Accepted fragments are kept untrimmed.
    pub fn new(fragment: impl Into<String>, field: SearchField) -> Result<Self, SearchError> {
        let fragment = fragment.into();
        if fragment.trim().is_empty() {
            return Err(SearchError::InvalidQuery("name fragment must not be empty".to_owned()));
        }
        Ok(Self { fragment, field, offset: DEFAULT_OFFSET, limit: DEFAULT_LIMIT })
    }

    #[must_use]
    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the page size. No upper bound is enforced locally.
    ///
    /// # Errors
    /// Returns `InvalidQuery` for a zero limit.
    pub fn with_limit(mut self, limit: u32) -> Result<Self, SearchError> {
        if limit == 0 {
            return Err(SearchError::InvalidQuery("limit must be greater than zero".to_owned()));
        }
        self.limit = limit;
        Ok(self)
    }

    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    #[must_use]
    pub const fn field(&self) -> SearchField {
        self.field
    }

    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Query parameters in the order the upstream endpoint documents them.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("start", self.offset.to_string()),
            ("max", self.limit.to_string()),
            ("expandLevel", crate::constants::EXPAND_LEVEL.to_string()),
            (self.field.as_param(), self.fragment.clone()),
        ]
    }
}
