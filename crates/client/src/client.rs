use std::time::Duration;

use authorsearch_core::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use authorsearch_core::{AuthorDetail, AuthorSummary, SearchError, SearchQuery, fetch_detail, summarize};
use reqwest::header::ACCEPT;
use serde_json::Value;

/// Client for the author directory endpoint.
///
/// Every call issues exactly one request. Nothing is retried or cached.
pub struct AuthorSearchClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for AuthorSearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorSearchClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Builder for [`AuthorSearchClient`].
#[derive(Debug, Clone)]
pub struct AuthorSearchClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for AuthorSearchClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AuthorSearchClientBuilder {
    /// Overrides the endpoint. Trailing slashes are dropped.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Total time allowed per request, connect through body.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// # Errors
    /// Returns `ClientInit` if the HTTP client cannot be built (TLS backend failure).
    pub fn build(self) -> Result<AuthorSearchClient, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| SearchError::ClientInit(e.to_string()))?;
        Ok(AuthorSearchClient { client, base_url: self.base_url, timeout: self.timeout })
    }
}

impl AuthorSearchClient {
    /// Client for the public endpoint with the default 10s timeout.
    ///
    /// # Errors
    /// Returns `ClientInit` if the HTTP client cannot be built.
    pub fn new() -> Result<Self, SearchError> {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> AuthorSearchClientBuilder {
        AuthorSearchClientBuilder::default()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Searches and returns id and names for every hit, in upstream order.
    ///
    /// # Errors
    /// `Transport`, `HttpStatus`, `NotFound`, or `Malformed("authorid")`.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<AuthorSummary>, SearchError> {
        let rows = self.fetch_rows(query).await?;
        rows.iter().map(summarize).collect()
    }

    /// Searches and returns the full record for every hit, in upstream order.
    ///
    /// # Errors
    /// As [`Self::search`], plus `Malformed("workIds")`.
    pub async fn search_detailed(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<AuthorDetail>, SearchError> {
        let rows = self.fetch_rows(query).await?;
        rows.iter().map(fetch_detail).collect()
    }

    async fn fetch_rows(&self, query: &SearchQuery) -> Result<Vec<Value>, SearchError> {
        tracing::debug!(
            field = %query.field(),
            offset = query.offset(),
            limit = query.limit(),
            "sending author search"
        );

        let response = self
            .client
            .get(&self.base_url)
            .header(ACCEPT, "application/json")
            .query(&query.to_params())
            .send()
            .await
            .map_err(SearchError::transport)?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "author search responded");
        if !status.is_success() {
            return Err(SearchError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(SearchError::transport)?;
        author_rows(&body)
    }
}

/// Pulls the `author` list out of the response envelope.
///
/// Anything other than a JSON object holding a non-empty list of objects is
/// the upstream way of saying "no matches".
pub(crate) fn author_rows(body: &str) -> Result<Vec<Value>, SearchError> {
    let mut envelope = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => return Err(SearchError::NotFound),
    };

    match envelope.remove("author") {
        Some(Value::Array(rows)) if !rows.is_empty() && rows.iter().all(Value::is_object) => {
            Ok(rows)
        },
        _ => Err(SearchError::NotFound),
    }
}
