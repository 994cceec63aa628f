//! Client settings read from the environment, with warn-level logging for invalid values.

use std::time::Duration;

use anyhow::Result;
use authorsearch_client::AuthorSearchClient;
use authorsearch_core::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

pub(crate) const BASE_URL_ENV: &str = "AUTHORSEARCH_BASE_URL";
pub(crate) const TIMEOUT_ENV: &str = "AUTHORSEARCH_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Settings {
    pub(crate) fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let timeout_secs = env_parse_with_default(TIMEOUT_ENV, DEFAULT_TIMEOUT_SECS);
        Self { base_url, timeout_secs }
    }

    pub(crate) fn build_client(&self) -> Result<AuthorSearchClient> {
        let client = AuthorSearchClient::builder()
            .base_url(self.base_url.as_str())
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()?;
        Ok(client)
    }
}

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub(crate) fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    parse_with_default(var, std::env::var(var).ok().as_deref(), default)
}

fn parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    raw: Option<&str>,
    default: T,
) -> T {
    match raw {
        Some(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}
