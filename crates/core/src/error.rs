use std::error::Error as StdError;

use thiserror::Error;

/// Boxed cause carried by [`SearchError::Transport`].
pub type TransportCause = Box<dyn StdError + Send + Sync + 'static>;

/// Errors returned by author searches and response normalization.
///
/// `NotFound` is a normal empty outcome. `Malformed` means the upstream
/// contract changed and should never be shown as "no results".
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("transport error: {0}")]
    Transport(#[source] TransportCause),

    #[error("HTTP status {0}")]
    HttpStatus(u16),

    #[error("no authors found")]
    NotFound,

    #[error("malformed field in response: {0}")]
    Malformed(&'static str),

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl SearchError {
    pub fn transport<E>(cause: E) -> Self
    where
        E: Into<TransportCause>,
    {
        Self::Transport(cause.into())
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Whether the upstream response broke the expected shape.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }

    /// Name of the offending field for `Malformed`.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match *self {
            Self::Malformed(field) => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
