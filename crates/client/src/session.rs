//! Latest-wins result set for a single search box.
//!
//! Each `submit` takes a generation token. A response is applied only if its
//! token is still the newest when it completes; older responses are dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use authorsearch_core::{AuthorDetail, SearchError, SearchQuery};
use tokio::sync::RwLock;

use crate::client::AuthorSearchClient;

/// What happened to a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Result set replaced with this many authors.
    Applied(usize),
    /// A newer search was submitted meanwhile; this response was discarded.
    Stale,
}

#[derive(Debug)]
pub struct SearchSession {
    client: AuthorSearchClient,
    generation: AtomicU64,
    results: RwLock<Arc<[AuthorDetail]>>,
}

impl SearchSession {
    #[must_use]
    pub fn new(client: AuthorSearchClient) -> Self {
        Self { client, generation: AtomicU64::new(0), results: RwLock::new(Arc::from(Vec::new())) }
    }

    /// Token of the most recently submitted search.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Snapshot of the current result set.
    pub async fn results(&self) -> Arc<[AuthorDetail]> {
        Arc::clone(&*self.results.read().await)
    }

    /// Runs a detailed search and applies it if no newer search started.
    ///
    /// A failure of the newest search clears the result set and is returned.
    /// Stale completions never touch the result set, failed or not.
    ///
    /// # Errors
    /// Any `SearchError` from the newest search.
    pub async fn submit(&self, query: &SearchQuery) -> Result<SubmitOutcome, SearchError> {
        let token = self.generation.fetch_add(1, Ordering::SeqCst).wrapping_add(1);
        let outcome = self.client.search_detailed(query).await;

        let mut results = self.results.write().await;
        if self.generation.load(Ordering::SeqCst) != token {
            tracing::debug!(token, latest = self.generation(), "discarding stale author search");
            return Ok(SubmitOutcome::Stale);
        }

        match outcome {
            Ok(authors) => {
                let count = authors.len();
                *results = authors.into();
                Ok(SubmitOutcome::Applied(count))
            },
            Err(e) => {
                *results = Arc::from(Vec::new());
                Err(e)
            },
        }
    }
}
