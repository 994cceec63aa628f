//! Author directory client
//!
//! One GET per search against the directory endpoint, with the JSON envelope
//! normalized through `authorsearch-core`.

mod client;
mod session;

#[cfg(test)]
mod session_tests;

pub use client::{AuthorSearchClient, AuthorSearchClientBuilder};
pub use session::{SearchSession, SubmitOutcome};
