//! Core types for authorsearch
//!
//! Domain types, the error taxonomy and the pure normalization step that turns
//! one upstream author object into typed records. Nothing here touches the
//! network or logs.

pub mod biography;
pub mod constants;
mod author;
mod error;
mod normalize;
mod query;
mod works;

#[cfg(test)]
mod normalize_tests;

pub use author::*;
pub use error::*;
pub use normalize::{fetch_detail, summarize};
pub use query::*;
pub use works::WorksField;
