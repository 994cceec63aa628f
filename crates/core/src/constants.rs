//! Shared constants for authorsearch.

/// Author directory endpoint.
pub const DEFAULT_BASE_URL: &str = "https://reststop.randomhouse.com/resources/authors";

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// First result index sent as `start`.
pub const DEFAULT_OFFSET: u32 = 0;

/// Page size sent as `max`.
pub const DEFAULT_LIMIT: u32 = 3;

/// Upstream `expandLevel`; 1 inlines works and spotlight with each hit.
pub const EXPAND_LEVEL: u32 = 1;

/// Field names reported by `SearchError::Malformed`.
pub const FIELD_AUTHOR_ID: &str = "authorid";
pub const FIELD_WORK_IDS: &str = "workIds";
