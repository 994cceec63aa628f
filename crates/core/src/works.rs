use serde_json::Value;

use crate::constants::FIELD_WORK_IDS;
use crate::error::SearchError;
use crate::normalize::parse_int;

/// Shape of the nested `works.works` field.
///
/// Upstream sends a bare string for one work and a list for several, and
/// omits the key when there are none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorksField<'a> {
    Absent,
    Single(&'a Value),
    List(&'a [Value]),
}

impl<'a> WorksField<'a> {
    /// Resolves `works.works` on a raw author object.
    #[must_use]
    pub fn from_author(raw: &'a Value) -> Self {
        match raw.get("works").and_then(|works| works.get("works")) {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::Array(items)) => Self::List(items),
            Some(other) => Self::Single(other),
        }
    }

    /// Parses every id, keeping upstream order.
    ///
    /// # Errors
    /// Returns `Malformed("workIds")` if any element is not an integer.
    pub fn into_ids(self) -> Result<Vec<i64>, SearchError> {
        match self {
            Self::Absent => Ok(Vec::new()),
            Self::Single(value) => Ok(vec![work_id(value)?]),
            Self::List(items) => items.iter().map(work_id).collect(),
        }
    }
}

fn work_id(value: &Value) -> Result<i64, SearchError> {
    parse_int(value).ok_or(SearchError::Malformed(FIELD_WORK_IDS))
}
