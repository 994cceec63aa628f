//! Conversion of raw upstream author objects into typed records.

use serde_json::Value;

use crate::author::{AuthorDetail, AuthorSummary};
use crate::biography;
use crate::constants::FIELD_AUTHOR_ID;
use crate::error::SearchError;
use crate::works::WorksField;

/// Extracts id and names from one element of the `author` list.
///
/// # Errors
/// Returns `Malformed("authorid")` when the id is absent or not an integer.
pub fn summarize(raw: &Value) -> Result<AuthorSummary, SearchError> {
    let id = raw
        .get("authorid")
        .and_then(parse_int)
        .ok_or(SearchError::Malformed(FIELD_AUTHOR_ID))?;

    Ok(AuthorSummary {
        id,
        first_name: string_or_empty(raw, "authorfirst"),
        last_name: string_or_empty(raw, "authorlast"),
    })
}

/// Builds the full record for one element of the `author` list.
///
/// Pure: the same input always yields an equal value.
///
/// # Errors
/// Returns `Malformed("authorid")` or `Malformed("workIds")` when those
/// fields cannot be converted to integers. Biography extraction never fails.
pub fn fetch_detail(raw: &Value) -> Result<AuthorDetail, SearchError> {
    let summary = summarize(raw)?;
    let work_ids = WorksField::from_author(raw).into_ids()?;
    let spotlight_html = string_or_empty(raw, "spotlight");
    let biography_plain_text = if spotlight_html.is_empty() {
        String::new()
    } else {
        biography::plain_text(&spotlight_html)
    };

    Ok(AuthorDetail { summary, spotlight_html, biography_plain_text, work_ids })
}

/// Integer from a numeric string or a JSON integer.
pub(crate) fn parse_int(value: &Value) -> Option<i64> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}

fn string_or_empty(raw: &Value, key: &str) -> String {
    raw.get(key).and_then(Value::as_str).unwrap_or_default().to_owned()
}
