use serde::{Deserialize, Serialize};

/// Compact author record returned for each search hit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    /// Upstream `authorid`
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl AuthorSummary {
    /// `first_name` and `last_name` joined by a single space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Author record with the biography and works inlined by the search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDetail {
    #[serde(flatten)]
    pub summary: AuthorSummary,
    /// Raw `spotlight` HTML, empty when upstream sent none
    pub spotlight_html: String,
    /// Visible text of `spotlight_html`
    pub biography_plain_text: String,
    /// Work ids in upstream order
    pub work_ids: Vec<i64>,
}

impl AuthorDetail {
    #[must_use]
    pub const fn summary(&self) -> &AuthorSummary {
        &self.summary
    }

    #[must_use]
    pub const fn id(&self) -> i64 {
        self.summary.id
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        self.summary.full_name()
    }

    /// False when there is no biography text to show.
    #[must_use]
    pub fn has_biography(&self) -> bool {
        !self.biography_plain_text.is_empty()
    }
}

impl From<AuthorDetail> for AuthorSummary {
    fn from(detail: AuthorDetail) -> Self {
        detail.summary
    }
}
