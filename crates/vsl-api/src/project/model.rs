//! Request payloads for the project routes. Row shapes live in `vsl_db::models`.

use serde::{Deserialize, Deserializer};
use vsl_db::models::ProjectFilter;

/// Query string of `GET /projects`
#[derive(Debug, Default, Deserialize)]
pub struct ProjectQuery {
    pub filter: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

impl ProjectQuery {
    /// Resolve the listing filter.
    ///
    /// `my` applies whenever `userId` is non-empty. Unknown names apply no filter.
    pub fn to_filter(&self) -> Option<ProjectFilter> {
        match self.filter.as_deref()? {
            "my" => non_empty(self.user_id.as_deref())
                .map(|id| ProjectFilter::Mine(id.to_string())),
            "open" => Some(ProjectFilter::Open),
            "completed" => Some(ProjectFilter::Completed),
            "under_professor" => Some(ProjectFilter::UnderProfessor),
            _ => None,
        }
    }
}

/// Body of `PUT /projects/{id}`
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProject {
    /// Applied only when non-empty
    pub status: Option<String>,
    /// Outer `None`: key absent, leave as is. `Some(None)`: explicit null, clear it.
    #[serde(default, deserialize_with = "present")]
    pub professor_id: Option<Option<i64>>,
}

/// Marks a key as present even when its value is `null`
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Body of `POST /projects/{id}/join`
#[derive(Debug, Default, Deserialize)]
pub struct JoinRequest {
    pub user_id: Option<i64>,
    /// Accepted from the client but not stored
    pub message: Option<String>,
}

/// Body of `PUT /projects/{id}/members/{member_id}`
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMember {
    pub status: Option<String>,
    pub role: Option<String>,
}

/// Body of `PUT /tasks/{task_id}`
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTask {
    pub status: Option<String>,
}

/// Body of `PUT /budget/{budget_id}`
#[derive(Debug, Default, Deserialize)]
pub struct BudgetReview {
    pub status: Option<String>,
    pub professor_note: Option<String>,
}

/// `Some` only for a non-empty string
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
