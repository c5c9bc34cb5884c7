//! Wire DTOs for the REST API.
//!
//! DESIGN
//! ======
//! The backend hands out integer primary keys on some endpoints and string
//! identifiers on others, so every `id` field goes through [`deserialize_id`]
//! and is held as a `String` on the client. Optional presentation fields use
//! `#[serde(default)]` so a sparse payload still renders.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by `/api/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Compared against [`crate::config::ADMIN_ROLE`] for admin-only views.
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Email/password pair posted to `/api/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Account creation payload posted to `/api/auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// One hit in a federated search category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Response of `/api/search`, one list per category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub resources: Vec<SearchItem>,
    #[serde(default)]
    pub forum: Vec<SearchItem>,
    #[serde(default)]
    pub courses: Vec<SearchItem>,
}

/// A course in the catalog, with modules present on the detail endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub language: String,
    /// Completion percentage for the current user, when enrolled.
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub modules: Vec<CourseModule>,
    /// Module the user left off on, when the server tracks one.
    #[serde(default, rename = "currentModule")]
    pub current_module: Option<CourseModule>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseModule {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub completed: bool,
}

/// Completion certificate issued for a course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, rename = "courseTitle")]
    pub course_title: String,
    #[serde(default, rename = "userName")]
    pub user_name: String,
    #[serde(default, rename = "issuedAt")]
    pub issued_at: Option<String>,
}

/// Forum discussion topic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, rename = "authorName")]
    pub author_name: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub content: String,
    #[serde(default, rename = "authorName")]
    pub author_name: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

/// Moderation report for a topic or comment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportRequest {
    #[serde(rename = "reporterId")]
    pub reporter_id: String,
    pub reason: String,
}

/// Library resource (document, video, guide, template).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub language: String,
}

/// Inline preview returned by `/api/resources/{id}/preview`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourcePreview {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Editable member profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "userType")]
    pub user_type: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub notifications: bool,
    pub newsletter: bool,
    pub language: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { notifications: true, newsletter: true, language: "en".to_owned() }
    }
}

/// Error body some endpoints return alongside a non-success status.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Accept either a JSON string or an integer and hold it as a string.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(number) => number
            .as_i64()
            .map(|int| int.to_string())
            .or_else(|| number.as_u64().map(|int| int.to_string()))
            .ok_or_else(|| D::Error::custom("expected integer id")),
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}
