use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A saved resume as served by the resume data API.
///
/// `content` is deliberately untyped: stored records come in several
/// historical shapes and are read through `content::ContentAccessor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    #[serde(default)]
    pub id: String,
    pub slug: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default, alias = "data")]
    pub content: Value,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Owner profile joined in by the data API; last-resort source for header fields.
    #[serde(default, alias = "user")]
    pub owner: Option<OwnerProfile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProfile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Row shape of `saved_resumes` joined with the owning user's profile.
#[derive(Debug, Clone, FromRow)]
pub struct SavedResumeRow {
    pub id: Uuid,
    pub slug: String,
    pub title: Option<String>,
    pub user_id: Uuid,
    pub template_used: Option<String>,
    pub resume_data: Value,
    pub is_public: bool,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub position: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<SavedResumeRow> for ResumeDocument {
    fn from(row: SavedResumeRow) -> Self {
        ResumeDocument {
            id: row.id.to_string(),
            slug: row.slug,
            title: row.title,
            user_id: Some(row.user_id.to_string()),
            template: row.template_used,
            content: row.resume_data,
            is_public: row.is_public,
            view_count: i64::from(row.view_count),
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            owner: Some(OwnerProfile {
                full_name: row.full_name,
                email: row.email,
                phone: row.phone,
                location: row.location,
                position: row.position,
                avatar_url: row.avatar_url,
            }),
        }
    }
}

impl ResumeDocument {
    /// Name used for the export file and document title.
    pub fn display_name(&self) -> String {
        let owner_name = self
            .owner
            .as_ref()
            .and_then(|o| o.full_name.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty());
        let content_name = self
            .content
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty());

        owner_name
            .or(content_name)
            .unwrap_or("Resume")
            .to_string()
    }
}
