use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::models::resume::{ResumeDocument, SavedResumeRow};
use crate::sources::{ResumeSource, SourceError};

/// Reads `saved_resumes` directly. Only public records are served, and each
/// successful read bumps the record's view counter.
#[derive(Clone)]
pub struct PgResumeSource {
    pool: PgPool,
}

impl PgResumeSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Loads the record and its owner's profile by slug.
pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<SavedResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, SavedResumeRow>(
        r#"
        SELECT r.id, r.slug, r.title, r.user_id, r.template_used, r.resume_data,
               r.is_public, r.view_count, r.created_at, r.updated_at,
               u.full_name, u.email, u.phone, u.location, u.position, u.avatar_url
        FROM saved_resumes r
        LEFT JOIN users u ON u.id = r.user_id
        WHERE r.slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await
}

/// Atomically increments the view counter and returns the new value.
pub async fn record_view(pool: &PgPool, id: uuid::Uuid) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar(
        "UPDATE saved_resumes SET view_count = view_count + 1 WHERE id = $1 RETURNING view_count",
    )
    .bind(id)
    .fetch_one(pool)
    .await
}

#[async_trait]
impl ResumeSource for PgResumeSource {
    async fn fetch(&self, slug: &str) -> Result<ResumeDocument, SourceError> {
        let Some(mut row) = find_by_slug(&self.pool, slug).await? else {
            debug!(slug, "no saved resume with this slug");
            return Err(SourceError::NotFound(slug.to_string()));
        };

        if !row.is_public {
            info!(slug, "refusing private resume");
            return Err(SourceError::Access(slug.to_string()));
        }

        row.view_count = record_view(&self.pool, row.id).await?;
        Ok(row.into())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
