//! Resume sources: where stored resume records come from.
//!
//! `HttpResumeSource` reads through the resume data API; `PgResumeSource`
//! reads `saved_resumes` directly. `AppState` holds an `Arc<dyn ResumeSource>`
//! chosen at startup from configuration.

pub mod http;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::resume::ResumeDocument;

pub use http::HttpResumeSource;
pub use postgres::PgResumeSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Resume '{0}' not found")]
    NotFound(String),

    #[error("Resume '{0}' is not accessible")]
    Access(String),

    #[error("Resume source unavailable: {0}")]
    Unavailable(String),

    #[error("Could not decode resume record: {0}")]
    Decode(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait ResumeSource: Send + Sync {
    /// Fetches the record published under `slug`.
    async fn fetch(&self, slug: &str) -> Result<ResumeDocument, SourceError>;

    /// Backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;
}
