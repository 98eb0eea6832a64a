use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::resume::ResumeDocument;
use crate::sources::{ResumeSource, SourceError};

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
struct SavedResumeEnvelope {
    #[serde(default)]
    resume: Option<ResumeDocument>,
    #[serde(default)]
    error: Option<String>,
}

/// Reads resumes through the data API: `GET {base}/get-saved-resume/{slug}`.
#[derive(Clone)]
pub struct HttpResumeSource {
    client: Client,
    base_url: String,
}

impl HttpResumeSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(FETCH_TIMEOUT).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// The slug is pushed as a single, percent-encoded path segment.
    fn url_for(&self, slug: &str) -> Result<Url, SourceError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| SourceError::Unavailable(format!("invalid resume API URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| SourceError::Unavailable("resume API URL cannot take a path".into()))?
            .pop_if_empty()
            .push("get-saved-resume")
            .push(slug);
        Ok(url)
    }
}

#[async_trait]
impl ResumeSource for HttpResumeSource {
    async fn fetch(&self, slug: &str) -> Result<ResumeDocument, SourceError> {
        let url = self.url_for(slug)?;
        debug!(%url, "fetching resume");

        let response = self
            .client
            .get(url)
            .header("cache-control", "no-store")
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        match status {
            StatusCode::NOT_FOUND => return Err(SourceError::NotFound(slug.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(SourceError::Access(slug.to_string()))
            }
            s if !s.is_success() => {
                let detail = serde_json::from_str::<SavedResumeEnvelope>(&body)
                    .ok()
                    .and_then(|env| env.error)
                    .unwrap_or_else(|| format!("status {}", s.as_u16()));
                warn!(status = s.as_u16(), %detail, "resume API error");
                return Err(SourceError::Unavailable(detail));
            }
            _ => {}
        }

        let envelope: SavedResumeEnvelope =
            serde_json::from_str(&body).map_err(|e| SourceError::Decode(e.to_string()))?;
        envelope
            .resume
            .ok_or_else(|| SourceError::NotFound(slug.to_string()))
    }

    fn backend(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, http::StatusCode as AxumStatus, response::IntoResponse, routing::get, Json, Router};
    use serde_json::json;

    async fn handler(Path(slug): Path<String>) -> axum::response::Response {
        match slug.as_str() {
            "jane-cruz" => Json(json!({
                "success": true,
                "resume": {
                    "id": "r1",
                    "slug": "jane-cruz",
                    "template": "modern",
                    "data": { "name": "Jane Cruz" },
                    "isPublic": true,
                    "user": { "fullName": "Jane Cruz" }
                }
            }))
            .into_response(),
            "a/b?c#d" => Json(json!({
                "success": true,
                "resume": { "slug": "a/b?c#d", "data": {} }
            }))
            .into_response(),
            "private" => (AxumStatus::FORBIDDEN, Json(json!({ "error": "private" }))).into_response(),
            "broken" => (AxumStatus::INTERNAL_SERVER_ERROR, Json(json!({ "error": "db down" }))).into_response(),
            "empty" => Json(json!({ "success": false })).into_response(),
            "garbled" => "not json".into_response(),
            _ => (AxumStatus::NOT_FOUND, Json(json!({ "error": "Resume not found" }))).into_response(),
        }
    }

    async fn spawn_api() -> HttpResumeSource {
        let app = Router::new().route("/api/get-saved-resume/:slug", get(handler));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        HttpResumeSource::new(format!("http://{addr}/api/")).unwrap()
    }

    #[tokio::test]
    async fn test_fetches_resume_envelope() {
        let source = spawn_api().await;
        let doc = source.fetch("jane-cruz").await.unwrap();
        assert_eq!(doc.slug, "jane-cruz");
        assert_eq!(doc.content["name"], "Jane Cruz");
        assert_eq!(doc.display_name(), "Jane Cruz");
    }

    #[tokio::test]
    async fn test_status_classification() {
        let source = spawn_api().await;
        assert!(matches!(source.fetch("missing").await, Err(SourceError::NotFound(_))));
        assert!(matches!(source.fetch("private").await, Err(SourceError::Access(_))));
        assert!(matches!(
            source.fetch("broken").await,
            Err(SourceError::Unavailable(ref m)) if m == "db down"
        ));
        assert!(matches!(source.fetch("empty").await, Err(SourceError::NotFound(_))));
        assert!(matches!(source.fetch("garbled").await, Err(SourceError::Decode(_))));
    }

    #[test]
    fn test_slug_is_one_encoded_segment() {
        let source = HttpResumeSource::new("http://localhost:3000/api/").unwrap();
        assert_eq!(
            source.url_for("jane-cruz").unwrap().as_str(),
            "http://localhost:3000/api/get-saved-resume/jane-cruz"
        );
        assert_eq!(
            source.url_for("a/b?c#d").unwrap().as_str(),
            "http://localhost:3000/api/get-saved-resume/a%2Fb%3Fc%23d"
        );

        let bare = HttpResumeSource::new("http://localhost:3000").unwrap();
        assert_eq!(
            bare.url_for("x").unwrap().as_str(),
            "http://localhost:3000/get-saved-resume/x"
        );
    }

    #[tokio::test]
    async fn test_reserved_characters_reach_the_api_intact() {
        let source = spawn_api().await;
        let doc = source.fetch("a/b?c#d").await.unwrap();
        assert_eq!(doc.slug, "a/b?c#d");
    }

    #[tokio::test]
    async fn test_unreachable_api_is_unavailable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let source = HttpResumeSource::new(format!("http://{addr}")).unwrap();
        assert!(matches!(source.fetch("x").await, Err(SourceError::Unavailable(_))));
    }
}
