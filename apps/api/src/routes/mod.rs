pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::resumes::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/:slug", get(handlers::handle_get_resume))
        .route(
            "/api/v1/resumes/:slug/preview",
            get(handlers::handle_preview),
        )
        .route("/api/v1/resumes/:slug/print", get(handlers::handle_print))
        .route(
            "/api/v1/resumes/:slug/export",
            post(handlers::handle_export),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Json,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::export_client::ExportClient;
    use crate::models::resume::ResumeDocument;
    use crate::resumes::session::ExportSessions;
    use crate::sources::{ResumeSource, SourceError};

    struct FakeSource;

    #[async_trait]
    impl ResumeSource for FakeSource {
        async fn fetch(&self, slug: &str) -> Result<ResumeDocument, SourceError> {
            match slug {
                "jane-cruz" => Ok(serde_json::from_value(json!({
                    "slug": "jane-cruz",
                    "template": "executive",
                    "viewCount": 7,
                    "data": {
                        "summary": "Customer support lead",
                        "experience": [{ "title": "Team Lead", "company": "Acme" }],
                        "template": { "primaryColor": "#0ea5e9" }
                    },
                    "user": { "fullName": "Jane Cruz" }
                }))
                .map_err(|e| SourceError::Decode(e.to_string()))?),
                "private" => Err(SourceError::Access(slug.to_string())),
                _ => Err(SourceError::NotFound(slug.to_string())),
            }
        }

        fn backend(&self) -> &'static str {
            "fake"
        }
    }

    async fn spawn_export_service(delay: Duration) -> SocketAddr {
        let app = Router::new().route(
            "/generate-pdf",
            post(move |Json(body): Json<Value>| async move {
                tokio::time::sleep(delay).await;
                let name = body["fileName"].as_str().unwrap_or_default().to_string();
                (
                    [(header::CONTENT_TYPE, "application/pdf")],
                    format!("%PDF-1.7 {name}"),
                )
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn state_with(export_url: String) -> AppState {
        let timeout = Duration::from_secs(5);
        AppState {
            source: Arc::new(FakeSource),
            exporter: ExportClient::new(export_url.clone(), timeout).unwrap(),
            exports: Arc::new(ExportSessions::new()),
            config: Config {
                database_url: None,
                resume_api_url: Some("http://unused".into()),
                export_service_url: export_url,
                export_timeout: timeout,
                port: 0,
                rust_log: "info".into(),
            },
        }
    }

    async fn app() -> (Router, AppState) {
        let addr = spawn_export_service(Duration::ZERO).await;
        let state = state_with(format!("http://{addr}/generate-pdf"));
        (build_router(state.clone()), state)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_req(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_text(res: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_backend() {
        let (app, _) = app().await;
        let res = app.oneshot(get_req("/health")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_text(res).await).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["resume_source"], "fake");
    }

    #[tokio::test]
    async fn test_summary_reports_template_and_colours() {
        let (app, _) = app().await;
        let res = app.oneshot(get_req("/api/v1/resumes/jane-cruz")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_text(res).await).unwrap();
        assert_eq!(json["template"], "executive");
        assert_eq!(json["primaryColor"], "#0ea5e9");
        assert_eq!(json["displayName"], "Jane Cruz");
        assert_eq!(json["viewCount"], 7);
        assert_eq!(json["exportInProgress"], false);
    }

    #[tokio::test]
    async fn test_missing_and_private_resumes() {
        let (app, _) = app().await;
        let res = app
            .clone()
            .oneshot(get_req("/api/v1/resumes/nobody"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let json: Value = serde_json::from_str(&body_text(res).await).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");

        let res = app.oneshot(get_req("/api/v1/resumes/private/print")).await.unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_preview_and_print_render_html() {
        let (app, _) = app().await;
        let res = app
            .clone()
            .oneshot(get_req("/api/v1/resumes/jane-cruz/preview"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let preview = body_text(res).await;
        assert!(preview.contains("Customer support lead"));
        assert!(!preview.contains("data-divider=\"true\""));

        let res = app
            .oneshot(get_req("/api/v1/resumes/jane-cruz/print"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let print = body_text(res).await;
        assert!(print.contains("@page"));
        assert!(print.contains("<title>Jane Cruz - Resume | BPOC.IO</title>"));
    }

    #[tokio::test]
    async fn test_export_returns_pdf_attachment() {
        let (app, state) = app().await;
        let res = app
            .oneshot(post_req("/api/v1/resumes/jane-cruz/export"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            res.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Jane-Cruz-BPOC-Resume.pdf\""
        );
        assert_eq!(body_text(res).await, "%PDF-1.7 Jane-Cruz-BPOC-Resume.pdf");

        let session = state.exports.get("jane-cruz");
        assert!(!session.busy);
        assert_eq!(session.exports_completed, 1);
    }

    #[tokio::test]
    async fn test_concurrent_export_is_rejected() {
        let addr = spawn_export_service(Duration::from_millis(500)).await;
        let state = state_with(format!("http://{addr}/generate-pdf"));
        let app = build_router(state.clone());

        let first = tokio::spawn({
            let app = app.clone();
            async move {
                app.oneshot(post_req("/api/v1/resumes/jane-cruz/export"))
                    .await
                    .unwrap()
            }
        });
        while !state.exports.get("jane-cruz").busy {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let second = app
            .oneshot(post_req("/api/v1/resumes/jane-cruz/export"))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        assert_eq!(first.await.unwrap().status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unreachable_export_service_is_bad_gateway() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let state = state_with(format!("http://{addr}/generate-pdf"));
        let app = build_router(state.clone());

        let res = app
            .oneshot(post_req("/api/v1/resumes/jane-cruz/export"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
        let json: Value = serde_json::from_str(&body_text(res).await).unwrap();
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Network error"));

        let session = state.exports.get("jane-cruz");
        assert!(!session.busy);
        assert!(session.last_outcome.is_some());
    }
}
