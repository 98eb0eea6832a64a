use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument};

use crate::content::{resolve_template, ContentAccessor, TemplateKind};
use crate::errors::AppError;
use crate::layout::{preview_document, render_resume, Element};
use crate::models::resume::ResumeDocument;
use crate::print::{build_snapshot, PrintSnapshot, SnapshotMeta};
use crate::print::document::document_title;
use crate::resumes::session::ExportOutcome;
use crate::state::AppState;

const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSummary {
    pub slug: String,
    pub title: Option<String>,
    pub display_name: String,
    pub template: TemplateKind,
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    pub view_count: i64,
    pub updated_at: Option<DateTime<Utc>>,
    pub export_in_progress: bool,
    pub last_export: Option<ExportOutcome>,
}

// ────────────────────────────────────────────────────────────────────────────
// Render pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Resolves the layout and renders the resume tree. Pure and CPU-bound.
fn render_document(doc: &ResumeDocument) -> (TemplateKind, Element) {
    let kind = resolve_template(doc);
    let view = ContentAccessor::new(&doc.content).view(doc.owner.as_ref());
    (kind, render_resume(kind, &view))
}

/// Renders and snapshots on the blocking pool so large resumes never stall
/// the async workers.
async fn snapshot_for(doc: ResumeDocument) -> Result<PrintSnapshot, AppError> {
    let snapshot = tokio::task::spawn_blocking(move || {
        let (_, tree) = render_document(&doc);
        build_snapshot(
            Some(&tree),
            &SnapshotMeta {
                full_name: doc.display_name(),
            },
        )
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("render task failed: {e}")))??;
    Ok(snapshot)
}

async fn fetch(state: &AppState, slug: &str) -> Result<ResumeDocument, AppError> {
    Ok(state.source.fetch(slug).await?)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resumes/:slug
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ResumeSummary>, AppError> {
    let doc = fetch(&state, &slug).await?;
    let accessor = ContentAccessor::new(&doc.content);
    let session = state.exports.get(&slug);

    Ok(Json(ResumeSummary {
        template: resolve_template(&doc),
        primary_color: accessor.primary_color(),
        secondary_color: accessor.secondary_color(),
        font_family: accessor.font_family(),
        display_name: doc.display_name(),
        view_count: doc.view_count,
        updated_at: doc.updated_at,
        export_in_progress: session.busy,
        last_export: session.last_outcome,
        title: doc.title,
        slug: doc.slug,
    }))
}

/// GET /api/v1/resumes/:slug/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let doc = fetch(&state, &slug).await?;
    let page = tokio::task::spawn_blocking(move || {
        let (_, tree) = render_document(&doc);
        preview_document(&tree, &document_title(&doc.display_name()))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("render task failed: {e}")))?;
    Ok(Html(page))
}

/// GET /api/v1/resumes/:slug/print
pub async fn handle_print(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let doc = fetch(&state, &slug).await?;
    let snapshot = snapshot_for(doc).await?;
    Ok(Html(snapshot.html))
}

/// POST /api/v1/resumes/:slug/export
///
/// At most one export per slug is in flight; a second request gets 409.
#[instrument(skip(state))]
pub async fn handle_export(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let guard = state.exports.begin(&slug)?;

    let result = async {
        let doc = fetch(&state, &slug).await?;
        let snapshot = snapshot_for(doc).await?;
        let exported = state
            .exporter
            .export(&snapshot.html, &snapshot.file_name)
            .await?;
        Ok::<_, AppError>(exported)
    }
    .await;

    let exported = match result {
        Ok(exported) => exported,
        Err(e) => {
            guard.fail(e.to_string());
            return Err(e);
        }
    };

    let session = guard.succeed(&exported.file_name, exported.bytes.len());
    info!(
        file_name = %exported.file_name,
        size_bytes = exported.bytes.len(),
        exports_completed = session.exports_completed,
        "resume exported"
    );

    let content_type = HeaderValue::from_str(&exported.content_type)
        .unwrap_or_else(|_| HeaderValue::from_static(PDF_CONTENT_TYPE));
    let disposition =
        HeaderValue::from_bytes(content_disposition(&exported.file_name).as_bytes())
            .map_err(|e| AppError::Internal(e.into()))?;

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        exported.bytes,
    )
        .into_response())
}

fn content_disposition(file_name: &str) -> String {
    format!("attachment; filename=\"{file_name}\"")
}
