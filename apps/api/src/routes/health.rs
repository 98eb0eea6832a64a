use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service version plus the configured collaborators.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME"),
        "resume_source": state.source.backend(),
        "export_service": state.exporter.endpoint(),
        "export_timeout_secs": state.config.export_timeout.as_secs(),
    }))
}
