use std::sync::Arc;

use crate::config::Config;
use crate::export_client::ExportClient;
use crate::resumes::session::ExportSessions;
use crate::sources::ResumeSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Where resume records come from. Postgres or the data API, picked at startup.
    pub source: Arc<dyn ResumeSource>,
    pub exporter: ExportClient,
    /// One export session per slug.
    pub exports: Arc<ExportSessions>,
    pub config: Config,
}
