mod config;
mod content;
mod db;
mod errors;
mod export_client;
mod layout;
mod models;
mod print;
mod resumes;
mod routes;
mod sources;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::export_client::ExportClient;
use crate::resumes::session::ExportSessions;
use crate::routes::build_router;
use crate::sources::{HttpResumeSource, PgResumeSource, ResumeSource};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume print service v{}", env!("CARGO_PKG_VERSION"));

    let source = build_source(&config).await?;
    info!("Resume source: {}", source.backend());

    let exporter = ExportClient::new(config.export_service_url.clone(), config.export_timeout)?;
    info!(
        "Export client initialized ({}, timeout {:?})",
        exporter.endpoint(),
        config.export_timeout
    );

    let state = AppState {
        source,
        exporter,
        exports: Arc::new(ExportSessions::new()),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Postgres when `DATABASE_URL` is set, otherwise the resume data API.
async fn build_source(config: &Config) -> Result<Arc<dyn ResumeSource>> {
    if let Some(url) = &config.database_url {
        let pool = create_pool(url).await?;
        return Ok(Arc::new(PgResumeSource::new(pool)));
    }
    match &config.resume_api_url {
        Some(base) => Ok(Arc::new(HttpResumeSource::new(base.clone())?)),
        None => anyhow::bail!("no resume source configured"),
    }
}
