use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::export_client::DEFAULT_TIMEOUT;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// When set, resumes are read straight from Postgres.
    pub database_url: Option<String>,
    /// Base URL of the resume data API, e.g. `https://bpoc.io/api`.
    pub resume_api_url: Option<String>,
    /// Full URL of the HTML→PDF endpoint.
    pub export_service_url: String,
    pub export_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let database_url = optional_env("DATABASE_URL");
        let resume_api_url = optional_env("RESUME_API_URL");
        if database_url.is_none() && resume_api_url.is_none() {
            bail!("Either 'DATABASE_URL' or 'RESUME_API_URL' must be set");
        }

        let export_timeout = match optional_env("EXPORT_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.parse::<u64>()
                    .context("EXPORT_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Config {
            database_url,
            resume_api_url,
            export_service_url: require_env("EXPORT_SERVICE_URL")?,
            export_timeout,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
