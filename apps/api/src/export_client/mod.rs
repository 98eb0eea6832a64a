//! Export service client: hands print snapshots to the HTML→PDF service.
//!
//! One POST per export, JSON body `{ html, fileName }`, binary document back.
//! Failures are classified as transport, timeout or service errors; the
//! service's own error text is surfaced when it sends any. No retries.

use std::time::Duration;

use bytes::Bytes;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_CONTENT_TYPE: &str = "application/pdf";

const TIMEOUT_MESSAGE: &str =
    "PDF generation timed out. The resume might be too complex. Please try again or contact support.";
const NETWORK_MESSAGE: &str =
    "Network error: Could not connect to the PDF generation service. Please check if the server is running.";
const BROWSER_MISSING_MESSAGE: &str =
    "PDF generation failed: the export service could not start its browser. Please try again later.";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Export request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Export service error (status {status}): {message}")]
    Service { status: u16, message: String },
}

impl ExportError {
    /// Text shown to the person who asked for the export.
    pub fn user_message(&self) -> String {
        match self {
            ExportError::Timeout(_) => TIMEOUT_MESSAGE.to_string(),
            ExportError::Network(_) => NETWORK_MESSAGE.to_string(),
            ExportError::Service { message, .. } => {
                let lower = message.to_ascii_lowercase();
                if lower.contains("timeout") || lower.contains("timed out") {
                    TIMEOUT_MESSAGE.to_string()
                } else if [
                    "failed to launch browser",
                    "could not find chrome",
                    "browser was not found",
                ]
                .iter()
                .any(|needle| lower.contains(needle))
                {
                    BROWSER_MISSING_MESSAGE.to_string()
                } else {
                    format!("Error generating PDF: {message}")
                }
            }
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportRequest<'a> {
    html: &'a str,
    file_name: &'a str,
}

/// Document returned by the export service.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

#[derive(Clone)]
pub struct ExportClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl ExportClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one snapshot for conversion and returns the produced document.
    pub async fn export(&self, html: &str, file_name: &str) -> Result<ExportedDocument, ExportError> {
        debug!(
            endpoint = %self.endpoint,
            file_name,
            html_bytes = html.len(),
            "sending export request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ExportRequest { html, file_name })
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = service_error_message(status, &body);
            warn!(status = status.as_u16(), %message, "export service rejected request");
            return Err(ExportError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let bytes = response.bytes().await.map_err(|e| self.classify(e))?;

        info!(file_name, size_bytes = bytes.len(), "export completed");
        Ok(ExportedDocument {
            file_name: file_name.to_string(),
            content_type,
            bytes,
        })
    }

    fn classify(&self, err: reqwest::Error) -> ExportError {
        if err.is_timeout() {
            ExportError::Timeout(self.timeout)
        } else {
            ExportError::Network(err.to_string())
        }
    }
}

/// Best error text from a failed export response.
///
/// A JSON body yields `details`, `hint`, `error` or `message` (first present).
/// A non-JSON body is used as-is. An empty body gets a status-based message.
pub fn service_error_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if !body.is_empty() {
        return match serde_json::from_str::<Value>(body) {
            Ok(json) => ["details", "hint", "error", "message"]
                .iter()
                .find_map(|key| json.get(*key).and_then(message_text))
                .unwrap_or_else(|| status_message(status)),
            Err(_) => body.to_string(),
        };
    }
    status_message(status)
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(_) => value.get("message").and_then(message_text),
        _ => None,
    }
}

fn status_message(status: StatusCode) -> String {
    match status {
        StatusCode::PAYLOAD_TOO_LARGE => {
            "Resume is too large to export (413 Payload Too Large). Try removing the profile photo or shortening sections."
                .to_string()
        }
        StatusCode::GATEWAY_TIMEOUT => {
            "PDF generation timed out (504 Gateway Timeout).".to_string()
        }
        _ => format!(
            "Server returned {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error")
        ),
    }
}
