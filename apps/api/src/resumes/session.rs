//! Export session state.
//!
//! One session per slug. A session is either idle or has exactly one export
//! in flight; every transition goes through [`ExportSession::reduce`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExportOutcome {
    Succeeded { file_name: String, size_bytes: usize },
    Failed { message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportSession {
    pub busy: bool,
    pub last_outcome: Option<ExportOutcome>,
    pub exports_completed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportEvent {
    Requested,
    Succeeded { file_name: String, size_bytes: usize },
    Failed { message: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("An export is already in progress for this resume")]
    Busy,

    #[error("No export is in progress")]
    NotInFlight,
}

impl ExportSession {
    /// Applies one event, returning the next state. Invalid transitions
    /// (a second request while busy, a result while idle) are rejected.
    pub fn reduce(&self, event: ExportEvent) -> Result<ExportSession, SessionError> {
        match (self.busy, event) {
            (true, ExportEvent::Requested) => Err(SessionError::Busy),
            (false, ExportEvent::Requested) => Ok(ExportSession {
                busy: true,
                ..self.clone()
            }),
            (false, _) => Err(SessionError::NotInFlight),
            (true, ExportEvent::Succeeded { file_name, size_bytes }) => Ok(ExportSession {
                busy: false,
                last_outcome: Some(ExportOutcome::Succeeded { file_name, size_bytes }),
                exports_completed: self.exports_completed + 1,
            }),
            (true, ExportEvent::Failed { message }) => Ok(ExportSession {
                busy: false,
                last_outcome: Some(ExportOutcome::Failed { message }),
                exports_completed: self.exports_completed,
            }),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Per-slug registry
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct ExportSessions {
    sessions: Mutex<HashMap<String, ExportSession>>,
}

impl ExportSessions {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, ExportSession>> {
        // A panic mid-update leaves a valid map behind; keep serving.
        self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn apply(&self, slug: &str, event: ExportEvent) -> Result<ExportSession, SessionError> {
        let mut sessions = self.lock();
        let current = sessions.get(slug).cloned().unwrap_or_default();
        let next = current.reduce(event)?;
        sessions.insert(slug.to_string(), next.clone());
        Ok(next)
    }

    pub fn get(&self, slug: &str) -> ExportSession {
        self.lock().get(slug).cloned().unwrap_or_default()
    }

    /// Marks an export as started. The returned guard must be resolved with
    /// `succeed` or `fail`; dropping it unresolved records a failure.
    pub fn begin(self: &Arc<Self>, slug: &str) -> Result<ExportGuard, SessionError> {
        self.apply(slug, ExportEvent::Requested)?;
        Ok(ExportGuard {
            sessions: Arc::clone(self),
            slug: slug.to_string(),
            resolved: false,
        })
    }
}

pub struct ExportGuard {
    sessions: Arc<ExportSessions>,
    slug: String,
    resolved: bool,
}

impl ExportGuard {
    pub fn succeed(mut self, file_name: &str, size_bytes: usize) -> ExportSession {
        self.resolve(ExportEvent::Succeeded {
            file_name: file_name.to_string(),
            size_bytes,
        })
    }

    pub fn fail(mut self, message: impl Into<String>) -> ExportSession {
        self.resolve(ExportEvent::Failed {
            message: message.into(),
        })
    }

    fn resolve(&mut self, event: ExportEvent) -> ExportSession {
        self.resolved = true;
        match self.sessions.apply(&self.slug, event) {
            Ok(next) => next,
            Err(e) => {
                warn!(slug = %self.slug, error = %e, "export session out of sync");
                self.sessions.get(&self.slug)
            }
        }
    }
}

impl Drop for ExportGuard {
    fn drop(&mut self) {
        if !self.resolved {
            self.resolve(ExportEvent::Failed {
                message: "Export was interrupted".to_string(),
            });
        }
    }
}
