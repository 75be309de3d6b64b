//! Append-only status log surfaced in the UI.
//!
//! Enrichment outcomes are reported here rather than thrown: one batch's
//! failure never blocks other batches or later interactions. Entries are
//! only ever appended during a session.

use std::sync::Arc;

use tokio::sync::RwLock;

/// Severity of a status entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

impl StatusLevel {
    /// Lowercase label, also used as a CSS class.
    pub fn label(&self) -> &'static str {
        match self {
            StatusLevel::Info => "info",
            StatusLevel::Warning => "warning",
            StatusLevel::Error => "error",
        }
    }
}

/// One reported event.
#[derive(Debug, Clone)]
pub struct StatusEntry {
    /// Append position, starting at 0.
    pub seq: usize,
    pub level: StatusLevel,
    pub message: String,
}

/// Shared append-only log.
#[derive(Clone, Default)]
pub struct StatusLog {
    entries: Arc<RwLock<Vec<StatusEntry>>>,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an informational entry.
    pub async fn info(&self, message: impl Into<String>) {
        self.push(StatusLevel::Info, message.into()).await;
    }

    /// Append a warning entry.
    pub async fn warning(&self, message: impl Into<String>) {
        self.push(StatusLevel::Warning, message.into()).await;
    }

    /// Append an error entry.
    pub async fn error(&self, message: impl Into<String>) {
        self.push(StatusLevel::Error, message.into()).await;
    }

    async fn push(&self, level: StatusLevel, message: String) {
        match level {
            StatusLevel::Info => tracing::info!(%message, "status"),
            StatusLevel::Warning => tracing::warn!(%message, "status"),
            StatusLevel::Error => tracing::error!(%message, "status"),
        }

        let mut entries = self.entries.write().await;
        let seq = entries.len();
        entries.push(StatusEntry {
            seq,
            level,
            message,
        });
    }

    /// All entries so far, oldest first.
    pub async fn snapshot(&self) -> Vec<StatusEntry> {
        self.entries.read().await.clone()
    }

    /// Number of entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
