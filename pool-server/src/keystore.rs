//! Persistence for the routing API credential.
//!
//! The browser original kept the key in local storage under a fixed name;
//! here it lives in a fixed-name file next to the server's data. Read once
//! at startup and on each enrichment run; written whenever the form supplies
//! a key. A missing or unreadable file just means "no key yet".

use std::path::{Path, PathBuf};

/// Fixed file name for the stored credential.
pub const KEY_FILE_NAME: &str = "routing.key";

/// Error writing the credential file.
#[derive(Debug, thiserror::Error)]
#[error("failed to write {path}: {source}")]
pub struct KeyStoreError {
    path: String,
    #[source]
    source: std::io::Error,
}

/// File-backed store for the single API credential.
#[derive(Debug, Clone)]
pub struct KeyStore {
    path: PathBuf,
}

impl KeyStore {
    /// Store the credential under `dir/routing.key`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(KEY_FILE_NAME),
        }
    }

    /// The stored key, if any. Whitespace is trimmed; an empty or missing
    /// file reads as `None`.
    pub fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let key = raw.trim();
                if key.is_empty() {
                    None
                } else {
                    Some(key.to_string())
                }
            }
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "no stored key");
                None
            }
        }
    }

    /// Persist a key, replacing any previous one.
    pub fn save(&self, key: &str) -> Result<(), KeyStoreError> {
        std::fs::write(&self.path, key).map_err(|source| KeyStoreError {
            path: self.path.display().to_string(),
            source,
        })
    }
}
