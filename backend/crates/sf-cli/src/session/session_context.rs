//! Client session identity.
//!
//! The session is a single opaque key (the user's email). It is passed
//! explicitly to whatever needs it and torn down with `clear()`. When backed
//! by a directory it survives across runs in `session.json`.

use crate::CliClientResult;
use crate::ClientError;
use crate::session::session_file::{SESSION_FILENAME, SessionFile};

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    identity: Option<String>,
    path: Option<PathBuf>,
}

impl SessionContext {
    /// Not persisted; for embedding and tests
    pub fn in_memory(identity: Option<String>) -> Self {
        Self {
            identity,
            path: None,
        }
    }

    /// Read `<dir>/session.json`; a missing file means no session
    pub fn load_from(dir: &Path) -> CliClientResult<Self> {
        let path = dir.join(SESSION_FILENAME);

        let identity = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| {
                ClientError::session(format!("Failed to read {}: {}", path.display(), e))
            })?;
            let file: SessionFile = serde_json::from_str(&content).map_err(|e| {
                ClientError::session(format!("Invalid session file {}: {}", path.display(), e))
            })?;
            Some(file.email).filter(|email| !email.trim().is_empty())
        } else {
            None
        };

        Ok(Self {
            identity,
            path: Some(path),
        })
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.identity.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Set the identity and persist it if file-backed
    pub fn establish(&mut self, email: &str) -> CliClientResult<()> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ClientError::validation("email is required", Some("email")));
        }

        if let Some(ref path) = self.path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ClientError::session(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }

            let file = SessionFile {
                email: email.to_string(),
                established_at: chrono::Utc::now().to_rfc3339(),
            };
            let content = serde_json::to_string_pretty(&file).map_err(|e| {
                ClientError::session(format!("Failed to serialize session: {}", e))
            })?;
            std::fs::write(path, content).map_err(|e| {
                ClientError::session(format!("Failed to write {}: {}", path.display(), e))
            })?;
        }

        self.identity = Some(email.to_string());
        Ok(())
    }

    /// Forget the identity and delete the backing file
    pub fn clear(&mut self) -> CliClientResult<()> {
        self.identity = None;

        if let Some(ref path) = self.path
            && path.exists()
        {
            std::fs::remove_file(path).map_err(|e| {
                ClientError::session(format!("Failed to remove {}: {}", path.display(), e))
            })?;
        }

        Ok(())
    }
}
