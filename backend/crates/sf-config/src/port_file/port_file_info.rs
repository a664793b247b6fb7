//! Port discovery file.
//!
//! The server writes `<config_dir>/server.json` after binding so the `sf`
//! CLI can find it without a `--server` flag. A file left behind by a
//! crashed server is detected by PID and removed on read.

use crate::{Config, ConfigError, ConfigErrorResult, port_file::is_process_running};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const PORT_FILENAME: &str = "server.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortFileInfo {
    pub pid: u32,
    pub port: u16,
    pub host: String,
    /// RFC 3339 start time
    pub started_at: String,
    pub version: String,
}

impl PortFileInfo {
    /// Base URL for HTTP clients
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn path() -> ConfigErrorResult<PathBuf> {
        Ok(Config::config_dir()?.join(PORT_FILENAME))
    }

    pub fn write(port: u16, host: &str) -> ConfigErrorResult<PathBuf> {
        Self::write_in(&Config::config_dir()?, port, host)
    }

    pub fn read_live() -> ConfigErrorResult<Option<PortFileInfo>> {
        Self::read_live_in(&Config::config_dir()?)
    }

    pub fn remove() -> ConfigErrorResult<()> {
        Self::remove_in(&Config::config_dir()?)
    }

    /// Write the file for this process.
    ///
    /// Refuses to overwrite the file of another live server.
    pub fn write_in(config_dir: &Path, port: u16, host: &str) -> ConfigErrorResult<PathBuf> {
        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        if let Some(existing) = Self::read_live_in(config_dir)?
            && existing.pid != std::process::id()
        {
            return Err(ConfigError::config(format!(
                "Another sf-server is already running on port {} (PID {})",
                existing.port, existing.pid
            )));
        }

        let info = PortFileInfo {
            pid: std::process::id(),
            port,
            host: host.to_string(),
            started_at: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        };

        let content = serde_json::to_string_pretty(&info)
            .map_err(|e| ConfigError::serde(format!("Failed to serialize port file: {e}")))?;

        let path = config_dir.join(PORT_FILENAME);
        std::fs::write(&path, content).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }

    /// `Ok(None)` when no file exists; `Err` when it exists but is unreadable
    pub fn read_in(config_dir: &Path) -> ConfigErrorResult<Option<PortFileInfo>> {
        let path = config_dir.join(PORT_FILENAME);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| ConfigError::serde(format!("Invalid port file {}: {e}", path.display())))
    }

    /// Like `read_in`, but stale files (dead PID) are removed and reported as `None`
    pub fn read_live_in(config_dir: &Path) -> ConfigErrorResult<Option<PortFileInfo>> {
        let Some(info) = Self::read_in(config_dir)? else {
            return Ok(None);
        };

        if !is_process_running(info.pid) {
            log::warn!(
                "Removing stale port file (pid {} no longer running)",
                info.pid
            );
            Self::remove_in(config_dir)?;
            return Ok(None);
        }

        Ok(Some(info))
    }

    pub fn remove_in(config_dir: &Path) -> ConfigErrorResult<()> {
        let path = config_dir.join(PORT_FILENAME);
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
        }
        Ok(())
    }
}
