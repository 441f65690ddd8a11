//! Configuration handling for the TUI

use crate::service::DEFAULT_ADDRESS;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the configured service address
pub const SERVICE_URL_ENV: &str = "ASSET_SERVICE_URL";

/// Request timeout when none is configured
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Base address of the asset service
    pub service_url: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "asset-portfolio", "asset-tui")
}

/// Directory the interactive UI writes its log file to
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("logs"))
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Service address: command line flag, then environment, then file
    pub fn service_url(&self, flag: Option<&str>) -> String {
        let env = std::env::var(SERVICE_URL_ENV).ok();
        self.resolve_service_url(flag, env.as_deref())
    }

    fn resolve_service_url(&self, flag: Option<&str>, env: Option<&str>) -> String {
        flag.or(env)
            .or(self.service_url.as_deref())
            .unwrap_or(DEFAULT_ADDRESS)
            .to_string()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
