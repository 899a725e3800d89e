//! Top-level application configuration.
//!
//! Configuration is stored in the platform config directory (for example
//! `~/.config/triage/config.yaml` on Linux) and includes:
//! - The base URL of the ticket API
//! - The request timeout for API calls
//!
//! The API URL can be overridden without touching the file, either through
//! the `TRIAGE_API_URL` environment variable or the global `--api-url` flag.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TriageError};

/// Environment variable that overrides the configured API URL.
pub const API_URL_ENV: &str = "TRIAGE_API_URL";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the ticket API (default: http://localhost:8000)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Override supplied on the command line, never persisted
    #[serde(skip)]
    api_url_override: Option<String>,
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout: default_request_timeout(),
            api_url_override: None,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("dev", "triage", "triage")
            .ok_or_else(|| TriageError::Config("Could not determine config directory".into()))?;
        Ok(dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            TriageError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure the config directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TriageError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            TriageError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        Ok(())
    }

    /// Attach a command-line API URL override
    pub fn with_api_url_override(mut self, api_url: Option<String>) -> Self {
        self.api_url_override = api_url;
        self
    }

    /// Get the API URL, honoring the command line and environment overrides
    pub fn api_url(&self) -> String {
        if let Some(url) = &self.api_url_override {
            return url.clone();
        }

        if let Ok(url) = env::var(API_URL_ENV)
            && !url.is_empty()
        {
            return url;
        }

        self.api_url.clone()
    }

    /// Set the API URL in the config file value
    pub fn set_api_url(&mut self, url: String) {
        self.api_url = url;
    }

    /// Get the request timeout duration
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout)
    }

    /// Set the request timeout in seconds
    pub fn set_request_timeout(&mut self, seconds: u64) {
        self.request_timeout = seconds;
    }
}
