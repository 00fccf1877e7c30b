//! Configuration Module
//!
//! This module contains the dashboard configuration: a TOML file with
//! environment-variable and CLI overrides layered on top. Resolution order,
//! lowest to highest: built-in defaults, config file, `SEMANTIQ_API_URL`,
//! command-line flags.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "SEMANTIQ_API_URL";

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "semantiq-dash.toml";

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// Base URL of the benchmark API, including the `/api` prefix
    pub api_base_url: String,
    /// Log file path; logs go to a file because stdout belongs to the TUI
    pub log_file: PathBuf,
    /// Event-loop poll interval in milliseconds
    pub tick_millis: u64,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000/api".to_string(),
            log_file: PathBuf::from("semantiq-dash.log"),
            tick_millis: 50,
        }
    }
}

impl DashConfig {
    /// Load configuration. An explicitly given path must exist; the default
    /// path is optional and silently skipped when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !path.exists() {
            if required {
                return Err(anyhow!("config file not found: {}", path.display()));
            }
            debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: DashConfig = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply environment overrides
    pub fn apply_env(&mut self) {
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.is_empty() {
                self.api_base_url = url;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DashConfig::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000/api");
        assert_eq!(config.tick_millis, 50);
    }

    #[test]
    fn test_load_missing_default_path_uses_defaults() {
        let config = DashConfig::load(None).unwrap();
        assert_eq!(config, DashConfig::default());
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let result = DashConfig::load(Some(Path::new("/nonexistent/semantiq.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dash.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "api_base_url = \"http://10.0.0.5:8000/api\"").unwrap();

        let config = DashConfig::load(Some(&path)).unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.5:8000/api");
        assert_eq!(config.tick_millis, 50);
    }

    #[test]
    fn test_load_invalid_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dash.toml");
        fs::write(&path, "api_base_url = [not toml").unwrap();
        assert!(DashConfig::load(Some(&path)).is_err());
    }
}
