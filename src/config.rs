//! Configuration handling for the TUI

use crate::api::DEFAULT_BASE_URL;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the prediction service address
pub const BACKEND_URL_ENV: &str = "CARPRICE_BACKEND_URL";

/// Log file name used when no path is configured
const DEFAULT_LOG_FILE: &str = "carprice-tui.log";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Prediction service base URL
    pub backend_url: Option<String>,
    /// Where diagnostic logs are written
    pub log_file: Option<PathBuf>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "carprice", "carprice-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Resolve the service address: environment, then config file, then default
    pub fn backend_url(&self) -> String {
        resolve_backend_url(std::env::var(BACKEND_URL_ENV).ok(), self)
    }

    /// Resolve the log file path, if any location is available
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_local_dir().join(DEFAULT_LOG_FILE))
        })
    }
}

fn resolve_backend_url(env_value: Option<String>, config: &TuiConfig) -> String {
    env_value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| config.backend_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.backend_url.is_none());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            backend_url: Some("http://localhost:5000".to_string()),
            log_file: Some(PathBuf::from("/tmp/carprice.log")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.backend_url,
            Some("http://localhost:5000".to_string())
        );
        assert_eq!(parsed.log_file, Some(PathBuf::from("/tmp/carprice.log")));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.backend_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"backend_url": "http://localhost:5000", "theme": "dark"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.backend_url,
            Some("http://localhost:5000".to_string())
        );
    }

    #[test]
    fn test_backend_url_falls_back_to_default() {
        let config = TuiConfig::default();
        assert_eq!(resolve_backend_url(None, &config), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_backend_url_from_config() {
        let config = TuiConfig {
            backend_url: Some("http://config:5000".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_backend_url(None, &config), "http://config:5000");
    }

    #[test]
    fn test_env_overrides_config() {
        let config = TuiConfig {
            backend_url: Some("http://config:5000".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_backend_url(Some("http://env:5000".to_string()), &config),
            "http://env:5000"
        );
        assert_eq!(
            resolve_backend_url(Some("  ".to_string()), &config),
            "http://config:5000"
        );
    }

    #[test]
    fn test_configured_log_path_wins() {
        let config = TuiConfig {
            log_file: Some(PathBuf::from("/var/log/carprice.log")),
            ..Default::default()
        };
        assert_eq!(
            config.log_path(),
            Some(PathBuf::from("/var/log/carprice.log"))
        );
    }

    #[test]
    fn test_load_returns_ok_when_no_file() {
        // Load should return default config when file doesn't exist
        let result = TuiConfig::load();
        tokio_test::assert_ok!(result);
    }
}
