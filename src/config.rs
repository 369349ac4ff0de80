//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default plan service endpoint
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000/api/diet";

/// Default transport timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable overriding the service endpoint
pub const SERVICE_URL_ENV: &str = "DIET_SERVICE_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Plan service endpoint
    pub service_url: Option<String>,
    /// Transport timeout for one plan request
    pub request_timeout_secs: Option<u64>,
}

/// Resolved settings for the plan service client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub url: String,
    pub timeout: Duration,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "dietplan", "diet-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Log file path under the local data directory
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("diet-tui.log"))
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

    /// Load configuration, falling back to defaults on a broken file
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {e:#}");
                Self::default()
            }
        }
    }

    /// Resolve service settings, with `env_url` taking precedence over the file
    pub fn service_settings(&self, env_url: Option<String>) -> ServiceSettings {
        let url = env_url
            .filter(|u| !u.trim().is_empty())
            .or_else(|| self.service_url.clone())
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
        let secs = self
            .request_timeout_secs
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        ServiceSettings {
            url,
            timeout: Duration::from_secs(secs),
        }
    }

    /// Resolve service settings using the process environment
    pub fn service_settings_from_env(&self) -> ServiceSettings {
        self.service_settings(std::env::var(SERVICE_URL_ENV).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.service_url.is_none());
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            service_url: Some("http://diet.internal:8080/api/diet".to_string()),
            request_timeout_secs: Some(15),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.service_url,
            Some("http://diet.internal:8080/api/diet".to_string())
        );
        assert_eq!(parsed.request_timeout_secs, Some(15));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.service_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"service_url": "http://x/api/diet", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.service_url, Some("http://x/api/diet".to_string()));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = TuiConfig::default().service_settings(None);
        assert_eq!(
            settings,
            ServiceSettings {
                url: DEFAULT_SERVICE_URL.to_string(),
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            }
        );
    }

    #[test]
    fn test_settings_from_file() {
        let config = TuiConfig {
            service_url: Some("http://file/api/diet".to_string()),
            request_timeout_secs: Some(5),
        };
        let settings = config.service_settings(None);
        assert_eq!(settings.url, "http://file/api/diet");
        assert_eq!(settings.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_env_url_wins_over_file() {
        let config = TuiConfig {
            service_url: Some("http://file/api/diet".to_string()),
            ..Default::default()
        };
        let settings = config.service_settings(Some("http://env/api/diet".to_string()));
        assert_eq!(settings.url, "http://env/api/diet");
    }

    #[test]
    fn test_blank_env_url_is_ignored() {
        let settings = TuiConfig::default().service_settings(Some("  ".to_string()));
        assert_eq!(settings.url, DEFAULT_SERVICE_URL);
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let config = TuiConfig {
            request_timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(
            config.service_settings(None).timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_load_returns_ok_without_file() {
        // Passes whether or not a user config exists, as long as it parses
        let _ = TuiConfig::load_or_default();
    }

    #[test]
    fn test_log_path_has_file_name() {
        if let Some(path) = TuiConfig::log_path() {
            assert!(path.ends_with("diet-tui.log"));
        }
    }
}
