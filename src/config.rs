//! Configuration handling for the TUI

use crate::lookup::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment override for the lookup service address
pub const LOOKUP_URL_ENV: &str = "SIGNUP_LOOKUP_URL";
/// Environment override for the lookup timeout, in milliseconds
pub const LOOKUP_TIMEOUT_ENV: &str = "SIGNUP_LOOKUP_TIMEOUT_MS";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SignupConfig {
    /// Lookup service base URL
    pub lookup_base_url: Option<String>,
    /// Lookup timeout in milliseconds
    pub lookup_timeout_ms: Option<u64>,
}

impl SignupConfig {
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("br", "signup", "signup-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config file, then apply
    /// environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from `path`, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var(LOOKUP_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.lookup_base_url = Some(url);
        }
        match var(LOOKUP_TIMEOUT_ENV).map(|v| v.trim().parse::<u64>()) {
            Some(Ok(ms)) => self.lookup_timeout_ms = Some(ms),
            Some(Err(err)) => tracing::warn!("Ignoring {LOOKUP_TIMEOUT_ENV}: {err}"),
            None => {}
        }
    }

    pub fn lookup_base_url(&self) -> &str {
        self.lookup_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn lookup_timeout(&self) -> Duration {
        self.lookup_timeout_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = SignupConfig::default();
        assert!(config.lookup_base_url.is_none());
        assert!(config.lookup_timeout_ms.is_none());
        assert_eq!(config.lookup_base_url(), "https://viacep.com.br");
        assert_eq!(config.lookup_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: SignupConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, SignupConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"lookup_timeout_ms": 1500, "unknown_field": "value"}"#;
        let parsed: SignupConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.lookup_timeout(), Duration::from_millis(1500));
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let config = SignupConfig {
            lookup_timeout_ms: Some(0),
            ..Default::default()
        };
        assert_eq!(config.lookup_timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = SignupConfig {
            lookup_base_url: Some("http://file".to_string()),
            lookup_timeout_ms: Some(1000),
        };
        config.apply_env_overrides(env(&[
            (LOOKUP_URL_ENV, "http://localhost:8080"),
            (LOOKUP_TIMEOUT_ENV, "250"),
        ]));
        assert_eq!(config.lookup_base_url(), "http://localhost:8080");
        assert_eq!(config.lookup_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_env_timeout_is_ignored() {
        let mut config = SignupConfig {
            lookup_timeout_ms: Some(1000),
            ..Default::default()
        };
        config.apply_env_overrides(env(&[(LOOKUP_TIMEOUT_ENV, "soon"), (LOOKUP_URL_ENV, "  ")]));
        assert_eq!(config.lookup_timeout(), Duration::from_millis(1000));
        assert!(config.lookup_base_url.is_none());
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let path = std::env::temp_dir().join("signup-tui-does-not-exist.json");
        assert_eq!(SignupConfig::load_from(&path).unwrap(), SignupConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("signup-tui-config-{}.json", std::process::id()));
        fs::write(&path, r#"{"lookup_base_url": "http://127.0.0.1:9000"}"#).unwrap();
        let config = SignupConfig::load_from(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(config.lookup_base_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_load_from_invalid_file_errors() {
        let path = std::env::temp_dir().join(format!("signup-tui-bad-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        let result = SignupConfig::load_from(&path);
        fs::remove_file(&path).ok();
        assert!(result.is_err());
    }
}
