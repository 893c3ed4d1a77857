//! Console configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `ATELIER_LOG_FORMAT` - `json` or `pretty` (default: json)
//! - `ATELIER_STORAGE_KEY` - Name of the tenant storage slot (default: tenantId)
//! - `ATELIER_DEFAULT_LANDING` - Logical path opened after login (default: /dashboard)

use atelier_observability::LogFormat;
use atelier_tenancy::TenantStorage;
use thiserror::Error;

const DEFAULT_LANDING: &str = "/dashboard";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub log_format: LogFormat,
    pub storage_key: String,
    /// Logical (untenanted) path; tenant prefixing happens at navigation time.
    pub default_landing: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            storage_key: TenantStorage::DEFAULT_KEY.to_string(),
            default_landing: DEFAULT_LANDING.to_string(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get("ATELIER_LOG_FORMAT") {
            config.log_format = raw.parse::<LogFormat>().map_err(|e| {
                ConfigError::InvalidEnvVar("ATELIER_LOG_FORMAT".to_string(), e.to_string())
            })?;
        }

        if let Some(raw) = get("ATELIER_STORAGE_KEY") {
            config.storage_key = raw.trim().to_string();
        }

        if let Some(raw) = get("ATELIER_DEFAULT_LANDING") {
            let landing = raw.trim();
            if !landing.starts_with('/') {
                return Err(ConfigError::InvalidEnvVar(
                    "ATELIER_DEFAULT_LANDING".to_string(),
                    format!("'{landing}' must start with '/'"),
                ));
            }
            config.default_landing = landing.to_string();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ConsoleConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConsoleConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.storage_key, "tenantId");
        assert_eq!(config.default_landing, "/dashboard");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("ATELIER_LOG_FORMAT", "pretty"),
            ("ATELIER_STORAGE_KEY", "atelier.tenant"),
            ("ATELIER_DEFAULT_LANDING", "/products"),
        ])
        .unwrap();
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.storage_key, "atelier.tenant");
        assert_eq!(config.default_landing, "/products");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = load(&[("ATELIER_STORAGE_KEY", "  ")]).unwrap();
        assert_eq!(config.storage_key, "tenantId");
    }

    #[test]
    fn rejects_invalid_values() {
        let err = load(&[("ATELIER_LOG_FORMAT", "xml")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref var, _) if var == "ATELIER_LOG_FORMAT"));

        let err = load(&[("ATELIER_DEFAULT_LANDING", "dashboard")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref var, _) if var == "ATELIER_DEFAULT_LANDING"));
    }
}
