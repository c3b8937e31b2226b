//! # Oracle Configuration
//!
//! Configuration for the external AI service.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     DINHO_API_KEY=...  (API_KEY and GEMINI_API_KEY also accepted)      │
//! │     DINHO_MODEL=gemini-2.5-flash                                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/mestre-dinho/oracle.toml (Linux)                         │
//! │     ~/Library/Application Support/br.mestre-dinho.sorte/... (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     No key: the oracle sleeps and fallback messages are shown          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # oracle.toml
//! [api]
//! key = "AIza..."
//! model = "gemini-2.5-flash"
//! base_url = "https://generativelanguage.googleapis.com/v1beta"
//!
//! [request]
//! timeout_secs = 20
//! max_retries = 2
//! initial_backoff_ms = 500
//! max_backoff_secs = 5
//! dream_temperature = 0.3
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{OracleError, OracleResult};

// =============================================================================
// API Settings
// =============================================================================

/// Where and how to reach the text-generation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// API key. `None` leaves the oracle asleep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Model name used in the `generateContent` path.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the REST API (without the `/models/...` suffix).
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            key: None,
            model: default_model(),
            base_url: default_base_url(),
        }
    }
}

// =============================================================================
// Request Settings
// =============================================================================

/// Timeouts, retries and sampling for each request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestSettings {
    /// Per-attempt timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Extra attempts after the first one for retryable failures.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial backoff between attempts (milliseconds).
    #[serde(default = "default_initial_backoff")]
    pub initial_backoff_ms: u64,

    /// Maximum backoff between attempts (seconds).
    #[serde(default = "default_max_backoff")]
    pub max_backoff_secs: u64,

    /// Sampling temperature for dream interpretation.
    #[serde(default = "default_dream_temperature")]
    pub dream_temperature: f32,
}

fn default_timeout() -> u64 {
    20
}
fn default_max_retries() -> u32 {
    2
}
fn default_initial_backoff() -> u64 {
    500
}
fn default_max_backoff() -> u64 {
    5
}
fn default_dream_temperature() -> f32 {
    0.3
}

impl Default for RequestSettings {
    fn default() -> Self {
        RequestSettings {
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            initial_backoff_ms: default_initial_backoff(),
            max_backoff_secs: default_max_backoff(),
            dream_temperature: default_dream_temperature(),
        }
    }
}

impl RequestSettings {
    /// Per-attempt timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Initial backoff as a `Duration`.
    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }

    /// Maximum backoff as a `Duration`.
    pub fn max_backoff(&self) -> Duration {
        Duration::from_secs(self.max_backoff_secs)
    }
}

// =============================================================================
// Main Oracle Configuration
// =============================================================================

/// Complete oracle configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Service location and credentials.
    #[serde(default)]
    pub api: ApiSettings,

    /// Request behavior.
    #[serde(default)]
    pub request: RequestSettings,
}

impl OracleConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (oracle.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> OracleResult<Self> {
        let mut config = Self::load_file(config_path)?;

        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads defaults and the config file only, without environment
    /// overrides or validation.
    pub fn load_file(config_path: Option<PathBuf>) -> OracleResult<Self> {
        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading oracle config from file");
                let contents = std::fs::read_to_string(&path)?;
                return Ok(toml::from_str(&contents)?);
            }
            debug!(?path, "Config file not found, using defaults");
        }

        Ok(Self::default())
    }

    /// Loads config without failing.
    ///
    /// An unreadable file falls back to defaults. Environment overrides are
    /// applied and the result validated again; an invalid result is still
    /// returned and the oracle built from it stays unavailable.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        let base = Self::load_file(config_path).unwrap_or_else(|e| {
            warn!("Failed to load oracle config: {}. Using defaults.", e);
            Self::default()
        });
        base.with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides and logs a validation failure.
    fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        self.apply_overrides(lookup);
        if let Err(e) = self.validate() {
            warn!(error = %e, "Oracle config is invalid, oracle will be unavailable");
        }
        self
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> OracleResult<PathBuf> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| OracleError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| OracleError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = self.to_toml()?;
        std::fs::write(&path, contents).map_err(|e| OracleError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Oracle config saved");
        Ok(path)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> OracleResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> OracleResult<()> {
        let base = Url::parse(&self.api.base_url)?;
        if base.scheme() != "https" && base.scheme() != "http" {
            return Err(OracleError::InvalidUrl(format!(
                "Service URL must start with http:// or https://, got: {}",
                self.api.base_url
            )));
        }

        if self.api.model.trim().is_empty() {
            return Err(OracleError::InvalidConfig("model must not be empty".into()));
        }

        if self.request.timeout_secs == 0 {
            return Err(OracleError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        if !(0.0..=2.0).contains(&self.request.dream_temperature) {
            return Err(OracleError::InvalidConfig(
                "dream_temperature must be between 0.0 and 2.0".into(),
            ));
        }

        Ok(())
    }

    /// Applies overrides from a variable lookup (the process environment
    /// in production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // API key, first match wins
        if let Some(key) = ["DINHO_API_KEY", "GEMINI_API_KEY", "API_KEY"]
            .iter()
            .find_map(|name| lookup(name).filter(|v| !v.trim().is_empty()))
        {
            debug!("Using API key from environment");
            self.api.key = Some(key);
        }

        if let Some(model) = lookup("DINHO_MODEL") {
            debug!(model = %model, "Overriding model from environment");
            self.api.model = model;
        }

        if let Some(url) = lookup("DINHO_API_URL") {
            debug!(url = %url, "Overriding service URL from environment");
            self.api.base_url = url;
        }

        if let Some(secs) = lookup("DINHO_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.request.timeout_secs = s,
                Err(_) => warn!(value = %secs, "Ignoring invalid DINHO_TIMEOUT_SECS"),
            }
        }

        if let Some(retries) = lookup("DINHO_MAX_RETRIES") {
            match retries.parse::<u32>() {
                Ok(r) => self.request.max_retries = r,
                Err(_) => warn!(value = %retries, "Ignoring invalid DINHO_MAX_RETRIES"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("br", "mestre-dinho", "sorte")
            .map(|dirs| dirs.config_dir().join("oracle.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Returns the API key if one is configured.
    pub fn api_key(&self) -> Option<&str> {
        self.api.key.as_deref().filter(|k| !k.trim().is_empty())
    }

    /// Returns true if an API key is available.
    pub fn has_credentials(&self) -> bool {
        self.api_key().is_some()
    }

    /// Returns a copy safe to print (key masked).
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if let Some(key) = &copy.api.key {
            let visible: String = key.chars().take(4).collect();
            copy.api.key = Some(format!("{}…", visible));
        }
        copy
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
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = OracleConfig::default();
        assert!(!config.has_credentials());
        assert_eq!(config.api.model, "gemini-2.5-flash");
        assert_eq!(config.request.timeout_secs, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = OracleConfig::default();
        config.apply_overrides(env(&[
            ("API_KEY", "legacy-key"),
            ("DINHO_MODEL", "gemini-2.0-flash"),
            ("DINHO_TIMEOUT_SECS", "5"),
            ("DINHO_MAX_RETRIES", "not-a-number"),
        ]));
        assert_eq!(config.api_key(), Some("legacy-key"));
        assert_eq!(config.api.model, "gemini-2.0-flash");
        assert_eq!(config.request.timeout_secs, 5);
        assert_eq!(config.request.max_retries, 2);
    }

    #[test]
    fn test_preferred_key_wins() {
        let mut config = OracleConfig::default();
        config.apply_overrides(env(&[("API_KEY", "old"), ("DINHO_API_KEY", "new")]));
        assert_eq!(config.api_key(), Some("new"));
    }

    #[test]
    fn test_blank_key_is_no_key() {
        let mut config = OracleConfig::default();
        config.apply_overrides(env(&[("DINHO_API_KEY", "   ")]));
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_config_validation() {
        let mut config = OracleConfig::default();
        config.api.base_url = "ftp://example.com".into();
        assert!(config.validate().is_err());

        config.api.base_url = "not a url".into();
        assert!(matches!(config.validate(), Err(OracleError::InvalidUrl(_))));

        config.api.base_url = "http://localhost:8080/v1beta".into();
        assert!(config.validate().is_ok());

        config.request.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip_keeps_sections() {
        let toml_str = r#"
            [api]
            key = "abc123"

            [request]
            max_retries = 0
        "#;
        let config: OracleConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api_key(), Some("abc123"));
        assert_eq!(config.api.model, "gemini-2.5-flash");
        assert_eq!(config.request.max_retries, 0);

        let written = config.to_toml().unwrap();
        assert!(written.contains("[api]"));
        assert!(written.contains("[request]"));
    }

    #[test]
    fn test_fallback_keeps_invalid_overrides_visible() {
        let config = OracleConfig::default().with_overrides(env(&[
            ("DINHO_API_KEY", "x"),
            ("DINHO_API_URL", "not a url"),
        ]));
        assert_eq!(config.api_key(), Some("x"));
        assert!(matches!(config.validate(), Err(OracleError::InvalidUrl(_))));

        let mut from_file = OracleConfig::default();
        from_file.api.key = Some("file-key".into());
        from_file.api.base_url = "not a url".into();
        let config = from_file.with_overrides(env(&[]));
        assert_eq!(config.api_key(), Some("file-key"));
        assert!(config.validate().is_err());

        let config = OracleConfig::default().with_overrides(env(&[("DINHO_API_KEY", "x")]));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_redacted() {
        let mut config = OracleConfig::default();
        config.api.key = Some("AIzaSecretValue".into());
        assert_eq!(config.redacted().api.key.as_deref(), Some("AIza…"));
    }
}
