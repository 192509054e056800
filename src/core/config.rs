//! Configuration management

use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// Default Gemini REST base URL
pub const DEFAULT_API_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default generation model
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Default per-request timeout for the generative API
pub const DEFAULT_TIMEOUT_MS: u64 = 30000;

/// Configuration for translator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranslatorConfig {
    /// Gemini API key; absence is only noticed when a request is made
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of the generative API
    pub api_endpoint: String,
    /// Model identifier sent with every call
    pub model: String,
    /// Upper bound for a single API call, in milliseconds
    pub timeout_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let api_endpoint = std::env::var("GEMINI_API_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string());

        let model = std::env::var("GEMINI_MODEL")
            .unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_MS.to_string())
            .parse::<u64>()
            .map_err(|e| anyhow::anyhow!("REQUEST_TIMEOUT_MS must be a number: {}", e))?;

        Ok(Self {
            api_key,
            api_endpoint,
            model,
            timeout_ms,
        })
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise from the environment
    ///
    /// A file without `api_key` still picks up `GOOGLE_API_KEY`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Self::from_env();
        };

        let mut config = Self::from_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))?;

        if config.api_key.is_none() {
            config.api_key = std::env::var("GOOGLE_API_KEY")
                .ok()
                .filter(|key| !key.is_empty());
        }

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Override the API key, e.g. from the command line
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Validate configuration
    ///
    /// A missing API key is not an error here: requests fail with the
    /// generic translation error instead.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_endpoint.is_empty() {
            return Err(anyhow::anyhow!("API endpoint is required"));
        }

        if self.model.is_empty() {
            return Err(anyhow::anyhow!("Model identifier is required"));
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        if self.api_key.is_none() {
            warn!("GOOGLE_API_KEY is not set; translation requests will fail");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = TranslatorConfig::default().with_api_key("test_key");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_allows_missing_key() {
        let config = TranslatorConfig::default();
        assert!(config.api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_rejects_bad_values() {
        let config = TranslatorConfig {
            api_endpoint: "".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = TranslatorConfig {
            model: "".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = TranslatorConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translator.json");
        std::fs::write(
            &path,
            r#"{"api_key":"file_key","api_endpoint":"http://localhost:9000","model":"gemini-2.0-flash","timeout_ms":5000}"#,
        )
        .unwrap();

        let loaded = TranslatorConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(
            loaded,
            TranslatorConfig {
                api_endpoint: "http://localhost:9000".to_string(),
                model: "gemini-2.0-flash".to_string(),
                timeout_ms: 5000,
                ..Default::default()
            }
            .with_api_key("file_key")
        );
    }

    #[test]
    fn test_load_file_without_key_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translator.json");
        std::fs::write(
            &path,
            r#"{"api_endpoint":"http://localhost:9000","model":"m","timeout_ms":100}"#,
        )
        .unwrap();

        let loaded = TranslatorConfig::from_file(&path).unwrap();
        assert_eq!(loaded.api_key, None);
        assert_eq!(loaded.api_endpoint, "http://localhost:9000");
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = TranslatorConfig::load(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }
}
