//! Async client for the Gemini text generation API

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::core::config::TranslatorConfig;
use crate::core::errors::{GenerationError, Result};

/// A backend that turns one prompt into one text payload
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt` in a single attempt
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Gemini `generateContent` client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: Arc<TranslatorConfig>,
}

impl GeminiClient {
    /// Create a new client; the timeout bounds every call
    pub fn new(config: TranslatorConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .build()
            .map_err(GenerationError::from)?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Model identifier used for every call
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)?;

        let body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }]
        });

        debug!("Sending generateContent request to model {}", self.config.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(GenerationError::from_transport)?;

        let status = response.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();

            if status_code == 429 || error_text.contains("RESOURCE_EXHAUSTED") || error_text.contains("quota") {
                return Err(GenerationError::QuotaExceededError { message: error_text });
            }

            return Err(GenerationError::ApiError {
                status: status_code,
                message: error_text,
            });
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GenerationError::TimeoutError
            } else {
                GenerationError::InvalidResponseError {
                    message: e.to_string(),
                }
            }
        })?;

        extract_text(&json)
    }
}

/// Concatenate the text parts of the first candidate
fn extract_text(json: &serde_json::Value) -> Result<String> {
    if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
        return Err(GenerationError::InvalidResponseError {
            message: format!("Prompt blocked: {}", reason),
        });
    }

    let parts = json["candidates"]
        .get(0)
        .and_then(|c| c["content"]["parts"].as_array())
        .ok_or_else(|| GenerationError::InvalidResponseError {
            message: "No candidates in response".to_string(),
        })?;

    let texts: Vec<&str> = parts.iter().filter_map(|p| p["text"].as_str()).collect();

    if texts.is_empty() {
        return Err(GenerationError::InvalidResponseError {
            message: "Candidate has no text parts".to_string(),
        });
    }

    Ok(texts.concat())
}
