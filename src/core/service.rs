//! Term translation service

use std::sync::Arc;
use tracing::{debug, error};

use crate::core::client::{GeminiClient, TextGenerator};
use crate::core::config::TranslatorConfig;
use crate::core::errors::TranslateError;
use crate::core::models::TranslationResponse;
use crate::core::prompt::{build_prompt, sanitize_translation};

/// Translates technical terms through a [`TextGenerator`]
///
/// Holds only read-only handles, so one instance is shared by every request.
#[derive(Clone)]
pub struct TranslationService {
    generator: Arc<dyn TextGenerator>,
}

impl TranslationService {
    /// Create a service on top of any generator
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Create a service backed by Gemini
    pub fn gemini(config: TranslatorConfig) -> anyhow::Result<Self> {
        Ok(Self::new(Arc::new(GeminiClient::new(config)?)))
    }

    /// Translate `term` into a definition + metaphor phrase
    pub async fn translate(&self, term: &str) -> Result<TranslationResponse, TranslateError> {
        if term.is_empty() {
            return Err(TranslateError::Validation);
        }

        let prompt = build_prompt(term);

        match self.generator.generate(&prompt).await {
            Ok(raw) => {
                debug!("Translated '{}'", term);
                Ok(TranslationResponse {
                    term: term.to_string(),
                    translation: sanitize_translation(&raw),
                })
            }
            Err(e) => {
                error!("An error occurred: {}", e);
                Err(TranslateError::Failure)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::core::errors::GenerationError;

    /// Generator stub that replays a fixed outcome and records prompts
    pub(crate) struct StubGenerator {
        reply: std::result::Result<String, String>,
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl StubGenerator {
        pub(crate) fn ok(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub(crate) fn last_prompt(&self) -> Option<String> {
            self.prompts.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, prompt: &str) -> crate::core::errors::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(GenerationError::NetworkError {
                    message: message.clone(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_translate_sanitizes_output() {
        let stub = StubGenerator::ok("  *정의* 비유  ");
        let service = TranslationService::new(stub.clone());

        let response = service.translate("API").await.unwrap();
        assert_eq!(response.term, "API");
        assert_eq!(response.translation, "정의 비유");
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_translate_echoes_term_exactly() {
        let stub = StubGenerator::ok("정의. 비유.");
        let service = TranslationService::new(stub.clone());

        for term in ["  padded  ", "오픈소스 (Open Source)", "*", "\t"] {
            let response = service.translate(term).await.unwrap();
            assert_eq!(response.term, term);
        }
    }

    #[tokio::test]
    async fn test_translate_sends_built_prompt() {
        let stub = StubGenerator::ok("x");
        let service = TranslationService::new(stub.clone());

        service.translate("Docker").await.unwrap();
        assert_eq!(stub.last_prompt().as_deref(), Some(build_prompt("Docker").as_str()));
    }

    #[tokio::test]
    async fn test_empty_term_fails_fast() {
        let stub = StubGenerator::ok("unused");
        let service = TranslationService::new(stub.clone());

        assert_eq!(service.translate("").await, Err(TranslateError::Validation));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_generator_failure_is_generic() {
        let stub = StubGenerator::failing("connection reset by peer");
        let service = TranslationService::new(stub.clone());

        let err = service.translate("Git").await.unwrap_err();
        assert_eq!(err, TranslateError::Failure);
        assert!(!err.to_string().contains("connection reset"));
        assert_eq!(stub.calls(), 1);
    }

    #[test]
    fn test_translate_blocking() {
        let service = TranslationService::new(StubGenerator::ok("**코드** 세이브 파일\n"));
        let response = tokio_test::block_on(service.translate("Git")).unwrap();
        assert_eq!(response.translation, "코드 세이브 파일");
    }
}
