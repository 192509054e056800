//! Core data models for translation

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Translation request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslationRequest {
    /// Technical term to translate
    #[schema(example = "API")]
    pub term: String,
}

/// Translation response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslationResponse {
    /// The term exactly as submitted
    pub term: String,
    /// Definition + metaphor produced by the model
    #[schema(example = "프로그램 간의 통신 규칙. 식당의 정해진 메뉴판.")]
    pub translation: String,
}

/// Static payload served from `/`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WelcomeMessage {
    /// Greeting pointing at the API docs
    pub message: String,
}

/// Error body, shaped as `{"detail": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub detail: String,
}
