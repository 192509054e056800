//! Vibe Coding translator - explains technical terms as a definition plus a metaphor
//!
//! This library builds a fixed few-shot prompt for a term, sends it to the
//! Gemini text generation API and serves the cleaned result over HTTP.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;
pub mod server;
pub mod cli;

// Re-export key types for convenience
pub use core::{
    client::{GeminiClient, TextGenerator},
    config::TranslatorConfig,
    models::{TranslationRequest, TranslationResponse},
    errors::{GenerationError, TranslateError},
    service::TranslationService,
};

