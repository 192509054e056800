//! CLI command definitions and handlers

use clap::Subcommand;
use std::sync::Arc;
use tracing::info;

use crate::core::client::GeminiClient;
use crate::core::config::TranslatorConfig;
use crate::core::service::TranslationService;

/// Commands for Vibe Coding translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP API server
    Server {
        /// Bind address (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,

        /// Enable debug mode
        #[arg(long)]
        debug: bool,
    },

    /// Translate a single term and print the result
    Translate {
        /// Technical term to translate
        term: String,
    },
}

/// Handle server command
pub async fn handle_server(
    config: TranslatorConfig,
    host: String,
    port: u16,
    debug: bool,
) -> anyhow::Result<()> {
    use crate::server::api::run_server;

    if debug {
        info!("Debug mode enabled (configuration: {:?})", redacted(&config));
    }

    let client = GeminiClient::new(config)?;
    info!("Using model {}", client.model());
    let service = TranslationService::new(Arc::new(client));

    println!("🚀 Server starting on http://{}:{}", host, port);
    println!("📄 API Documentation: http://{}:{}/docs", host, port);

    run_server(service, host, port).await?;

    Ok(())
}

/// Handle translate command
pub async fn handle_translate(config: TranslatorConfig, term: String) -> anyhow::Result<()> {
    let service = TranslationService::gemini(config)?;

    let response = service.translate(&term).await?;
    println!("{}: {}", response.term, response.translation);

    Ok(())
}

/// Copy of the configuration safe to print
fn redacted(config: &TranslatorConfig) -> TranslatorConfig {
    TranslatorConfig {
        api_key: config.api_key.as_ref().map(|_| "***".to_string()),
        ..config.clone()
    }
}
