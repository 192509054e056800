//! Main entry point for the Vibe Coding translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vibe_translator::cli::commands::{self, Commands};
use vibe_translator::TranslatorConfig;

/// Vibe Coding translator - explains technical terms with metaphors
#[derive(Parser, Debug)]
#[command(name = "vibe-translator", version, about, long_about = None)]
struct Args {
    /// API key for Gemini (optional, defaults to GOOGLE_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// JSON configuration file (defaults to environment variables)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}={},tower_http={}",
                    env!("CARGO_CRATE_NAME"),
                    log_level,
                    log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = TranslatorConfig::load(args.config.as_deref())?;

    // Override config with CLI args if provided
    if let Some(api_key) = args.api_key {
        config = config.with_api_key(api_key);
    }

    match args.command {
        Some(Commands::Server { host, port, debug }) => {
            commands::handle_server(config, host, port, debug).await?;
        }
        Some(Commands::Translate { term }) => {
            commands::handle_translate(config, term).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
