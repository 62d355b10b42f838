//! LyricRelay server entry point

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lyric_relay::application::TranslateLyricsUseCase;
use lyric_relay::domain::config::{
    AppConfig, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TRANSCRIPTION_MODEL,
    DEFAULT_TRANSLATION_MODEL,
};
use lyric_relay::infrastructure::{
    GroqTranscriber, GroqTranslator, HttpAudioFetcher, TempDirStaging,
};
use lyric_relay::server::{create_router, AppState};

/// Audio-to-translated-lyrics HTTP service
#[derive(Debug, Parser)]
#[command(name = "lyric-relay", version, about)]
struct Args {
    /// Groq API key
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Address to bind the HTTP server to
    #[arg(long, env = "LYRIC_RELAY_BIND", default_value = "0.0.0.0:3000")]
    bind: String,

    /// Speech-to-text model
    #[arg(long, env = "LYRIC_RELAY_TRANSCRIPTION_MODEL", default_value = DEFAULT_TRANSCRIPTION_MODEL)]
    transcription_model: String,

    /// Text-generation model for translation
    #[arg(long, env = "LYRIC_RELAY_TRANSLATION_MODEL", default_value = DEFAULT_TRANSLATION_MODEL)]
    translation_model: String,

    /// Timeout in seconds applied to each outbound call
    #[arg(long, env = "LYRIC_RELAY_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    request_timeout_secs: u64,

    /// Directory for staged audio files (system temp dir when unset)
    #[arg(long, env = "LYRIC_RELAY_STAGING_DIR")]
    staging_dir: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> AppConfig {
        AppConfig {
            api_key: self.api_key,
            bind_addr: self.bind,
            transcription_model: self.transcription_model,
            translation_model: self.translation_model,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            staging_dir: self.staging_dir,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().into_config();

    tracing::info!("Starting LyricRelay v{}", env!("CARGO_PKG_VERSION"));

    // External API clients are constructed once and shared read-only
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;

    let fetcher = HttpAudioFetcher::new(client.clone());
    let staging = match &config.staging_dir {
        Some(dir) => TempDirStaging::in_dir(dir),
        None => TempDirStaging::new(),
    };
    let transcriber = GroqTranscriber::new(client.clone(), &config.api_key)
        .with_model(&config.transcription_model);
    let translator =
        GroqTranslator::new(client, &config.api_key).with_model(&config.translation_model);

    let pipeline = TranslateLyricsUseCase::new(fetcher, staging, transcriber, translator);
    let app = create_router(AppState::new(pipeline));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
