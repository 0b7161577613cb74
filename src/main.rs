//! Transcript Download Server
//!
//! A small HTTP service that fetches a video's captions from YouTube and
//! re-renders them as a downloadable SubRip (.srt) or timestamped
//! plain-text (.txt) transcript.

mod config;
mod error;
mod fetch;
mod http;
mod state;
mod transcript;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::error::{Result, TranscriptError};
use crate::http::create_router;
use crate::state::AppState;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "transcript-server";

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration before logging so the configured level can seed
    // the default filter; any load warning is emitted right after init.
    let (config, config_warning) = load_config();

    init_logging(&config.log_level);

    tracing::info!("{} v{} starting", APP_NAME, VERSION);
    if let Some(warning) = config_warning {
        tracing::warn!("{}", warning);
    }

    // Environment overrides are applied after logging is up so a bad PORT
    // value can be reported.
    let config = config.apply_env();
    tracing::info!("Configuration loaded: {:?}", config);

    // Create application state
    let state = Arc::new(AppState::new(config.clone())?);

    // Build router
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = config
        .socket_addr()
        .parse()
        .map_err(|e| TranscriptError::Config(format!("Invalid bind address: {}", e)))?;
    tracing::info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load configuration from the optional TOML file named by the first CLI
/// argument (default `config.toml`)
///
/// Returns the configuration plus a warning to log once logging is up.
fn load_config() -> (ServerConfig, Option<String>) {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let (config, warning) = if std::path::Path::new(&config_path).exists() {
        match ServerConfig::from_file(&config_path) {
            Ok(config) => (config, None),
            Err(e) => (
                ServerConfig::default(),
                Some(format!(
                    "Failed to load config file {}: {}. Using defaults.",
                    config_path, e
                )),
            ),
        }
    } else {
        (ServerConfig::default(), None)
    };

    (config, warning)
}

/// Initialize logging with tracing
fn init_logging(default_level: &str) {
    let default_filter = format!(
        "transcript_server={},tower_http={}",
        default_level, default_level
    );

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
