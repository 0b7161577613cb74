#![allow(dead_code)]

//! Application state shared across request handlers
//!
//! Built once at startup and never mutated afterwards; requests share it
//! behind an `Arc`.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::fetch::{TranscriptSource, YouTubeClient};

/// State shared by all request handlers
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,

    /// Upstream transcript source
    pub source: Arc<dyn TranscriptSource>,
}

impl AppState {
    /// Create application state backed by the real YouTube client
    pub fn new(config: ServerConfig) -> Result<Self> {
        let source = Arc::new(YouTubeClient::new()?);
        Ok(Self { config, source })
    }

    /// Create application state with a custom transcript source
    pub fn with_source(config: ServerConfig, source: Arc<dyn TranscriptSource>) -> Self {
        Self { config, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_state() {
        let state = AppState::new(ServerConfig::default()).unwrap();
        assert_eq!(state.config.port, 5000);
    }
}
