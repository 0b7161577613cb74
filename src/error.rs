use thiserror::Error;

/// Main error type for the transcript server
///
/// The first three variants are the named upstream outcomes the HTTP layer
/// maps to specific status codes; everything else is an unclassified fault.
#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("Transcripts are disabled for video: {0}")]
    TranscriptsDisabled(String),

    #[error("No transcript found for video: {0}")]
    NoTranscriptFound(String),

    #[error("Video unavailable: {0}")]
    VideoUnavailable(String),

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Player response error: {0}")]
    PlayerResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TranscriptError>;
