//! HTTP request handlers

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::error::TranscriptError;
use crate::state::AppState;
use crate::transcript::{render, TranscriptFormat};

/// HTTP error type
///
/// Every failure renders as a JSON body with a single `error` key.
#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Internal,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            HttpError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            HttpError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<TranscriptError> for HttpError {
    fn from(err: TranscriptError) -> Self {
        match err {
            TranscriptError::TranscriptsDisabled(video_id) => {
                tracing::error!("Transcripts are disabled for video ID: {}", video_id);
                HttpError::BadRequest("Transcripts are disabled for this video".to_string())
            }
            TranscriptError::NoTranscriptFound(video_id) => {
                tracing::error!("No transcript found for video ID: {}", video_id);
                HttpError::NotFound("No transcript available for this video".to_string())
            }
            TranscriptError::VideoUnavailable(video_id) => {
                tracing::error!("Video unavailable: {}", video_id);
                HttpError::NotFound("This video is unavailable".to_string())
            }
            // detail is logged but never returned to the caller
            other => {
                tracing::error!("Unexpected error: {}", other);
                HttpError::Internal
            }
        }
    }
}

/// Query parameters for the transcript endpoint
#[derive(Debug, Deserialize)]
pub struct TranscriptQuery {
    /// Video to fetch captions for
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,

    /// Output format: "txt" (default) or "srt"
    pub format: Option<String>,
}

/// Liveness endpoint
/// GET /status
pub async fn status() -> impl IntoResponse {
    Json(json!({ "status": "running" }))
}

/// Transcript download endpoint
/// GET /transcript?videoId=<id>&format=<txt|srt>
pub async fn download_transcript(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TranscriptQuery>,
) -> Result<Response, HttpError> {
    let video_id = query
        .video_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| HttpError::BadRequest("Missing videoId parameter".to_string()))?;

    let format = match query.format.as_deref() {
        None => TranscriptFormat::default(),
        Some(value) => TranscriptFormat::parse(value).ok_or_else(|| {
            HttpError::BadRequest("Invalid format. Use 'txt' or 'srt'.".to_string())
        })?,
    };

    let segments = state.source.fetch(&video_id).await?;
    let body = render(&segments, format);

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    let disposition = format!("attachment; filename=transcript.{}", format.extension());
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition).map_err(|_| HttpError::Internal)?,
    );

    Ok((headers, body).into_response())
}
