//! YouTube caption client
//!
//! Reproduces the lookup a browser performs: fetch the watch page, pull the
//! caption track list out of the embedded player response, then download the
//! selected track as json3.

use async_trait::async_trait;
use reqwest::header;

use crate::error::{Result, TranscriptError};
use crate::transcript::CaptionSegment;

use super::player::{segments_from_json3, CaptionTrack, Json3Transcript, PlayerCaptions};
use super::TranscriptSource;

/// Production watch-page endpoint
const DEFAULT_BASE_URL: &str = "https://www.youtube.com";

/// Unknown agents get a consent interstitial instead of the player response
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:128.0) Gecko/20100101 Firefox/128.0";

/// Client for fetching caption tracks from YouTube
pub struct YouTubeClient {
    http: reqwest::Client,
    base_url: String,
}

impl YouTubeClient {
    /// Create a client against the production endpoint
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_watch_page(&self, video_id: &str) -> Result<String> {
        let response = self
            .http
            .get(format!("{}/watch", self.base_url))
            .query(&[("v", video_id)])
            .header(header::ACCEPT_LANGUAGE, "en-US")
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }

    /// Locate the caption track list in the watch page HTML, classifying the
    /// page when there is none
    ///
    /// The player response is embedded as one large JSON literal; the
    /// `"captions"` object sits between the `"captions":` key and the
    /// following `,"videoDetails"` key.
    fn extract_caption_tracks(html: &str, video_id: &str) -> Result<Vec<CaptionTrack>> {
        if html.contains(r#"class="g-recaptcha""#) {
            return Err(TranscriptError::PlayerResponse(format!(
                "captcha challenge served for video {}",
                video_id
            )));
        }

        if !html.contains(r#""playabilityStatus":"#) {
            return Err(TranscriptError::VideoUnavailable(video_id.to_string()));
        }

        let captions_json = html
            .split_once(r#""captions":"#)
            .and_then(|(_, rest)| rest.split_once(r#","videoDetails""#))
            .map(|(captions, _)| captions)
            .ok_or_else(|| TranscriptError::TranscriptsDisabled(video_id.to_string()))?;

        let captions: PlayerCaptions = serde_json::from_str(captions_json)?;
        let renderer = captions
            .player_captions_tracklist_renderer
            .ok_or_else(|| TranscriptError::TranscriptsDisabled(video_id.to_string()))?;

        if renderer.caption_tracks.is_empty() {
            return Err(TranscriptError::NoTranscriptFound(video_id.to_string()));
        }

        Ok(renderer.caption_tracks)
    }

    /// Default track: a manually created one wins over auto-generated,
    /// otherwise the first listed
    fn select_track(tracks: &[CaptionTrack]) -> &CaptionTrack {
        tracks
            .iter()
            .find(|track| !track.is_generated())
            .unwrap_or(&tracks[0])
    }

    async fn fetch_track(&self, track: &CaptionTrack) -> Result<Json3Transcript> {
        let response = self
            .http
            .get(&track.base_url)
            .query(&[("fmt", "json3")])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[async_trait]
impl TranscriptSource for YouTubeClient {
    async fn fetch(&self, video_id: &str) -> Result<Vec<CaptionSegment>> {
        let html = self.fetch_watch_page(video_id).await?;
        let tracks = Self::extract_caption_tracks(&html, video_id)?;
        let track = Self::select_track(&tracks);

        tracing::debug!(
            video_id,
            language = track.language_code.as_deref().unwrap_or("unknown"),
            generated = track.is_generated(),
            "fetching caption track"
        );

        let transcript = self.fetch_track(track).await?;
        Ok(segments_from_json3(transcript))
    }
}
