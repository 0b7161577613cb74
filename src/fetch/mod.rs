//! Upstream caption fetching
//!
//! This module supplies the caption segments the formatter renders:
//! - `TranscriptSource`: the seam between the HTTP layer and the provider,
//!   so handlers can be exercised against a stub in tests
//! - `YouTubeClient`: fetches the watch page, locates the caption track
//!   list in the embedded player response, and decodes the selected
//!   track's json3 payload

pub mod client;
pub mod player;

pub use client::YouTubeClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::transcript::CaptionSegment;

/// Source of caption segments for a video
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the ordered caption segments for a video
    async fn fetch(&self, video_id: &str) -> Result<Vec<CaptionSegment>>;
}
