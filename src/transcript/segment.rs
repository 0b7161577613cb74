//! Caption segment data model

use serde::{Deserialize, Serialize};

use super::format::DEFAULT_SEGMENT_DURATION;

/// A single timed unit of transcript text
///
/// Segments arrive from the upstream track in presentation order and are
/// never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionSegment {
    /// Start time in seconds
    pub start: f64,
    /// Display duration in seconds, if the upstream track carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Display text
    pub text: String,
}

impl CaptionSegment {
    /// Create a new caption segment
    pub fn new(start: f64, duration: Option<f64>, text: impl Into<String>) -> Self {
        Self {
            start,
            duration,
            text: text.into(),
        }
    }

    /// Display duration, substituting the default when the track omits one
    pub fn duration_or_default(&self) -> f64 {
        self.duration.unwrap_or(DEFAULT_SEGMENT_DURATION)
    }

    /// End time in seconds
    pub fn end(&self) -> f64 {
        self.start + self.duration_or_default()
    }
}
