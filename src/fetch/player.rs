//! Wire types for the YouTube player response and json3 caption payload

use serde::Deserialize;

use crate::transcript::CaptionSegment;

/// The `"captions"` object embedded in the watch page's player response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCaptions {
    pub player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

/// Track list inside the captions renderer
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracklistRenderer {
    #[serde(default)]
    pub caption_tracks: Vec<CaptionTrack>,
}

/// One caption track offered for the video
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    /// URL of the track payload; format is selected via the `fmt` parameter
    pub base_url: String,
    #[serde(default)]
    pub language_code: Option<String>,
    /// `"asr"` marks an auto-generated track
    #[serde(default)]
    pub kind: Option<String>,
}

impl CaptionTrack {
    /// Whether this track was auto-generated by speech recognition
    pub fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

/// Top-level json3 caption payload
#[derive(Debug, Clone, Deserialize)]
pub struct Json3Transcript {
    #[serde(default)]
    pub events: Vec<Json3Event>,
}

/// One timed event in a json3 payload
///
/// Layout and window events carry no `segs`; only events with text become
/// caption segments.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Json3Event {
    #[serde(default)]
    pub t_start_ms: i64,
    #[serde(default)]
    pub d_duration_ms: Option<i64>,
    #[serde(default)]
    pub segs: Option<Vec<Json3Seg>>,
}

/// One text run inside an event
#[derive(Debug, Clone, Deserialize)]
pub struct Json3Seg {
    #[serde(default)]
    pub utf8: String,
}

impl Json3Event {
    /// Concatenated display text, or `None` for events without any
    ///
    /// Interior newlines are flattened to spaces so a flat-text render stays
    /// one line per segment.
    pub fn text(&self) -> Option<String> {
        let segs = self.segs.as_ref()?;
        let joined: String = segs.iter().map(|seg| seg.utf8.as_str()).collect();
        let text = joined.replace('\n', " ");
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

/// Convert a decoded json3 payload into the ordered segment sequence
pub fn segments_from_json3(transcript: Json3Transcript) -> Vec<CaptionSegment> {
    transcript
        .events
        .into_iter()
        .filter_map(|event| {
            let text = event.text()?;
            Some(CaptionSegment::new(
                event.t_start_ms as f64 / 1000.0,
                event.d_duration_ms.map(|ms| ms as f64 / 1000.0),
                text,
            ))
        })
        .collect()
}
