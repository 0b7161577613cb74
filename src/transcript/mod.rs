//! Transcript data model and text rendering
//!
//! This module turns an ordered sequence of timed caption segments into one
//! of the two downloadable text formats:
//! - SubRip (SRT): indexed blocks with start/end timestamps
//! - Plain text (TXT): one timestamp-prefixed line per segment

pub mod format;
pub mod segment;

pub use format::{format_timestamp, render, TranscriptFormat, DEFAULT_SEGMENT_DURATION};
pub use segment::CaptionSegment;
