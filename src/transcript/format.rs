//! SRT and plain-text transcript rendering

use super::segment::CaptionSegment;

/// Display duration applied when the upstream track omits one
pub const DEFAULT_SEGMENT_DURATION: f64 = 0.5;

/// Output format for a rendered transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranscriptFormat {
    /// Flat text, one `HH:MM:SS.mmm text` line per segment
    #[default]
    Txt,
    /// SubRip blocks with `HH:MM:SS,mmm` timestamps
    Srt,
}

impl TranscriptFormat {
    /// Parse a query-string value, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "txt" => Some(Self::Txt),
            "srt" => Some(Self::Srt),
            _ => None,
        }
    }

    /// File extension used in the download filename
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Srt => "srt",
        }
    }

    /// Separator between the seconds and milliseconds components
    fn millis_separator(&self) -> char {
        match self {
            Self::Txt => '.',
            Self::Srt => ',',
        }
    }
}

/// Format a second offset as `HH:MM:SS,mmm` (SRT) or `HH:MM:SS.mmm` (TXT)
///
/// Every component is truncated, never rounded: 59.9995 s stays `59` seconds
/// and `999` milliseconds instead of rolling over to the next minute.
pub fn format_timestamp(seconds: f64, format: TranscriptFormat) -> String {
    let whole = seconds.floor();
    let total = whole as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    let millis = ((seconds - whole) * 1000.0).floor() as u64;

    format!(
        "{:02}:{:02}:{:02}{}{:03}",
        hours,
        minutes,
        secs,
        format.millis_separator(),
        millis
    )
}

/// Render an ordered segment sequence into the requested format
///
/// Segments are emitted in input order with SRT indices starting at 1; the
/// sequence is never re-sorted. The overall result is trimmed of leading and
/// trailing whitespace, so an empty sequence renders as an empty string.
pub fn render(segments: &[CaptionSegment], format: TranscriptFormat) -> String {
    let mut output = String::new();

    for (index, segment) in segments.iter().enumerate() {
        let start = format_timestamp(segment.start, format);
        match format {
            TranscriptFormat::Srt => {
                let end = format_timestamp(segment.end(), format);
                output.push_str(&format!(
                    "{}\n{} --> {}\n{}\n\n",
                    index + 1,
                    start,
                    end,
                    segment.text
                ));
            }
            TranscriptFormat::Txt => {
                output.push_str(&format!("{} {}\n", start, segment.text));
            }
        }
    }

    output.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments() -> Vec<CaptionSegment> {
        vec![
            CaptionSegment::new(0.0, Some(1.54), "First line"),
            CaptionSegment::new(1.54, Some(2.0), "Second line"),
            CaptionSegment::new(3.54, None, "Third line"),
        ]
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(TranscriptFormat::parse("txt"), Some(TranscriptFormat::Txt));
        assert_eq!(TranscriptFormat::parse("srt"), Some(TranscriptFormat::Srt));
        assert_eq!(TranscriptFormat::parse("SRT"), Some(TranscriptFormat::Srt));
        assert_eq!(TranscriptFormat::parse("Txt"), Some(TranscriptFormat::Txt));
        assert_eq!(TranscriptFormat::parse("xml"), None);
        assert_eq!(TranscriptFormat::parse(""), None);
    }

    #[test]
    fn test_default_format_is_txt() {
        assert_eq!(TranscriptFormat::default(), TranscriptFormat::Txt);
    }

    #[test]
    fn test_timestamp_srt() {
        assert_eq!(
            format_timestamp(3725.4567, TranscriptFormat::Srt),
            "01:02:05,456"
        );
    }

    #[test]
    fn test_timestamp_txt() {
        assert_eq!(format_timestamp(0.0, TranscriptFormat::Txt), "00:00:00.000");
        assert_eq!(
            format_timestamp(59.5, TranscriptFormat::Txt),
            "00:00:59.500"
        );
    }

    #[test]
    fn test_timestamp_truncates() {
        // floor semantics: no rollover into the next second or minute
        assert_eq!(
            format_timestamp(59.9995, TranscriptFormat::Srt),
            "00:00:59,999"
        );
        assert_eq!(
            format_timestamp(3659.9999, TranscriptFormat::Txt),
            "01:00:59.999"
        );
    }

    #[test]
    fn test_timestamp_hour_rollover() {
        assert_eq!(
            format_timestamp(3600.0, TranscriptFormat::Srt),
            "01:00:00,000"
        );
        assert_eq!(
            format_timestamp(36_125.25, TranscriptFormat::Txt),
            "10:02:05.250"
        );
    }

    #[test]
    fn test_render_txt_line_per_segment() {
        let rendered = render(&segments(), TranscriptFormat::Txt);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "00:00:00.000 First line");
        assert_eq!(lines[1], "00:00:01.540 Second line");
        assert_eq!(lines[2], "00:00:03.540 Third line");
    }

    #[test]
    fn test_render_srt_blocks() {
        let rendered = render(&segments(), TranscriptFormat::Srt);
        let blocks: Vec<&str> = rendered.split("\n\n").collect();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], "1\n00:00:00,000 --> 00:00:01,540\nFirst line");
        assert_eq!(blocks[1], "2\n00:00:01,540 --> 00:00:03,540\nSecond line");
        // missing duration falls back to DEFAULT_SEGMENT_DURATION
        assert_eq!(blocks[2], "3\n00:00:03,540 --> 00:00:04,040\nThird line");
    }

    #[test]
    fn test_render_keeps_input_order() {
        // Unsorted start times keep their position and numbering
        let unsorted = vec![
            CaptionSegment::new(10.0, Some(1.0), "later"),
            CaptionSegment::new(2.0, Some(1.0), "earlier"),
        ];
        let rendered = render(&unsorted, TranscriptFormat::Srt);
        let blocks: Vec<&str> = rendered.split("\n\n").collect();
        assert!(blocks[0].starts_with("1\n00:00:10,000"));
        assert!(blocks[1].starts_with("2\n00:00:02,000"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[], TranscriptFormat::Txt), "");
        assert_eq!(render(&[], TranscriptFormat::Srt), "");
    }

    #[test]
    fn test_render_trims_trailing_newlines() {
        let rendered = render(&segments(), TranscriptFormat::Srt);
        assert!(!rendered.ends_with('\n'));
        let rendered = render(&segments(), TranscriptFormat::Txt);
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn test_extension() {
        assert_eq!(TranscriptFormat::Txt.extension(), "txt");
        assert_eq!(TranscriptFormat::Srt.extension(), "srt");
    }
}
