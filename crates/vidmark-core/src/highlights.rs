//! Highlight JSON parsing and marker placement.
//!
//! Parsing returns a typed error instead of swallowing failures, so the UI
//! layer can show the user what went wrong rather than silently rendering an
//! empty marker set.

use crate::models::{HighlightDocument, HighlightEvent};

/// Failure to parse the user-authored highlight JSON.
#[derive(Debug, thiserror::Error)]
#[error("Invalid highlight JSON: {source}")]
pub struct HighlightParseError {
    #[from]
    source: serde_json::Error,
}

impl HighlightParseError {
    /// 1-based line of the syntax error, for the editor's error banner.
    pub fn line(&self) -> usize {
        self.source.line()
    }

    pub fn column(&self) -> usize {
        self.source.column()
    }
}

/// Parse the highlight editor's text into a list of events.
///
/// Blank input is treated as "no highlights" rather than an error; a missing
/// `events` key also yields an empty list. Anything else that fails to parse
/// is surfaced as a [`HighlightParseError`].
pub fn parse_highlights(raw: &str) -> Result<Vec<HighlightEvent>, HighlightParseError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let doc: HighlightDocument = serde_json::from_str(raw)?;
    Ok(doc.events)
}

/// Horizontal marker position as a percentage of the scrub bar width.
///
/// Returns `None` when the duration is zero, negative, or non-finite (the
/// marker is hidden instead of rendering at a NaN offset). Timestamps outside
/// the video are clamped to the bar edges.
pub fn marker_position(timestamp: f64, duration_secs: f64) -> Option<f64> {
    if !duration_secs.is_finite() || duration_secs <= 0.0 || !timestamp.is_finite() {
        return None;
    }
    Some((timestamp / duration_secs * 100.0).clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_event() {
        let raw = r#"{"events":[{"timestamp":2,"event":"Great","description":"This is great"}]}"#;
        let events = parse_highlights(raw).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].timestamp, 2.0);
        assert_eq!(events[0].event, "Great");
        assert_eq!(events[0].description, "This is great");
    }

    #[test]
    fn test_parse_invalid_json_is_typed_error() {
        let err = parse_highlights("{not json").unwrap_err();
        assert!(err.to_string().contains("Invalid highlight JSON"));
        assert!(err.line() >= 1);
    }

    #[test]
    fn test_parse_blank_input_is_empty() {
        assert!(parse_highlights("").unwrap().is_empty());
        assert!(parse_highlights("   \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_missing_events_key_is_empty() {
        assert!(parse_highlights("{}").unwrap().is_empty());
    }

    #[test]
    fn test_marker_position_proportional() {
        assert_eq!(marker_position(2.0, 10.0), Some(20.0));
        assert_eq!(marker_position(10.0, 10.0), Some(100.0));
        assert_eq!(marker_position(0.0, 10.0), Some(0.0));
    }

    #[test]
    fn test_marker_position_clamped() {
        assert_eq!(marker_position(15.0, 10.0), Some(100.0));
        assert_eq!(marker_position(-1.0, 10.0), Some(0.0));
    }

    #[test]
    fn test_marker_hidden_when_duration_zero() {
        assert_eq!(marker_position(2.0, 0.0), None);
        assert_eq!(marker_position(2.0, -5.0), None);
        assert_eq!(marker_position(2.0, f64::NAN), None);
        assert_eq!(marker_position(f64::NAN, 10.0), None);
    }
}
