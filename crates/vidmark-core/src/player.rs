//! Client UI controller state machine.
//!
//! Mirrors the behavior of the served single-page client: two tabs, a
//! drag-and-drop upload zone, the highlight editor, and the playback/scrub
//! state driven by player progress callbacks. The page implements the same
//! transitions in JavaScript; this module is the testable reference for them.

use crate::highlights::{marker_position, parse_highlights};
use crate::models::HighlightEvent;

/// Interval at which the player reports progress, in milliseconds.
pub const PROGRESS_POLL_INTERVAL_MS: u64 = 100;

/// Active side-panel tab. Independent of playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Upload,
    Highlights,
}

/// Drag-and-drop zone state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropZone {
    Idle,
    DragOver,
    Uploading,
}

/// Fraction played and duration, as reported by the player.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaybackPosition {
    /// Fraction of the video played, in `[0, 1]`
    pub played: f64,
    /// Total duration in seconds; 0 until the player reports it
    pub duration_secs: f64,
}

/// The whole client-side UI state.
#[derive(Debug)]
pub struct UiState {
    tab: Tab,
    drop_zone: DropZone,
    highlight_text: String,
    highlights: Vec<HighlightEvent>,
    highlight_error: Option<String>,
    upload_error: Option<String>,
    playback: PlaybackPosition,
    video_rev: u64,
}

impl Default for UiState {
    fn default() -> Self {
        UiState {
            tab: Tab::Upload,
            drop_zone: DropZone::Idle,
            highlight_text: String::new(),
            highlights: Vec::new(),
            highlight_error: None,
            upload_error: None,
            playback: PlaybackPosition::default(),
            video_rev: 0,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn drop_zone(&self) -> DropZone {
        self.drop_zone
    }

    pub fn is_uploading(&self) -> bool {
        self.drop_zone == DropZone::Uploading
    }

    /// Drag entered the drop zone. Ignored while an upload is in flight.
    pub fn drag_enter(&mut self) {
        if self.drop_zone == DropZone::Idle {
            self.drop_zone = DropZone::DragOver;
        }
    }

    /// Drag left the drop zone without dropping.
    pub fn drag_leave(&mut self) {
        if self.drop_zone == DropZone::DragOver {
            self.drop_zone = DropZone::Idle;
        }
    }

    /// A file was dropped or selected. Returns false if an upload is already
    /// in flight, in which case the new upload must not be started.
    pub fn begin_upload(&mut self) -> bool {
        if self.is_uploading() {
            return false;
        }
        self.drop_zone = DropZone::Uploading;
        self.upload_error = None;
        true
    }

    /// The upload request resolved. Always clears the uploading flag; on
    /// success, resets playback state, bumps the cache-busting revision of the
    /// video source, and re-parses the current highlight text.
    pub fn finish_upload(&mut self, result: Result<(), String>) {
        self.drop_zone = DropZone::Idle;
        match result {
            Ok(()) => {
                self.playback = PlaybackPosition::default();
                self.video_rev += 1;
                self.apply_highlight_text();
            }
            Err(message) => {
                self.upload_error = Some(message);
            }
        }
    }

    pub fn upload_error(&self) -> Option<&str> {
        self.upload_error.as_deref()
    }

    /// Video source URL with the cache-busting revision appended.
    pub fn video_src(&self) -> String {
        format!("/api/video?rev={}", self.video_rev)
    }

    /// The highlight editor text changed; re-parse it.
    pub fn set_highlight_text(&mut self, text: &str) {
        self.highlight_text = text.to_string();
        self.apply_highlight_text();
    }

    /// Re-parse the stored editor text into the highlight list.
    fn apply_highlight_text(&mut self) {
        match parse_highlights(&self.highlight_text) {
            Ok(events) => {
                self.highlights = events;
                self.highlight_error = None;
            }
            Err(err) => {
                self.highlights = Vec::new();
                self.highlight_error = Some(err.to_string());
            }
        }
    }

    pub fn highlights(&self) -> &[HighlightEvent] {
        &self.highlights
    }

    pub fn highlight_error(&self) -> Option<&str> {
        self.highlight_error.as_deref()
    }

    /// Progress callback from the player.
    pub fn on_progress(&mut self, played: f64, duration_secs: f64) {
        self.playback = PlaybackPosition {
            played: played.clamp(0.0, 1.0),
            duration_secs,
        };
    }

    pub fn playback(&self) -> PlaybackPosition {
        self.playback
    }

    /// Target time in seconds for a click at `x` pixels on a bar of `width`
    /// pixels. `None` when the duration is unknown or the bar has no width.
    pub fn seek_target_secs(&self, x: f64, width: f64) -> Option<f64> {
        if width <= 0.0 || self.playback.duration_secs <= 0.0 {
            return None;
        }
        let fraction = (x / width).clamp(0.0, 1.0);
        Some(fraction * self.playback.duration_secs)
    }

    /// Tooltip time in seconds for the cursor hovering at `x` of `width`.
    pub fn hover_time_secs(&self, x: f64, width: f64) -> Option<f64> {
        self.seek_target_secs(x, width)
    }

    /// Marker positions as `(percent, event)` pairs, hiding markers that have
    /// no defined position yet (duration still zero).
    pub fn marker_offsets(&self) -> Vec<(f64, &HighlightEvent)> {
        self.highlights
            .iter()
            .filter_map(|h| marker_position(h.timestamp, self.playback.duration_secs).map(|p| (p, h)))
            .collect()
    }
}
