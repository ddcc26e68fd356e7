//! Vidmark Core Library
//!
//! This crate provides the domain models, error types, configuration, and the
//! client-side playback/UI state machine shared across all Vidmark components.

pub mod config;
pub mod error;
pub mod highlights;
pub mod models;
pub mod player;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use highlights::{marker_position, parse_highlights, HighlightParseError};
pub use models::{HighlightDocument, HighlightEvent, UploadResponse};
