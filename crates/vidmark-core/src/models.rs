//! Domain models shared between the API and the client state machine.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A client-held, timestamped annotation overlaid on the playback scrub bar.
///
/// Highlights live only in browser memory; they are never persisted or sent
/// to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HighlightEvent {
    /// Position in seconds from the start of the video
    pub timestamp: f64,
    /// Short event name shown in the marker tooltip
    pub event: String,
    /// Longer description shown in the marker tooltip
    pub description: String,
}

/// The shape of the user-authored highlight JSON payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct HighlightDocument {
    /// Missing `events` parses as an empty list.
    #[serde(default)]
    pub events: Vec<HighlightEvent>,
}

/// Confirmation payload returned by a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub message: String,
}

impl UploadResponse {
    pub fn uploaded() -> Self {
        UploadResponse {
            message: "File uploaded successfully".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_document_defaults_events() {
        let doc: HighlightDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.events.is_empty());
    }

    #[test]
    fn test_upload_response_message() {
        let response = UploadResponse::uploaded();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json.get("message").and_then(|v| v.as_str()),
            Some("File uploaded successfully")
        );
    }
}
