//! Playback handler: `GET /api/video`.

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use vidmark_core::AppError;

#[utoipa::path(
    get,
    path = "/api/video",
    tag = "video",
    responses(
        (status = 200, description = "The current video file", content_type = "video/*"),
        (status = 404, description = "No video has been uploaded", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_video"))]
pub async fn get_video(State(state): State<AppState>) -> Result<Response, HttpAppError> {
    let video = state.store.load().await?;

    tracing::debug!(
        content_type = %video.content_type(),
        size_bytes = video.data.len(),
        "Serving video slot"
    );

    let content_type = video.content_type();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(video.data))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)).into())
}

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
