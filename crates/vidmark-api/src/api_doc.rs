//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use vidmark_core::models;

/// Returns the OpenAPI spec served at `/api/openapi.json`.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vidmark API",
        version = "0.1.0",
        description = "Single-slot video upload and playback API. One video at a time: uploading replaces the previous file, and playback always serves the current slot."
    ),
    paths(
        handlers::video_upload::upload_video,
        handlers::video_get::get_video,
    ),
    components(
        schemas(
            models::UploadResponse,
            models::HighlightEvent,
            models::HighlightDocument,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "video", description = "Video upload and playback")
    )
)]
pub struct ApiDoc;
