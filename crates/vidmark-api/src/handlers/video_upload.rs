//! Upload handler: `POST /api/upload`.
//!
//! Accepts one multipart field named `file`, validates it, and replaces the
//! stored video slot. Validation order and messages are part of the public
//! contract: invalid content type, missing file, non-video media type, and
//! oversize all return 400 with their fixed message.

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        State,
    },
    response::IntoResponse,
    Json,
};
use vidmark_core::{AppError, UploadResponse};

/// One uploaded file part: bytes, original filename, declared media type.
struct UploadedFile {
    data: Vec<u8>,
    filename: Option<String>,
    content_type: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "video",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Video uploaded successfully", body = UploadResponse),
        (status = 400, description = "Invalid upload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_video"))]
pub async fn upload_video(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, HttpAppError> {
    // A rejection here means the request was not multipart/form-data at all
    // (missing or wrong content-type header, bad boundary).
    let multipart = multipart
        .map_err(|_| AppError::InvalidInput("Invalid content type".to_string()))?;

    let file = extract_file_field(multipart).await?;

    let media_type = file.content_type.as_deref().unwrap_or("");
    if !media_type.starts_with("video/") {
        return Err(AppError::InvalidInput("File is not a video".to_string()).into());
    }

    let max_bytes = state.config.max_video_size_bytes();
    if file.data.len() > max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds {}MB",
            max_bytes / 1024 / 1024
        ))
        .into());
    }

    let extension = slot_extension(file.filename.as_deref(), media_type);
    let size = file.data.len();

    let slot = state.store.store(&extension, file.data).await?;

    tracing::info!(
        slot = %slot,
        size_bytes = size,
        content_type = %media_type,
        "Video upload stored"
    );

    Ok(Json(UploadResponse::uploaded()))
}

/// Pull the single `file` field out of the form. Other fields are ignored;
/// a form without a `file` field is a 400.
async fn extract_file_field(mut multipart: Multipart) -> Result<UploadedFile, HttpAppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(|s: &str| s.to_string());
        let content_type = field.content_type().map(|s: &str| s.to_string());

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;

        return Ok(UploadedFile {
            data: data.to_vec(),
            filename,
            content_type,
        });
    }

    Err(AppError::InvalidInput("No file uploaded".to_string()).into())
}

/// Derive the slot extension from the original filename, falling back to the
/// media-type subtype when the filename has no usable extension.
fn slot_extension(filename: Option<&str>, media_type: &str) -> String {
    let from_name = filename
        .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext))
        .map(|ext| ext.to_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));

    from_name.unwrap_or_else(|| subtype_extension(media_type))
}

/// Map a media subtype to an extension the store accepts. Known container
/// subtypes map to their conventional extension; anything else is stripped to
/// ASCII alphanumerics, with `mp4` as the last resort. The result must pass
/// the store's extension validation, or a valid `video/*` upload would fail.
fn subtype_extension(media_type: &str) -> String {
    let subtype = media_type
        .split_once('/')
        .map(|(_, subtype)| subtype)
        .unwrap_or("");

    match subtype {
        "quicktime" => "mov".to_string(),
        "x-matroska" => "mkv".to_string(),
        "x-msvideo" => "avi".to_string(),
        "x-ms-wmv" => "wmv".to_string(),
        "x-flv" => "flv".to_string(),
        other => {
            let cleaned: String = other
                .to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect();
            if cleaned.is_empty() {
                "mp4".to_string()
            } else {
                cleaned
            }
        }
    }
}
