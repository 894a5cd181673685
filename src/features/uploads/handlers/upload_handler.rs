use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::core::error::AppError;
use crate::features::auth::guards::RequireAdmin;
use crate::features::uploads::dtos::{UploadImageDto, UploadPreset, UploadResponseDto};
use crate::features::uploads::services::UploadService;
use crate::shared::types::ApiResponse;

/// Upload an image (admin only)
///
/// Accepts multipart/form-data with:
/// - `file`: The image to upload (required)
/// - `preset`: "logos", "screenshots" or "icons" (required)
#[utoipa::path(
    post,
    path = "/api/admin/uploads",
    tag = "uploads",
    request_body(
        content = UploadImageDto,
        content_type = "multipart/form-data",
        description = "Image file and the preset it is uploaded for",
    ),
    responses(
        (status = 201, description = "Image uploaded successfully", body = ApiResponse<UploadResponseDto>),
        (status = 400, description = "Invalid file, type or preset"),
        (status = 403, description = "Forbidden - admin only"),
        (status = 413, description = "File too large"),
        (status = 502, description = "Storage rejected the upload")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_image(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<UploadService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UploadResponseDto>>), AppError> {
    let mut file: Option<(Vec<u8>, String, String)> = None;
    let mut preset: Option<UploadPreset> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let file_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());
                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                file = Some((data.to_vec(), file_name, content_type));
            }
            "preset" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read preset field: {}", e))
                })?;
                preset = Some(text.parse().map_err(AppError::BadRequest)?);
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let (data, file_name, content_type) =
        file.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;
    let preset = preset.ok_or_else(|| AppError::BadRequest("No preset provided".to_string()))?;

    let response = service
        .upload_image(data, &file_name, &content_type, preset)
        .await?;
    debug!("Upload by {} stored at {}", user.id, response.url);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(response), None, None)),
    ))
}
