use axum::Json;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::slugs::dto::{SlugPreviewRequestDto, SlugPreviewResponseDto};
use crate::shared::slug::{derive_slug, validate_slug};
use crate::shared::types::ApiResponse;

/// Preview the slug derived from a display name
#[utoipa::path(
    post,
    path = "/api/slugs/preview",
    request_body = SlugPreviewRequestDto,
    responses(
        (status = 200, description = "Derived slug", body = ApiResponse<SlugPreviewResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "slugs",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn preview_slug(
    _user: AuthenticatedUser,
    AppJson(dto): AppJson<SlugPreviewRequestDto>,
) -> Result<Json<ApiResponse<SlugPreviewResponseDto>>> {
    let slug = derive_slug(&dto.name);
    let error = validate_slug(&slug).err().map(|e| e.to_string());

    Ok(Json(ApiResponse::success(
        Some(SlugPreviewResponseDto {
            slug,
            valid: error.is_none(),
            error,
        }),
        None,
        None,
    )))
}
