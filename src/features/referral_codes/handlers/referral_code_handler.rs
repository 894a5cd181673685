use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::referral_codes::dtos::{
    CreateReferralCodeDto, ReferralCodeQueryParams, ReferralCodeResponseDto,
    UpdateReferralCodeDto,
};
use crate::features::referral_codes::services::ReferralCodeService;
use crate::shared::types::{ApiResponse, Meta};

/// List referral codes
///
/// `category_id` filters by category (404 if the category does not exist);
/// otherwise `featured=true` returns only featured codes.
#[utoipa::path(
    get,
    path = "/api/referral-codes",
    params(ReferralCodeQueryParams),
    responses(
        (status = 200, description = "List of referral codes", body = ApiResponse<Vec<ReferralCodeResponseDto>>),
        (status = 404, description = "Category not found"),
        (status = 503, description = "Store unavailable")
    ),
    tag = "referral-codes",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_referral_codes(
    _user: AuthenticatedUser,
    State(service): State<Arc<ReferralCodeService>>,
    Query(params): Query<ReferralCodeQueryParams>,
) -> Result<Json<ApiResponse<Vec<ReferralCodeResponseDto>>>> {
    let mut codes = match params.category_id {
        Some(category_id) => service.list_by_category(category_id).await?,
        None if params.featured == Some(true) => service.list_featured().await?,
        None => service.list_all().await?,
    };
    if params.category_id.is_some() && params.featured == Some(true) {
        codes.retain(|c| c.featured);
    }

    let meta = Meta::total(codes.len());
    Ok(Json(ApiResponse::success(Some(codes), None, Some(meta))))
}

/// Get referral code by slug
#[utoipa::path(
    get,
    path = "/api/referral-codes/{slug}",
    params(
        ("slug" = String, Path, description = "Referral code slug")
    ),
    responses(
        (status = 200, description = "Referral code found", body = ApiResponse<ReferralCodeResponseDto>),
        (status = 404, description = "Referral code not found")
    ),
    tag = "referral-codes",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_referral_code(
    _user: AuthenticatedUser,
    State(service): State<Arc<ReferralCodeService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<ReferralCodeResponseDto>>> {
    let code = service
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Referral code '{}' not found", slug)))?;
    Ok(Json(ApiResponse::success(Some(code), None, None)))
}

/// Get a referral code by ID for editing (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/referral-codes/{id}",
    params(
        ("id" = i64, Path, description = "Referral code ID")
    ),
    responses(
        (status = 200, description = "Referral code retrieved successfully", body = ApiResponse<ReferralCodeResponseDto>),
        (status = 404, description = "Referral code not found"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "referral-codes",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_referral_code_by_id(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ReferralCodeService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ReferralCodeResponseDto>>> {
    let code = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(code), None, None)))
}

/// Create a referral code (admin only)
#[utoipa::path(
    post,
    path = "/api/admin/referral-codes",
    request_body = CreateReferralCodeDto,
    responses(
        (status = 201, description = "Referral code created successfully", body = ApiResponse<ReferralCodeResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - admin only"),
        (status = 409, description = "Slug already in use")
    ),
    tag = "referral-codes",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_referral_code(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ReferralCodeService>>,
    AppJson(dto): AppJson<CreateReferralCodeDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReferralCodeResponseDto>>)> {
    let code = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(code), None, None)),
    ))
}

/// Update a referral code (admin only)
#[utoipa::path(
    put,
    path = "/api/admin/referral-codes/{id}",
    params(
        ("id" = i64, Path, description = "Referral code ID")
    ),
    request_body = UpdateReferralCodeDto,
    responses(
        (status = 200, description = "Referral code updated successfully", body = ApiResponse<ReferralCodeResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Referral code not found"),
        (status = 403, description = "Forbidden - admin only"),
        (status = 409, description = "Slug already in use")
    ),
    tag = "referral-codes",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_referral_code(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ReferralCodeService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateReferralCodeDto>,
) -> Result<Json<ApiResponse<ReferralCodeResponseDto>>> {
    let code = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(code), None, None)))
}

/// Delete a referral code (admin only)
#[utoipa::path(
    delete,
    path = "/api/admin/referral-codes/{id}",
    params(
        ("id" = i64, Path, description = "Referral code ID")
    ),
    responses(
        (status = 200, description = "Referral code deleted successfully"),
        (status = 404, description = "Referral code not found"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "referral-codes",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_referral_code(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<ReferralCodeService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    tracing::info!("Referral code {} deleted by {}", id, user.id);
    Ok(Json(ApiResponse::success(
        None,
        Some("Referral code deleted".to_string()),
        None,
    )))
}
