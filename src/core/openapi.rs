use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::referral_codes::{
    dtos as referral_codes_dtos, handlers as referral_codes_handlers,
};
use crate::features::slugs;
use crate::features::uploads::{dtos as uploads_dtos, handlers as uploads_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handler::get_me,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::get_category_by_id,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Referral codes
        referral_codes_handlers::list_referral_codes,
        referral_codes_handlers::get_referral_code,
        referral_codes_handlers::get_referral_code_by_id,
        referral_codes_handlers::create_referral_code,
        referral_codes_handlers::update_referral_code,
        referral_codes_handlers::delete_referral_code,
        // Dashboard
        dashboard_handlers::get_summary,
        // Slugs
        slugs::handler::preview_slug,
        // Uploads
        uploads_handlers::upload_image,
    ),
    components(
        schemas(
            Meta,
            // Auth
            auth::model::Role,
            auth::dto::MeResponseDto,
            ApiResponse<auth::dto::MeResponseDto>,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            // Referral codes
            referral_codes_dtos::ReferralCodeResponseDto,
            referral_codes_dtos::CreateReferralCodeDto,
            referral_codes_dtos::UpdateReferralCodeDto,
            ApiResponse<referral_codes_dtos::ReferralCodeResponseDto>,
            ApiResponse<Vec<referral_codes_dtos::ReferralCodeResponseDto>>,
            // Dashboard
            dashboard_dtos::DashboardSummaryDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
            // Slugs
            slugs::dto::SlugPreviewRequestDto,
            slugs::dto::SlugPreviewResponseDto,
            ApiResponse<slugs::dto::SlugPreviewResponseDto>,
            // Uploads
            uploads_dtos::UploadPreset,
            uploads_dtos::UploadImageDto,
            uploads_dtos::UploadResponseDto,
            ApiResponse<uploads_dtos::UploadResponseDto>,
        )
    ),
    tags(
        (name = "auth", description = "Current user and capability"),
        (name = "categories", description = "Categories (admin writes under /api/admin)"),
        (name = "referral-codes", description = "Referral codes (admin writes under /api/admin)"),
        (name = "dashboard", description = "Dashboard landing summary"),
        (name = "slugs", description = "Slug preview for forms"),
        (name = "uploads", description = "Image uploads (admin only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Referral Admin API",
        version = "0.1.0",
        description = "Admin API for referral codes and their categories",
    )
)]
pub struct ApiDoc;

/// Adds the Bearer JWT security scheme to the OpenAPI document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_admin_and_public_paths() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/auth/me",
            "/api/categories/{slug}",
            "/api/admin/categories/{id}",
            "/api/referral-codes",
            "/api/admin/referral-codes",
            "/api/dashboard",
            "/api/slugs/preview",
            "/api/admin/uploads",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Staging".to_string(),
            version: "9.9.9".to_string(),
            description: "staging build".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Staging");
        assert_eq!(doc.info.version, "9.9.9");
    }
}
