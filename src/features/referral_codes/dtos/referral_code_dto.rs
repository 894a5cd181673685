use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::screenshots::ScreenshotsInput;
use crate::features::referral_codes::models::ReferralCodeView;
use crate::shared::constants::{MAX_NAME_LENGTH, MAX_SLUG_LENGTH};

/// Response DTO for referral code, with the category name expanded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReferralCodeResponseDto {
    pub id: i64,
    pub service_name: String,
    pub slug: String,
    pub code: String,
    pub url: String,
    pub category_id: i64,
    pub category_name: String,
    pub description: Option<String>,
    pub terms: Option<String>,
    pub user_benefit: Option<String>,
    pub referrer_benefit: Option<String>,
    pub logo_url: Option<String>,
    pub screenshots: Vec<String>,
    pub featured: bool,
    pub meta_title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReferralCodeView> for ReferralCodeResponseDto {
    fn from(view: ReferralCodeView) -> Self {
        let r = view.record;
        Self {
            id: r.id,
            service_name: r.service_name,
            slug: r.slug,
            code: r.code,
            url: r.url,
            category_id: r.category_id,
            category_name: view.category_name,
            description: r.description,
            terms: r.terms,
            user_benefit: r.user_benefit,
            referrer_benefit: r.referrer_benefit,
            logo_url: r.logo_url,
            screenshots: r.screenshots,
            featured: r.featured,
            meta_title: r.meta_title,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Request DTO for creating a referral code
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateReferralCodeDto {
    #[validate(
        length(max = MAX_NAME_LENGTH, message = "Service name must not exceed 200 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    pub service_name: String,

    /// Derived from `service_name` when omitted or blank
    #[validate(length(max = MAX_SLUG_LENGTH, message = "Slug must not exceed 100 characters"))]
    #[serde(default)]
    pub slug: Option<String>,

    #[validate(
        length(max = MAX_NAME_LENGTH, message = "Code must not exceed 200 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    pub code: String,

    /// Where the code is redeemed
    #[validate(custom(function = "crate::shared::validation::validate_http_url"))]
    pub url: String,

    #[validate(range(min = 1, message = "Category is required"))]
    pub category_id: i64,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub terms: Option<String>,

    #[serde(default)]
    pub user_benefit: Option<String>,

    #[serde(default)]
    pub referrer_benefit: Option<String>,

    #[validate(custom(function = "crate::shared::validation::validate_optional_http_url"))]
    #[serde(default)]
    pub logo_url: Option<String>,

    /// Image URLs in display order
    #[schema(value_type = Option<Vec<String>>)]
    #[serde(default)]
    pub screenshots: Option<ScreenshotsInput>,

    #[serde(default)]
    pub featured: bool,

    #[validate(length(max = MAX_NAME_LENGTH, message = "Meta title must not exceed 200 characters"))]
    #[serde(default)]
    pub meta_title: Option<String>,
}

/// Request DTO for updating a referral code. Absent fields stay unchanged;
/// blank optional text clears it. Renaming never rewrites the slug.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateReferralCodeDto {
    #[validate(
        length(max = MAX_NAME_LENGTH, message = "Service name must not exceed 200 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    #[serde(default)]
    pub service_name: Option<String>,

    #[validate(
        length(max = MAX_SLUG_LENGTH, message = "Slug must not exceed 100 characters"),
        custom(function = "crate::shared::validation::validate_slug_field")
    )]
    #[serde(default)]
    pub slug: Option<String>,

    #[validate(
        length(max = MAX_NAME_LENGTH, message = "Code must not exceed 200 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    #[serde(default)]
    pub code: Option<String>,

    #[validate(custom(function = "crate::shared::validation::validate_http_url"))]
    #[serde(default)]
    pub url: Option<String>,

    #[validate(range(min = 1, message = "Category is required"))]
    #[serde(default)]
    pub category_id: Option<i64>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub terms: Option<String>,

    #[serde(default)]
    pub user_benefit: Option<String>,

    #[serde(default)]
    pub referrer_benefit: Option<String>,

    #[validate(custom(function = "crate::shared::validation::validate_optional_http_url"))]
    #[serde(default)]
    pub logo_url: Option<String>,

    /// Replaces the whole list when present
    #[schema(value_type = Option<Vec<String>>)]
    #[serde(default)]
    pub screenshots: Option<ScreenshotsInput>,

    #[serde(default)]
    pub featured: Option<bool>,

    #[validate(length(max = MAX_NAME_LENGTH, message = "Meta title must not exceed 200 characters"))]
    #[serde(default)]
    pub meta_title: Option<String>,
}

/// Query params for listing referral codes
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ReferralCodeQueryParams {
    /// Only featured codes when true
    #[serde(default)]
    pub featured: Option<bool>,

    /// Only codes in this category
    pub category_id: Option<i64>,
}
