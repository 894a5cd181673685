use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::Category;
use crate::shared::constants::{MAX_NAME_LENGTH, MAX_SLUG_LENGTH};

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            description: c.description,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Request DTO for creating a category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(
        length(max = MAX_NAME_LENGTH, message = "Name must not exceed 200 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    pub name: String,

    /// Derived from `name` when omitted or blank
    #[validate(length(max = MAX_SLUG_LENGTH, message = "Slug must not exceed 100 characters"))]
    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

/// Request DTO for updating a category. Absent fields stay unchanged; a blank
/// description clears it. Renaming never rewrites the slug.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(
        length(max = MAX_NAME_LENGTH, message = "Name must not exceed 200 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    #[serde(default)]
    pub name: Option<String>,

    #[validate(
        length(max = MAX_SLUG_LENGTH, message = "Slug must not exceed 100 characters"),
        custom(function = "crate::shared::validation::validate_slug_field")
    )]
    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}
