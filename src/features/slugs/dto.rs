use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request DTO for the slug preview shown next to name inputs
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SlugPreviewRequestDto {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlugPreviewResponseDto {
    /// Slug that create would derive from `name`
    pub slug: String,
    /// False when the derived slug would be rejected (e.g. punctuation-only names)
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
