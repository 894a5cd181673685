use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// Maximum image size (5 MiB)
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

/// Accepted image MIME types and the extension stored for each
pub const ALLOWED_IMAGE_TYPES: &[(&str, &str)] = &[
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/webp", "webp"),
    ("image/gif", "gif"),
    ("image/svg+xml", "svg"),
    ("image/x-icon", "ico"),
];

pub fn extension_for(content_type: &str) -> Option<&'static str> {
    ALLOWED_IMAGE_TYPES
        .iter()
        .find(|(mime, _)| *mime == content_type)
        .map(|(_, ext)| *ext)
}

/// Where an uploaded image is used; selects the key prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UploadPreset {
    Logos,
    Screenshots,
    Icons,
}

impl UploadPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadPreset::Logos => "logos",
            UploadPreset::Screenshots => "screenshots",
            UploadPreset::Icons => "icons",
        }
    }
}

impl FromStr for UploadPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "logos" | "logo" => Ok(UploadPreset::Logos),
            "screenshots" | "screenshot" => Ok(UploadPreset::Screenshots),
            "icons" | "icon" => Ok(UploadPreset::Icons),
            other => Err(format!(
                "Unknown preset '{}'. Allowed presets: logos, screenshots, icons",
                other
            )),
        }
    }
}

/// Upload image request DTO for OpenAPI documentation.
/// The handler reads the multipart body directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadImageDto {
    /// The image to upload
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    /// logos, screenshots or icons
    #[schema(example = "logos")]
    pub preset: String,
}

/// Response DTO for an uploaded image
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponseDto {
    /// Public URL to store in `logo_url` or `screenshots`
    pub url: String,
    pub preset: UploadPreset,
    pub content_type: String,
    /// Size in bytes
    pub size: usize,
}
