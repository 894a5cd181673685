use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::info;

use crate::core::error::{AppError, Result};
use crate::features::uploads::dtos::{
    extension_for, UploadPreset, UploadResponseDto, ALLOWED_IMAGE_TYPES, MAX_IMAGE_SIZE,
};
use crate::modules::storage::ImageStore;

/// Service for image uploads
pub struct UploadService {
    store: Arc<dyn ImageStore>,
}

impl UploadService {
    pub fn new(store: Arc<dyn ImageStore>) -> Self {
        Self { store }
    }

    /// Store an image and return its public URL.
    ///
    /// Keys are `{prefix}/{preset}/{sha256}.{ext}`, so uploading the same
    /// bytes twice yields the same URL.
    pub async fn upload_image(
        &self,
        data: Vec<u8>,
        file_name: &str,
        content_type: &str,
        preset: UploadPreset,
    ) -> Result<UploadResponseDto> {
        if data.is_empty() {
            return Err(AppError::BadRequest("File is empty".to_string()));
        }

        if data.len() > MAX_IMAGE_SIZE {
            return Err(AppError::BadRequest(format!(
                "File too large. Maximum size is {} bytes ({} MB)",
                MAX_IMAGE_SIZE,
                MAX_IMAGE_SIZE / 1024 / 1024
            )));
        }

        let extension = extension_for(content_type).ok_or_else(|| {
            let allowed: Vec<&str> = ALLOWED_IMAGE_TYPES.iter().map(|(mime, _)| *mime).collect();
            AppError::BadRequest(format!(
                "File type '{}' is not allowed. Allowed types: {}",
                content_type,
                allowed.join(", ")
            ))
        })?;

        let digest = hex::encode(Sha256::digest(&data));
        let key = format!(
            "{}/{}/{}.{}",
            self.store.key_prefix(),
            preset.as_str(),
            digest,
            extension
        );
        let size = data.len();

        self.store.put(&key, data, content_type).await?;

        info!(
            "Image uploaded: key={}, original_name={}, size={}",
            key, file_name, size
        );

        Ok(UploadResponseDto {
            url: self.store.public_url(&key),
            preset,
            content_type: content_type.to_string(),
            size,
        })
    }
}
