use async_trait::async_trait;

use crate::core::error::AppError;

/// Object storage for uploaded images
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store `data` under `key`, overwriting any existing object
    async fn put(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<(), AppError>;

    /// URL under which `key` is publicly readable
    fn public_url(&self, key: &str) -> String;

    /// Prefix every public object key starts with (e.g. "public")
    fn key_prefix(&self) -> &str;
}
