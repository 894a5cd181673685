//! Storage module for uploaded images
//!
//! Provides the `ImageStore` seam and its MinIO/S3-compatible implementation.

mod image_store;
mod minio_client;

pub use image_store::ImageStore;
pub use minio_client::MinIOClient;
