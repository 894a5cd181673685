use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::sync::Arc;

use crate::features::uploads::dtos::MAX_IMAGE_SIZE;
use crate::features::uploads::handlers::upload_image;
use crate::features::uploads::services::UploadService;

/// Image upload routes (admin only)
pub fn routes(service: Arc<UploadService>) -> Router {
    Router::new()
        .route(
            "/api/admin/uploads",
            post(upload_image).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 1024 * 1024)),
        )
        .with_state(service)
}
