use axum::{routing::post, Router};

use crate::features::slugs::handler;

pub fn routes() -> Router {
    Router::new().route("/api/slugs/preview", post(handler::preview_slug))
}
