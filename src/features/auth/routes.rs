use crate::features::auth::handler;
use axum::{routing::get, Router};

/// Auth routes (behind the JWT middleware)
pub fn routes() -> Router {
    Router::new().route("/api/auth/me", get(handler::get_me))
}
