use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::referral_codes::handlers;
use crate::features::referral_codes::services::ReferralCodeService;

/// Referral code routes; reads need a signed-in user, `/api/admin/*` needs the admin role
pub fn routes(service: Arc<ReferralCodeService>) -> Router {
    Router::new()
        .route("/api/referral-codes", get(handlers::list_referral_codes))
        .route("/api/referral-codes/{slug}", get(handlers::get_referral_code))
        .route(
            "/api/admin/referral-codes",
            post(handlers::create_referral_code),
        )
        .route(
            "/api/admin/referral-codes/{id}",
            get(handlers::get_referral_code_by_id)
                .put(handlers::update_referral_code)
                .delete(handlers::delete_referral_code),
        )
        .with_state(service)
}
