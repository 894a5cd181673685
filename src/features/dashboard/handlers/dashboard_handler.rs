use axum::{extract::State, Json};
use std::sync::Arc;

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::dashboard::dtos::DashboardSummaryDto;
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

/// Get dashboard summary
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = ApiResponse<DashboardSummaryDto>),
        (status = 401, description = "Unauthorized"),
        (status = 503, description = "Store unavailable")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_summary(
    _user: AuthenticatedUser,
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<DashboardSummaryDto>>, AppError> {
    let summary = service.get_summary().await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

#[cfg(test)]
mod tests {
    use crate::features::dashboard::{routes, DashboardService};
    use crate::shared::test_helpers::{regular_user, test_services, with_user};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;
    use std::sync::Arc;

    fn app() -> axum::Router {
        let services = test_services();
        let dashboard = Arc::new(DashboardService::new(
            services.categories,
            services.referral_codes,
        ));
        routes(dashboard)
    }

    #[tokio::test]
    async fn test_empty_dashboard() {
        let server = TestServer::new(with_user(app(), regular_user())).unwrap();

        let response = server.get("/api/dashboard").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["total_categories"], 0);
        assert_eq!(body["data"]["featured_referral_codes"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_dashboard_requires_user() {
        let server = TestServer::new(app()).unwrap();

        server
            .get("/api/dashboard")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}
