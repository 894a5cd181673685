use crate::core::error::Result;
use crate::features::auth::dto::MeResponseDto;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::ApiResponse;
use axum::Json;

/// Current user and its capability
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user retrieved successfully", body = ApiResponse<MeResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(user: AuthenticatedUser) -> Result<Json<ApiResponse<MeResponseDto>>> {
    Ok(Json(ApiResponse::success(Some(user.into()), None, None)))
}

#[cfg(test)]
mod tests {
    use crate::features::auth::routes;
    use crate::shared::test_helpers::{admin_user, regular_user, with_user};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    #[tokio::test]
    async fn test_me_reports_admin_capability() {
        let server = TestServer::new(with_user(routes::routes(), admin_user())).unwrap();

        let response = server.get("/api/auth/me").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["role"], "admin");
        assert_eq!(body["data"]["is_admin"], true);
    }

    #[tokio::test]
    async fn test_me_reports_plain_user() {
        let server = TestServer::new(with_user(routes::routes(), regular_user())).unwrap();

        let body: Value = server.get("/api/auth/me").await.json();
        assert_eq!(body["data"]["role"], "user");
        assert_eq!(body["data"]["is_admin"], false);
    }

    #[tokio::test]
    async fn test_me_requires_authentication() {
        let server = TestServer::new(routes::routes()).unwrap();

        server
            .get("/api/auth/me")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}
