use super::jwks::JwksClient;
use super::model::{AuthenticatedUser, Role, RoleClaims};
use crate::core::config::AuthConfig;
use crate::core::error::AppError;
use jsonwebtoken::{decode, decode_header, Algorithm, Validation};
use serde::Deserialize;
use std::sync::Arc;

/// Verifies bearer tokens and resolves the user's role once per request
pub struct JwtValidator {
    jwks_client: Arc<JwksClient>,
    issuer: String,
    audience: String,
    admin_role: String,
    leeway: u64,
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(flatten)]
    roles: RoleClaims,
}

impl JwtValidator {
    pub fn new(jwks_client: Arc<JwksClient>, config: &AuthConfig) -> Self {
        Self {
            jwks_client,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            admin_role: config.admin_role.clone(),
            leeway: config.jwt_leeway.as_secs(),
        }
    }

    pub async fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let header = decode_header(token).map_err(|e| AppError::Unauthorized(e.to_string()))?;

        if header.alg != Algorithm::RS256 {
            return Err(AppError::Unauthorized(format!(
                "Unsupported algorithm: {:?}. Only RS256 is allowed",
                header.alg
            )));
        }

        let kid = header
            .kid
            .ok_or_else(|| AppError::Unauthorized("Missing kid in token header".to_string()))?;

        let decoding_key = self.jwks_client.get_key(&kid).await.map_err(|e| {
            tracing::warn!("Could not resolve signing key: {}", e);
            AppError::Unauthorized(e.to_string())
        })?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = self.leeway;
        validation.validate_nbf = true;

        let claims = decode::<Claims>(token, &decoding_key, &validation)
            .map_err(|e| AppError::Unauthorized(e.to_string()))?
            .claims;

        Ok(self.user_from_claims(claims))
    }

    fn user_from_claims(&self, claims: Claims) -> AuthenticatedUser {
        let role = Role::from_role_names(claims.roles.names(), &self.admin_role);
        AuthenticatedUser {
            id: claims.sub,
            email: claims.email,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn validator(admin_role: &str) -> JwtValidator {
        let config = AuthConfig {
            issuer: "https://id.example.com".to_string(),
            audience: "referral-admin".to_string(),
            jwks_url: "https://id.example.com/jwks".to_string(),
            admin_role: admin_role.to_string(),
            jwks_cache_ttl: Duration::from_secs(60),
            jwt_leeway: Duration::from_secs(0),
        };
        let jwks = Arc::new(JwksClient::new(&config.jwks_url, config.jwks_cache_ttl));
        JwtValidator::new(jwks, &config)
    }

    #[test]
    fn test_claims_resolve_role_once() {
        let claims: Claims = serde_json::from_value(serde_json::json!({
            "sub": "user-1",
            "email": "ops@example.com",
            "roles": ["staff", "admin"]
        }))
        .unwrap();

        let user = validator("admin").user_from_claims(claims);
        assert_eq!(user.id, "user-1");
        assert_eq!(user.email.as_deref(), Some("ops@example.com"));
        assert!(user.is_admin());
    }

    #[test]
    fn test_claims_without_admin_role_are_plain_users() {
        let claims: Claims = serde_json::from_value(serde_json::json!({
            "sub": "user-2",
            "role": "admin"
        }))
        .unwrap();

        let user = validator("owner").user_from_claims(claims);
        assert_eq!(user.role, Role::User);
        assert!(user.email.is_none());
    }

    #[tokio::test]
    async fn test_rejects_garbage_token() {
        let err = validator("admin")
            .validate_token("not-a-jwt")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
