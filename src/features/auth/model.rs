use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{ROLE_ADMIN, ROLE_USER};

/// Capability level of a signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Resolve the role from the token's role names; anything but the
    /// configured admin role is a plain user.
    pub fn from_role_names<'a>(names: impl IntoIterator<Item = &'a str>, admin_role: &str) -> Self {
        if names.into_iter().any(|name| name == admin_role) {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::User => ROLE_USER,
        }
    }
}

/// The current user, resolved once per request by the auth middleware
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Subject of the identity provider token
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
}

impl AuthenticatedUser {
    /// Check if user may create, edit and delete records
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Role-related claims; providers put them either in a `roles` array or a single `role`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleClaims {
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl RoleClaims {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.roles
            .iter()
            .map(String::as_str)
            .chain(self.role.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_claims() {
        let claims = RoleClaims {
            roles: vec!["editor".to_string(), "admin".to_string()],
            role: None,
        };
        assert_eq!(Role::from_role_names(claims.names(), "admin"), Role::Admin);
        assert_eq!(Role::from_role_names(claims.names(), "owner"), Role::User);

        let single = RoleClaims {
            roles: vec![],
            role: Some("owner".to_string()),
        };
        assert_eq!(Role::from_role_names(single.names(), "owner"), Role::Admin);
        assert_eq!(
            Role::from_role_names(RoleClaims::default().names(), "admin"),
            Role::User
        );
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(Role::User.as_str(), "user");
    }
}
