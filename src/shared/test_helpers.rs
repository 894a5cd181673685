use std::sync::Arc;

use axum::{extract::Request, middleware::Next, Router};

use crate::features::auth::model::{AuthenticatedUser, Role};
use crate::features::categories::repositories::CategoryRepository;
use crate::features::categories::CategoryService;
use crate::features::referral_codes::repositories::ReferralCodeRepository;
use crate::features::referral_codes::ReferralCodeService;
use crate::shared::memory_store::MemoryStore;

pub fn admin_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: "admin-sub".to_string(),
        email: Some("admin@example.com".to_string()),
        role: Role::Admin,
    }
}

pub fn regular_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: "user-sub".to_string(),
        email: Some("user@example.com".to_string()),
        role: Role::User,
    }
}

/// Attach `user` to every request, standing in for the JWT middleware
pub fn with_user(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| {
            let user = user.clone();
            async move {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
        },
    ))
}

/// Services wired to one shared in-memory store
pub struct TestServices {
    pub store: Arc<MemoryStore>,
    pub categories: Arc<CategoryService>,
    pub referral_codes: Arc<ReferralCodeService>,
}

pub fn test_services() -> TestServices {
    let store = Arc::new(MemoryStore::new());
    let category_repository: Arc<dyn CategoryRepository> = store.clone();
    let referral_code_repository: Arc<dyn ReferralCodeRepository> = store.clone();

    TestServices {
        store,
        categories: Arc::new(CategoryService::new(category_repository.clone())),
        referral_codes: Arc::new(ReferralCodeService::new(
            referral_code_repository,
            category_repository,
        )),
    }
}
