mod pg_referral_code_repository;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::database::RepositoryResult;
use crate::features::referral_codes::models::{ReferralCodeFields, ReferralCodeView};

pub use pg_referral_code_repository::PgReferralCodeRepository;

/// Storage seam for referral codes. Every read joins the category name.
///
/// Implementations enforce slug uniqueness and reject a `category_id` that
/// does not resolve (`ForeignKeyViolation`).
#[async_trait]
pub trait ReferralCodeRepository: Send + Sync {
    /// All referral codes ordered by service name in byte order (`COLLATE "C"`), then id
    async fn list_all(&self) -> RepositoryResult<Vec<ReferralCodeView>>;

    async fn list_by_category(&self, category_id: i64) -> RepositoryResult<Vec<ReferralCodeView>>;

    async fn list_featured(&self) -> RepositoryResult<Vec<ReferralCodeView>>;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<ReferralCodeView>>;

    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<ReferralCodeView>>;

    /// Insert with `created_at = updated_at = now`
    async fn insert(
        &self,
        fields: &ReferralCodeFields,
        now: DateTime<Utc>,
    ) -> RepositoryResult<ReferralCodeView>;

    /// Overwrite the writable columns; `None` when the id is absent
    async fn update(
        &self,
        id: i64,
        fields: &ReferralCodeFields,
        updated_at: DateTime<Utc>,
    ) -> RepositoryResult<Option<ReferralCodeView>>;

    /// `false` when nothing was deleted
    async fn delete(&self, id: i64) -> RepositoryResult<bool>;

    async fn count(&self) -> RepositoryResult<i64>;

    async fn count_featured(&self) -> RepositoryResult<i64>;
}
