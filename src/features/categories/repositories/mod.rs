mod pg_category_repository;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::database::RepositoryResult;
use crate::features::categories::models::{Category, CategoryFields};

pub use pg_category_repository::PgCategoryRepository;

/// Storage seam for categories.
///
/// Implementations enforce slug uniqueness and refuse to delete a category
/// that referral codes still point at (`ForeignKeyViolation`).
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by name in byte order (`COLLATE "C"`), then id
    async fn list_all(&self) -> RepositoryResult<Vec<Category>>;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Category>>;

    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<Category>>;

    /// Insert with `created_at = updated_at = now`
    async fn insert(&self, fields: &CategoryFields, now: DateTime<Utc>)
        -> RepositoryResult<Category>;

    /// Overwrite the writable columns; `None` when the id is absent
    async fn update(
        &self,
        id: i64,
        fields: &CategoryFields,
        updated_at: DateTime<Utc>,
    ) -> RepositoryResult<Option<Category>>;

    /// `false` when nothing was deleted
    async fn delete(&self, id: i64) -> RepositoryResult<bool>;

    async fn count(&self) -> RepositoryResult<i64>;
}
