use std::sync::Arc;

use validator::Validate;

use crate::core::database::RepositoryError;
use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::models::{Category, CategoryFields};
use crate::features::categories::repositories::CategoryRepository;
use crate::shared::slug::{resolve_slug, validate_slug, InvalidSlug};
use crate::shared::timestamps;
use crate::shared::validation::optional_text;

const SLUG_FORMAT_CHECK: &str = "categories_slug_format";

/// Convert a failed insert/update into a user-facing error
fn handle_write_error(e: RepositoryError, slug: &str) -> AppError {
    match e {
        RepositoryError::UniqueViolation { .. } => AppError::Conflict(format!(
            "slug '{}' is already used by another category; choose a different slug",
            slug
        )),
        RepositoryError::CheckViolation { ref constraint } if constraint == SLUG_FORMAT_CHECK => {
            AppError::validation("slug", InvalidSlug::Malformed.to_string())
        }
        other => other.into(),
    }
}

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// List all categories ordered by name
    pub async fn list_all(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repository.list_all().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    /// Get category by slug. `None` for unknown (or malformed) slugs.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<CategoryResponseDto>> {
        if validate_slug(slug).is_err() {
            return Ok(None);
        }
        let category = self.repository.find_by_slug(slug).await?;
        Ok(category.map(Into::into))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<CategoryResponseDto> {
        self.find(id).await.map(Into::into)
    }

    /// Create a category; the slug is derived from the name unless given
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        dto.validate()?;

        let name = dto.name.trim().to_string();
        let slug = resolve_slug(dto.slug.as_deref(), &name)
            .map_err(|e| AppError::validation("slug", e.to_string()))?;
        let fields = CategoryFields {
            name,
            slug,
            description: optional_text(dto.description),
        };

        let category = self
            .repository
            .insert(&fields, timestamps::now())
            .await
            .map_err(|e| handle_write_error(e, &fields.slug))?;

        tracing::info!(
            "Category created: id={}, slug={}",
            category.id,
            category.slug
        );
        Ok(category.into())
    }

    /// Apply a partial update. A new name keeps the current slug.
    pub async fn update(&self, id: i64, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        dto.validate()?;

        let existing = self.find(id).await?;
        let mut fields = existing.fields();
        if let Some(name) = dto.name {
            fields.name = name.trim().to_string();
        }
        if let Some(slug) = dto.slug {
            fields.slug = slug.trim().to_string();
        }
        if dto.description.is_some() {
            fields.description = optional_text(dto.description);
        }

        let category = self
            .repository
            .update(id, &fields, timestamps::touch(existing.updated_at))
            .await
            .map_err(|e| handle_write_error(e, &fields.slug))?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(
            "Category updated: id={}, slug={}",
            category.id,
            category.slug
        );
        Ok(category.into())
    }

    /// Delete a category. Fails with Conflict while referral codes use it.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(|e| match e {
                RepositoryError::ForeignKeyViolation { .. } => AppError::Conflict(
                    "category still has referral codes; move or delete them first".to_string(),
                ),
                other => other.into(),
            })?;

        if !deleted {
            return Err(not_found(id));
        }

        tracing::info!("Category deleted: id={}", id);
        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        Ok(self.repository.count().await?)
    }

    async fn find(&self, id: i64) -> Result<Category> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Category {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::referral_codes::dtos::CreateReferralCodeDto;
    use crate::shared::test_helpers::test_services;

    fn create_dto(name: &str, slug: Option<&str>) -> CreateCategoryDto {
        CreateCategoryDto {
            name: name.to_string(),
            slug: slug.map(str::to_string),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_create_derives_slug_and_stamps_timestamps() {
        let services = test_services();

        let created = services
            .categories
            .create(create_dto("  Food & Drink ", None))
            .await
            .unwrap();
        assert_eq!(created.name, "Food & Drink");
        assert_eq!(created.slug, "food-drink");

        let fetched = services.categories.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn test_duplicate_slug_conflicts_and_first_survives() {
        let services = test_services();
        let first = services
            .categories
            .create(create_dto("Streaming", Some("streaming")))
            .await
            .unwrap();

        let err = services
            .categories
            .create(create_dto("Streaming Two", Some("streaming")))
            .await
            .unwrap_err();
        match err {
            AppError::Conflict(msg) => assert!(msg.contains("slug 'streaming'")),
            other => panic!("unexpected error: {:?}", other),
        }

        let found = services
            .categories
            .get_by_slug("streaming")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn test_punctuation_name_is_a_slug_validation_error() {
        let services = test_services();

        let err = services
            .categories
            .create(create_dto("!!!", None))
            .await
            .unwrap_err();
        match err {
            AppError::Validation(messages) => assert_eq!(messages, vec!["slug: slug is required"]),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(services.categories.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_explicit_malformed_slug_is_rejected() {
        let services = test_services();

        let err = services
            .categories
            .create(create_dto("Travel", Some("Travel_Deals")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_refreshes_updated_at_and_keeps_slug_on_rename() {
        let services = test_services();
        let created = services
            .categories
            .create(create_dto("Finance", None))
            .await
            .unwrap();

        let updated = services
            .categories
            .update(
                created.id,
                UpdateCategoryDto {
                    name: Some("Personal Finance".to_string()),
                    description: Some("Banks and brokers".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Personal Finance");
        assert_eq!(updated.slug, "finance");
        assert_eq!(updated.description.as_deref(), Some("Banks and brokers"));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);

        let cleared = services
            .categories
            .update(
                created.id,
                UpdateCategoryDto {
                    description: Some("  ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(cleared.description, None);
        assert!(cleared.updated_at > updated.updated_at);
    }

    #[tokio::test]
    async fn test_update_to_taken_slug_conflicts() {
        let services = test_services();
        services
            .categories
            .create(create_dto("Music", None))
            .await
            .unwrap();
        let games = services
            .categories
            .create(create_dto("Games", None))
            .await
            .unwrap();

        let err = services
            .categories
            .update(
                games.id,
                UpdateCategoryDto {
                    slug: Some("music".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let services = test_services();

        let err = services
            .categories
            .update(42, UpdateCategoryDto::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let services = test_services();
        let created = services
            .categories
            .create(create_dto("Travel", None))
            .await
            .unwrap();

        services.categories.delete(created.id).await.unwrap();

        assert!(matches!(
            services.categories.get_by_id(created.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            services.categories.delete(created.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_in_use_category_conflicts() {
        let services = test_services();
        let category = services
            .categories
            .create(create_dto("Streaming", None))
            .await
            .unwrap();
        services
            .referral_codes
            .create(CreateReferralCodeDto {
                service_name: "Netflix".to_string(),
                code: "NFLX-123".to_string(),
                url: "https://netflix.com/invite".to_string(),
                category_id: category.id,
                ..Default::default()
            })
            .await
            .unwrap();

        let err = services.categories.delete(category.id).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert!(services.categories.get_by_id(category.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_get_by_slug_unknown_or_malformed_is_none() {
        let services = test_services();

        assert!(services
            .categories
            .get_by_slug("never-created")
            .await
            .unwrap()
            .is_none());
        assert!(services
            .categories
            .get_by_slug("Not A Slug")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_list_all_orders_by_name() {
        let services = test_services();
        for name in ["Travel", "Finance", "Music"] {
            services
                .categories
                .create(create_dto(name, None))
                .await
                .unwrap();
        }

        let names: Vec<String> = services
            .categories
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Finance", "Music", "Travel"]);
    }

    #[tokio::test]
    async fn test_store_outage_is_store_unavailable() {
        let services = test_services();
        services.store.set_unavailable(true);

        assert!(matches!(
            services.categories.list_all().await,
            Err(AppError::StoreUnavailable(_))
        ));
        assert!(matches!(
            services.categories.get_by_slug("music").await,
            Err(AppError::StoreUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_update_trims_explicit_slug() {
        let services = test_services();
        let created = services
            .categories
            .create(create_dto("Music", Some(" music ")))
            .await
            .unwrap();
        assert_eq!(created.slug, "music");

        let updated = services
            .categories
            .update(
                created.id,
                UpdateCategoryDto {
                    slug: Some(" live-music ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.slug, "live-music");
    }

    #[test]
    fn test_only_the_slug_check_is_reported_on_slug() {
        let slug_err = handle_write_error(
            RepositoryError::CheckViolation {
                constraint: "categories_slug_format".to_string(),
            },
            "bad slug",
        );
        match slug_err {
            AppError::Validation(messages) => assert!(messages[0].starts_with("slug:")),
            other => panic!("unexpected error: {:?}", other),
        }

        let timestamps_err = handle_write_error(
            RepositoryError::CheckViolation {
                constraint: "categories_timestamps".to_string(),
            },
            "music",
        );
        match timestamps_err {
            AppError::Validation(messages) => {
                assert!(messages[0].starts_with("categories_timestamps:"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_all_orders_by_byte_value() {
        let services = test_services();
        for name in ["apple", "Banana", "Apple Music"] {
            services
                .categories
                .create(create_dto(name, None))
                .await
                .unwrap();
        }

        let names: Vec<String> = services
            .categories
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Apple Music", "Banana", "apple"]);
    }
}
