//! In-process stand-in for PostgreSQL used by service and handler tests.
//!
//! Mirrors the constraints of the migrations: unique slugs per table, slug
//! format checks, `category_id` must resolve, and categories in use cannot be
//! deleted. `set_unavailable(true)` makes every call fail like a dropped
//! connection.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::core::database::{RepositoryError, RepositoryResult};
use crate::features::categories::models::{Category, CategoryFields};
use crate::features::categories::repositories::CategoryRepository;
use crate::features::referral_codes::models::{ReferralCode, ReferralCodeFields, ReferralCodeView};
use crate::features::referral_codes::repositories::ReferralCodeRepository;
use crate::shared::validation::SLUG_REGEX;

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    referral_codes: BTreeMap<i64, ReferralCode>,
    next_category_id: i64,
    next_referral_code_id: i64,
}

impl Tables {
    fn view(&self, record: &ReferralCode) -> ReferralCodeView {
        let category_name = self
            .categories
            .get(&record.category_id)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        ReferralCodeView {
            record: record.clone(),
            category_name,
        }
    }

    fn views<'a>(&self, records: impl Iterator<Item = &'a ReferralCode>) -> Vec<ReferralCodeView> {
        let mut views: Vec<ReferralCodeView> = records.map(|r| self.view(r)).collect();
        views.sort_by(|a, b| {
            (&a.record.service_name, a.record.id).cmp(&(&b.record.service_name, b.record.id))
        });
        views
    }

    fn check_category(&self, id: Option<i64>, fields: &CategoryFields) -> RepositoryResult<()> {
        if !SLUG_REGEX.is_match(&fields.slug) {
            return Err(check_violation("categories_slug_format"));
        }
        if self
            .categories
            .values()
            .any(|c| c.slug == fields.slug && Some(c.id) != id)
        {
            return Err(RepositoryError::UniqueViolation {
                constraint: "categories_slug_key".to_string(),
            });
        }
        Ok(())
    }

    fn check_referral_code(
        &self,
        id: Option<i64>,
        fields: &ReferralCodeFields,
    ) -> RepositoryResult<()> {
        if !SLUG_REGEX.is_match(&fields.slug) {
            return Err(check_violation("referral_codes_slug_format"));
        }
        if self
            .referral_codes
            .values()
            .any(|r| r.slug == fields.slug && Some(r.id) != id)
        {
            return Err(RepositoryError::UniqueViolation {
                constraint: "referral_codes_slug_key".to_string(),
            });
        }
        if !self.categories.contains_key(&fields.category_id) {
            return Err(RepositoryError::ForeignKeyViolation {
                constraint: "referral_codes_category_id_fkey".to_string(),
            });
        }
        Ok(())
    }
}

fn check_violation(constraint: &str) -> RepositoryError {
    RepositoryError::CheckViolation {
        constraint: constraint.to_string(),
    }
}

fn referral_code_from(
    id: i64,
    fields: &ReferralCodeFields,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> ReferralCode {
    ReferralCode {
        id,
        service_name: fields.service_name.clone(),
        slug: fields.slug.clone(),
        code: fields.code.clone(),
        url: fields.url.clone(),
        category_id: fields.category_id,
        description: fields.description.clone(),
        terms: fields.terms.clone(),
        user_benefit: fields.user_benefit.clone(),
        referrer_benefit: fields.referrer_benefit.clone(),
        logo_url: fields.logo_url.clone(),
        screenshots: fields.screenshots.clone(),
        featured: fields.featured,
        meta_title: fields.meta_title.clone(),
        created_at,
        updated_at,
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> RepositoryResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(RepositoryError::Unavailable("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn list_all(&self) -> RepositoryResult<Vec<Category>> {
        self.ensure_available()?;
        let tables = self.tables.read().await;
        let mut categories: Vec<Category> = tables.categories.values().cloned().collect();
        categories.sort_by(|a, b| (&a.name, a.id).cmp(&(&b.name, b.id)));
        Ok(categories)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Category>> {
        self.ensure_available()?;
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<Category>> {
        self.ensure_available()?;
        let tables = self.tables.read().await;
        Ok(tables.categories.values().find(|c| c.slug == slug).cloned())
    }

    async fn insert(
        &self,
        fields: &CategoryFields,
        now: DateTime<Utc>,
    ) -> RepositoryResult<Category> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;
        tables.check_category(None, fields)?;

        tables.next_category_id += 1;
        let category = Category {
            id: tables.next_category_id,
            name: fields.name.clone(),
            slug: fields.slug.clone(),
            description: fields.description.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn update(
        &self,
        id: i64,
        fields: &CategoryFields,
        updated_at: DateTime<Utc>,
    ) -> RepositoryResult<Option<Category>> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;
        if !tables.categories.contains_key(&id) {
            return Ok(None);
        }
        tables.check_category(Some(id), fields)?;

        let Some(category) = tables.categories.get_mut(&id) else {
            return Ok(None);
        };
        if updated_at < category.created_at {
            return Err(check_violation("categories_timestamps"));
        }
        category.name = fields.name.clone();
        category.slug = fields.slug.clone();
        category.description = fields.description.clone();
        category.updated_at = updated_at;
        Ok(Some(category.clone()))
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;
        if tables.referral_codes.values().any(|r| r.category_id == id) {
            return Err(RepositoryError::ForeignKeyViolation {
                constraint: "referral_codes_category_id_fkey".to_string(),
            });
        }
        Ok(tables.categories.remove(&id).is_some())
    }

    async fn count(&self) -> RepositoryResult<i64> {
        self.ensure_available()?;
        Ok(self.tables.read().await.categories.len() as i64)
    }
}

#[async_trait]
impl ReferralCodeRepository for MemoryStore {
    async fn list_all(&self) -> RepositoryResult<Vec<ReferralCodeView>> {
        self.ensure_available()?;
        let tables = self.tables.read().await;
        Ok(tables.views(tables.referral_codes.values()))
    }

    async fn list_by_category(&self, category_id: i64) -> RepositoryResult<Vec<ReferralCodeView>> {
        self.ensure_available()?;
        let tables = self.tables.read().await;
        Ok(tables.views(
            tables
                .referral_codes
                .values()
                .filter(|r| r.category_id == category_id),
        ))
    }

    async fn list_featured(&self) -> RepositoryResult<Vec<ReferralCodeView>> {
        self.ensure_available()?;
        let tables = self.tables.read().await;
        Ok(tables.views(tables.referral_codes.values().filter(|r| r.featured)))
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<ReferralCodeView>> {
        self.ensure_available()?;
        let tables = self.tables.read().await;
        Ok(tables.referral_codes.get(&id).map(|r| tables.view(r)))
    }

    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<ReferralCodeView>> {
        self.ensure_available()?;
        let tables = self.tables.read().await;
        Ok(tables
            .referral_codes
            .values()
            .find(|r| r.slug == slug)
            .map(|r| tables.view(r)))
    }

    async fn insert(
        &self,
        fields: &ReferralCodeFields,
        now: DateTime<Utc>,
    ) -> RepositoryResult<ReferralCodeView> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;
        tables.check_referral_code(None, fields)?;

        tables.next_referral_code_id += 1;
        let record = referral_code_from(tables.next_referral_code_id, fields, now, now);
        tables.referral_codes.insert(record.id, record.clone());
        Ok(tables.view(&record))
    }

    async fn update(
        &self,
        id: i64,
        fields: &ReferralCodeFields,
        updated_at: DateTime<Utc>,
    ) -> RepositoryResult<Option<ReferralCodeView>> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;
        let Some(created_at) = tables.referral_codes.get(&id).map(|r| r.created_at) else {
            return Ok(None);
        };
        tables.check_referral_code(Some(id), fields)?;
        if updated_at < created_at {
            return Err(check_violation("referral_codes_timestamps"));
        }

        let record = referral_code_from(id, fields, created_at, updated_at);
        tables.referral_codes.insert(id, record.clone());
        Ok(Some(tables.view(&record)))
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        self.ensure_available()?;
        Ok(self.tables.write().await.referral_codes.remove(&id).is_some())
    }

    async fn count(&self) -> RepositoryResult<i64> {
        self.ensure_available()?;
        Ok(self.tables.read().await.referral_codes.len() as i64)
    }

    async fn count_featured(&self) -> RepositoryResult<i64> {
        self.ensure_available()?;
        let tables = self.tables.read().await;
        Ok(tables.referral_codes.values().filter(|r| r.featured).count() as i64)
    }
}
