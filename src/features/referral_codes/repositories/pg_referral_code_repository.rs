use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::ReferralCodeRepository;
use crate::core::database::RepositoryResult;
use crate::features::referral_codes::models::{ReferralCodeFields, ReferralCodeView};

pub struct PgReferralCodeRepository {
    pool: PgPool,
}

impl PgReferralCodeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferralCodeRepository for PgReferralCodeRepository {
    async fn list_all(&self) -> RepositoryResult<Vec<ReferralCodeView>> {
        let codes = sqlx::query_as::<_, ReferralCodeView>(
            r#"
            SELECT r.id, r.service_name, r.slug, r.code, r.url, r.category_id,
                   r.description, r.terms, r.user_benefit, r.referrer_benefit,
                   r.logo_url, r.screenshots, r.featured, r.meta_title,
                   r.created_at, r.updated_at, c.name AS category_name
            FROM referral_codes r
            JOIN categories c ON c.id = r.category_id
            ORDER BY r.service_name COLLATE "C", r.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(codes)
    }

    async fn list_by_category(&self, category_id: i64) -> RepositoryResult<Vec<ReferralCodeView>> {
        let codes = sqlx::query_as::<_, ReferralCodeView>(
            r#"
            SELECT r.id, r.service_name, r.slug, r.code, r.url, r.category_id,
                   r.description, r.terms, r.user_benefit, r.referrer_benefit,
                   r.logo_url, r.screenshots, r.featured, r.meta_title,
                   r.created_at, r.updated_at, c.name AS category_name
            FROM referral_codes r
            JOIN categories c ON c.id = r.category_id
            WHERE r.category_id = $1
            ORDER BY r.service_name COLLATE "C", r.id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(codes)
    }

    async fn list_featured(&self) -> RepositoryResult<Vec<ReferralCodeView>> {
        let codes = sqlx::query_as::<_, ReferralCodeView>(
            r#"
            SELECT r.id, r.service_name, r.slug, r.code, r.url, r.category_id,
                   r.description, r.terms, r.user_benefit, r.referrer_benefit,
                   r.logo_url, r.screenshots, r.featured, r.meta_title,
                   r.created_at, r.updated_at, c.name AS category_name
            FROM referral_codes r
            JOIN categories c ON c.id = r.category_id
            WHERE r.featured = TRUE
            ORDER BY r.service_name COLLATE "C", r.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(codes)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<ReferralCodeView>> {
        let code = sqlx::query_as::<_, ReferralCodeView>(
            r#"
            SELECT r.id, r.service_name, r.slug, r.code, r.url, r.category_id,
                   r.description, r.terms, r.user_benefit, r.referrer_benefit,
                   r.logo_url, r.screenshots, r.featured, r.meta_title,
                   r.created_at, r.updated_at, c.name AS category_name
            FROM referral_codes r
            JOIN categories c ON c.id = r.category_id
            WHERE r.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(code)
    }

    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<ReferralCodeView>> {
        let code = sqlx::query_as::<_, ReferralCodeView>(
            r#"
            SELECT r.id, r.service_name, r.slug, r.code, r.url, r.category_id,
                   r.description, r.terms, r.user_benefit, r.referrer_benefit,
                   r.logo_url, r.screenshots, r.featured, r.meta_title,
                   r.created_at, r.updated_at, c.name AS category_name
            FROM referral_codes r
            JOIN categories c ON c.id = r.category_id
            WHERE r.slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(code)
    }

    async fn insert(
        &self,
        fields: &ReferralCodeFields,
        now: DateTime<Utc>,
    ) -> RepositoryResult<ReferralCodeView> {
        let code = sqlx::query_as::<_, ReferralCodeView>(
            r#"
            WITH inserted AS (
                INSERT INTO referral_codes (
                    service_name, slug, code, url, category_id, description, terms,
                    user_benefit, referrer_benefit, logo_url, screenshots, featured,
                    meta_title, created_at, updated_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $14)
                RETURNING *
            )
            SELECT i.id, i.service_name, i.slug, i.code, i.url, i.category_id,
                   i.description, i.terms, i.user_benefit, i.referrer_benefit,
                   i.logo_url, i.screenshots, i.featured, i.meta_title,
                   i.created_at, i.updated_at, c.name AS category_name
            FROM inserted i
            JOIN categories c ON c.id = i.category_id
            "#,
        )
        .bind(&fields.service_name)
        .bind(&fields.slug)
        .bind(&fields.code)
        .bind(&fields.url)
        .bind(fields.category_id)
        .bind(&fields.description)
        .bind(&fields.terms)
        .bind(&fields.user_benefit)
        .bind(&fields.referrer_benefit)
        .bind(&fields.logo_url)
        .bind(&fields.screenshots)
        .bind(fields.featured)
        .bind(&fields.meta_title)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(code)
    }

    async fn update(
        &self,
        id: i64,
        fields: &ReferralCodeFields,
        updated_at: DateTime<Utc>,
    ) -> RepositoryResult<Option<ReferralCodeView>> {
        let code = sqlx::query_as::<_, ReferralCodeView>(
            r#"
            WITH updated AS (
                UPDATE referral_codes
                SET service_name = $2, slug = $3, code = $4, url = $5, category_id = $6,
                    description = $7, terms = $8, user_benefit = $9, referrer_benefit = $10,
                    logo_url = $11, screenshots = $12, featured = $13, meta_title = $14,
                    updated_at = $15
                WHERE id = $1
                RETURNING *
            )
            SELECT u.id, u.service_name, u.slug, u.code, u.url, u.category_id,
                   u.description, u.terms, u.user_benefit, u.referrer_benefit,
                   u.logo_url, u.screenshots, u.featured, u.meta_title,
                   u.created_at, u.updated_at, c.name AS category_name
            FROM updated u
            JOIN categories c ON c.id = u.category_id
            "#,
        )
        .bind(id)
        .bind(&fields.service_name)
        .bind(&fields.slug)
        .bind(&fields.code)
        .bind(&fields.url)
        .bind(fields.category_id)
        .bind(&fields.description)
        .bind(&fields.terms)
        .bind(&fields.user_benefit)
        .bind(&fields.referrer_benefit)
        .bind(&fields.logo_url)
        .bind(&fields.screenshots)
        .bind(fields.featured)
        .bind(&fields.meta_title)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(code)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM referral_codes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> RepositoryResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM referral_codes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn count_featured(&self) -> RepositoryResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM referral_codes WHERE featured = TRUE",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
