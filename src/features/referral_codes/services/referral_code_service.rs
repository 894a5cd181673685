use std::sync::Arc;

use validator::Validate;

use crate::core::database::RepositoryError;
use crate::core::error::{AppError, Result};
use crate::features::categories::repositories::CategoryRepository;
use crate::features::referral_codes::dtos::{
    CreateReferralCodeDto, ReferralCodeResponseDto, ScreenshotsInput, UpdateReferralCodeDto,
};
use crate::features::referral_codes::models::{ReferralCodeFields, ReferralCodeView};
use crate::features::referral_codes::repositories::ReferralCodeRepository;
use crate::shared::constants::MAX_SCREENSHOTS;
use crate::shared::slug::{resolve_slug, validate_slug, InvalidSlug};
use crate::shared::timestamps;
use crate::shared::validation::{is_http_url, optional_text};

const SLUG_FORMAT_CHECK: &str = "referral_codes_slug_format";

/// Convert a failed insert/update into a user-facing error
fn handle_write_error(e: RepositoryError, fields: &ReferralCodeFields) -> AppError {
    match e {
        RepositoryError::UniqueViolation { .. } => AppError::Conflict(format!(
            "slug '{}' is already used by another referral code; choose a different slug",
            fields.slug
        )),
        RepositoryError::ForeignKeyViolation { .. } => AppError::validation(
            "category_id",
            format!("category {} does not exist", fields.category_id),
        ),
        RepositoryError::CheckViolation { ref constraint } if constraint == SLUG_FORMAT_CHECK => {
            AppError::validation("slug", InvalidSlug::Malformed.to_string())
        }
        other => other.into(),
    }
}

/// Normalize screenshot input and require absolute http(s) URLs
fn screenshot_urls(input: ScreenshotsInput) -> Result<Vec<String>> {
    let urls = input.normalize();

    if urls.len() > MAX_SCREENSHOTS {
        return Err(AppError::validation(
            "screenshots",
            format!("at most {} screenshots are allowed", MAX_SCREENSHOTS),
        ));
    }

    let invalid: Vec<String> = urls
        .iter()
        .filter(|url| !is_http_url(url))
        .map(|url| format!("screenshots: '{}' is not an absolute http(s) URL", url))
        .collect();
    if !invalid.is_empty() {
        return Err(AppError::Validation(invalid));
    }

    Ok(urls)
}

/// Service for referral code operations
pub struct ReferralCodeService {
    repository: Arc<dyn ReferralCodeRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl ReferralCodeService {
    pub fn new(
        repository: Arc<dyn ReferralCodeRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            repository,
            categories,
        }
    }

    /// List all referral codes ordered by service name
    pub async fn list_all(&self) -> Result<Vec<ReferralCodeResponseDto>> {
        let codes = self.repository.list_all().await?;
        Ok(into_dtos(codes))
    }

    pub async fn list_featured(&self) -> Result<Vec<ReferralCodeResponseDto>> {
        let codes = self.repository.list_featured().await?;
        Ok(into_dtos(codes))
    }

    /// Referral codes of one category; NotFound when the category does not exist
    pub async fn list_by_category(&self, category_id: i64) -> Result<Vec<ReferralCodeResponseDto>> {
        if self.categories.find_by_id(category_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Category {} not found",
                category_id
            )));
        }

        let codes = self.repository.list_by_category(category_id).await?;
        Ok(into_dtos(codes))
    }

    /// Get referral code by slug. `None` for unknown (or malformed) slugs.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<ReferralCodeResponseDto>> {
        if validate_slug(slug).is_err() {
            return Ok(None);
        }
        let code = self.repository.find_by_slug(slug).await?;
        Ok(code.map(Into::into))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ReferralCodeResponseDto> {
        self.find(id).await.map(Into::into)
    }

    /// Create a referral code; the slug is derived from the service name unless given
    pub async fn create(&self, dto: CreateReferralCodeDto) -> Result<ReferralCodeResponseDto> {
        dto.validate()?;

        let service_name = dto.service_name.trim().to_string();
        let slug = resolve_slug(dto.slug.as_deref(), &service_name)
            .map_err(|e| AppError::validation("slug", e.to_string()))?;
        let screenshots = match dto.screenshots {
            Some(input) => screenshot_urls(input)?,
            None => Vec::new(),
        };

        let fields = ReferralCodeFields {
            service_name,
            slug,
            code: dto.code.trim().to_string(),
            url: dto.url.trim().to_string(),
            category_id: dto.category_id,
            description: optional_text(dto.description),
            terms: optional_text(dto.terms),
            user_benefit: optional_text(dto.user_benefit),
            referrer_benefit: optional_text(dto.referrer_benefit),
            logo_url: optional_text(dto.logo_url),
            screenshots,
            featured: dto.featured,
            meta_title: optional_text(dto.meta_title),
        };

        let code = self
            .repository
            .insert(&fields, timestamps::now())
            .await
            .map_err(|e| handle_write_error(e, &fields))?;

        tracing::info!(
            "Referral code created: id={}, slug={}, category_id={}",
            code.record.id,
            code.record.slug,
            code.record.category_id
        );
        Ok(code.into())
    }

    /// Apply a partial update. A new service name keeps the current slug.
    pub async fn update(
        &self,
        id: i64,
        dto: UpdateReferralCodeDto,
    ) -> Result<ReferralCodeResponseDto> {
        dto.validate()?;
        let screenshots = dto.screenshots.map(screenshot_urls).transpose()?;

        let existing = self.find(id).await?.record;
        let mut fields = existing.fields();

        if let Some(service_name) = dto.service_name {
            fields.service_name = service_name.trim().to_string();
        }
        if let Some(slug) = dto.slug {
            fields.slug = slug.trim().to_string();
        }
        if let Some(code) = dto.code {
            fields.code = code.trim().to_string();
        }
        if let Some(url) = dto.url {
            fields.url = url.trim().to_string();
        }
        if let Some(category_id) = dto.category_id {
            fields.category_id = category_id;
        }
        if let Some(screenshots) = screenshots {
            fields.screenshots = screenshots;
        }
        if let Some(featured) = dto.featured {
            fields.featured = featured;
        }
        merge_text(&mut fields.description, dto.description);
        merge_text(&mut fields.terms, dto.terms);
        merge_text(&mut fields.user_benefit, dto.user_benefit);
        merge_text(&mut fields.referrer_benefit, dto.referrer_benefit);
        merge_text(&mut fields.logo_url, dto.logo_url);
        merge_text(&mut fields.meta_title, dto.meta_title);

        let code = self
            .repository
            .update(id, &fields, timestamps::touch(existing.updated_at))
            .await
            .map_err(|e| handle_write_error(e, &fields))?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(
            "Referral code updated: id={}, slug={}",
            code.record.id,
            code.record.slug
        );
        Ok(code.into())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Referral code deleted: id={}", id);
        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        Ok(self.repository.count().await?)
    }

    pub async fn count_featured(&self) -> Result<i64> {
        Ok(self.repository.count_featured().await?)
    }

    async fn find(&self, id: i64) -> Result<ReferralCodeView> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

/// Present text replaces the current value; blank clears it
fn merge_text(current: &mut Option<String>, change: Option<String>) {
    if change.is_some() {
        *current = optional_text(change);
    }
}

fn into_dtos(codes: Vec<ReferralCodeView>) -> Vec<ReferralCodeResponseDto> {
    codes.into_iter().map(Into::into).collect()
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Referral code {} not found", id))
}
