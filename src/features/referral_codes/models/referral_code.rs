use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for referral code
#[derive(Debug, Clone, FromRow)]
pub struct ReferralCode {
    pub id: i64,
    pub service_name: String,
    pub slug: String,
    pub code: String,
    pub url: String,
    pub category_id: i64,
    pub description: Option<String>,
    pub terms: Option<String>,
    pub user_benefit: Option<String>,
    pub referrer_benefit: Option<String>,
    pub logo_url: Option<String>,
    pub screenshots: Vec<String>,
    pub featured: bool,
    pub meta_title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Referral code with its category's name joined in. Read-only: writes go
/// through [`ReferralCodeFields`], which has no place for `category_name`.
#[derive(Debug, Clone, FromRow)]
pub struct ReferralCodeView {
    #[sqlx(flatten)]
    pub record: ReferralCode,
    pub category_name: String,
}

/// Writable columns of a referral code (no id, no timestamps)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferralCodeFields {
    pub service_name: String,
    pub slug: String,
    pub code: String,
    pub url: String,
    pub category_id: i64,
    pub description: Option<String>,
    pub terms: Option<String>,
    pub user_benefit: Option<String>,
    pub referrer_benefit: Option<String>,
    pub logo_url: Option<String>,
    pub screenshots: Vec<String>,
    pub featured: bool,
    pub meta_title: Option<String>,
}

impl ReferralCode {
    pub fn fields(&self) -> ReferralCodeFields {
        ReferralCodeFields {
            service_name: self.service_name.clone(),
            slug: self.slug.clone(),
            code: self.code.clone(),
            url: self.url.clone(),
            category_id: self.category_id,
            description: self.description.clone(),
            terms: self.terms.clone(),
            user_benefit: self.user_benefit.clone(),
            referrer_benefit: self.referrer_benefit.clone(),
            logo_url: self.logo_url.clone(),
            screenshots: self.screenshots.clone(),
            featured: self.featured,
            meta_title: self.meta_title.clone(),
        }
    }
}
