use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::referral_codes::dtos::ReferralCodeResponseDto;

/// Landing screen of the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummaryDto {
    pub total_categories: i64,
    pub total_referral_codes: i64,
    pub total_featured: i64,
    /// All categories, for the quick-filter sidebar
    pub categories: Vec<CategoryResponseDto>,
    /// First featured codes by service name
    pub featured_referral_codes: Vec<ReferralCodeResponseDto>,
}
