use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::CategoryService;
use crate::features::dashboard::dtos::DashboardSummaryDto;
use crate::features::referral_codes::ReferralCodeService;
use crate::shared::constants::DASHBOARD_FEATURED_LIMIT;

/// Service for dashboard queries
pub struct DashboardService {
    categories: Arc<CategoryService>,
    referral_codes: Arc<ReferralCodeService>,
}

impl DashboardService {
    pub fn new(categories: Arc<CategoryService>, referral_codes: Arc<ReferralCodeService>) -> Self {
        Self {
            categories,
            referral_codes,
        }
    }

    /// Counts plus the lists shown on the landing screen, fetched concurrently
    pub async fn get_summary(&self) -> Result<DashboardSummaryDto> {
        let (total_categories, total_referral_codes, total_featured, categories, mut featured) =
            tokio::try_join!(
                self.categories.count(),
                self.referral_codes.count(),
                self.referral_codes.count_featured(),
                self.categories.list_all(),
                self.referral_codes.list_featured(),
            )?;

        featured.truncate(DASHBOARD_FEATURED_LIMIT);

        Ok(DashboardSummaryDto {
            total_categories,
            total_referral_codes,
            total_featured,
            categories,
            featured_referral_codes: featured,
        })
    }
}
