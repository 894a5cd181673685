/// Longest accepted slug
pub const MAX_SLUG_LENGTH: u64 = 100;

/// Longest accepted display name (category name, service name)
pub const MAX_NAME_LENGTH: u64 = 200;

/// Upper bound on screenshots attached to one referral code
pub const MAX_SCREENSHOTS: usize = 10;

/// Number of featured referral codes shown on the dashboard
pub const DASHBOARD_FEATURED_LIMIT: usize = 5;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Role reported for users without the admin capability
pub const ROLE_USER: &str = "user";

/// Role reported for users with the admin capability
pub const ROLE_ADMIN: &str = "admin";
