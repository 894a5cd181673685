pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod referral_codes;
pub mod slugs;
pub mod uploads;
