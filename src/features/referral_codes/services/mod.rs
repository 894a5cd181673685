mod referral_code_service;

pub use referral_code_service::ReferralCodeService;
