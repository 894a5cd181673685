mod referral_code;

pub use referral_code::{ReferralCode, ReferralCodeFields, ReferralCodeView};
