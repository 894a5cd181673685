mod referral_code_handler;

pub use referral_code_handler::*;
