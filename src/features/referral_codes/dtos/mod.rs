pub mod referral_code_dto;
pub mod screenshots;

pub use referral_code_dto::{
    CreateReferralCodeDto, ReferralCodeQueryParams, ReferralCodeResponseDto,
    UpdateReferralCodeDto,
};
pub use screenshots::ScreenshotsInput;
