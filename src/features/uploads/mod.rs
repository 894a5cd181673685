//! Image uploads for logos, screenshots and icons.
//!
//! Returns a public URL that is then stored verbatim on the referral code.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::UploadService;
