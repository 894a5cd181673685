//! Referral codes, each filed under one category.
//!
//! Every read returns the expanded view with `category_name`.
//!
//! | Method | Endpoint | Access |
//! |--------|----------|--------|
//! | GET | `/api/referral-codes?featured&category_id` | user |
//! | GET | `/api/referral-codes/{slug}` | user |
//! | POST | `/api/admin/referral-codes` | admin |
//! | GET/PUT/DELETE | `/api/admin/referral-codes/{id}` | admin |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::ReferralCodeService;
