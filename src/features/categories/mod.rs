//! Categories group referral codes and are addressed by slug.
//!
//! | Method | Endpoint | Access |
//! |--------|----------|--------|
//! | GET | `/api/categories` | user |
//! | GET | `/api/categories/{slug}` | user |
//! | POST | `/api/admin/categories` | admin |
//! | GET/PUT/DELETE | `/api/admin/categories/{id}` | admin |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::CategoryService;
