use crate::core::config::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

/// Storage-level failure, classified so services can tell constraint
/// violations apart from a backend that is down.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("unique constraint violated ({constraint})")]
    UniqueViolation { constraint: String },

    #[error("foreign key constraint violated ({constraint})")]
    ForeignKeyViolation { constraint: String },

    #[error("check constraint violated ({constraint})")]
    CheckViolation { constraint: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

// PostgreSQL SQLSTATE codes
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            let constraint = db_err.constraint().unwrap_or("unknown").to_string();
            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => return RepositoryError::UniqueViolation { constraint },
                Some(FOREIGN_KEY_VIOLATION) => {
                    return RepositoryError::ForeignKeyViolation { constraint }
                }
                Some(CHECK_VIOLATION) => return RepositoryError::CheckViolation { constraint },
                _ => {}
            }
        }

        tracing::error!("Database error: {:?}", e);
        RepositoryError::Unavailable(e.to_string())
    }
}
