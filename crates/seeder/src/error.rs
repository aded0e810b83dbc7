//! Errors that abort a seeding run.

use thiserror::Error;

use crate::config::ConfigError;
use crate::db::RepositoryError;
use crate::services::HashError;

/// A failure that stops the seeder.
///
/// Image rehosting failures never reach this type; they fall back to the
/// source URL instead.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database connection error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("credential hashing failed: {0}")]
    Hash(#[from] HashError),
}
