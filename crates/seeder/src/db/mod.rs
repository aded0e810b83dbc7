//! Database access for seeded records.
//!
//! # Tables
//!
//! - `app_user` - Accounts; the seeder inserts the administrator
//! - `product` - Catalog products
//!
//! # Migrations
//!
//! Migrations are stored in `crates/seeder/migrations/` and run on startup by
//! the `shop-seed` binary, or explicitly via:
//! ```bash
//! cargo run -p shop-seed-cli -- migrate
//! ```
//!
//! The seeders only see the [`AdminUserStore`] and [`ProductStore`] traits;
//! the `Pg*` types are the `PostgreSQL` implementations.

pub mod admin_users;
pub mod products;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use crate::models::{AdminUser, NewAdminUser, NewProduct, Product};

pub use admin_users::PgAdminUserStore;
pub use products::PgProductStore;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Classify a sqlx error, surfacing constraint violations as `Conflict`.
    pub(crate) fn from_insert(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err)
                if db_err.is_unique_violation() || db_err.is_check_violation() =>
            {
                Self::Conflict(db_err.message().to_owned())
            }
            other => Self::Database(other),
        }
    }
}

/// Persistence for administrator accounts.
#[async_trait]
pub trait AdminUserStore: Send + Sync {
    /// Insert one account and return it with its database fields.
    async fn save(&self, user: NewAdminUser) -> Result<AdminUser, RepositoryError>;
}

/// Persistence for catalog products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert every product in one batch, preserving order.
    async fn save_all(&self, products: Vec<NewProduct>) -> Result<Vec<Product>, RepositoryError>;
}

/// Create a `PostgreSQL` connection pool.
///
/// The seeder runs one statement at a time, so the pool stays small.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Apply the embedded migrations.
///
/// # Errors
///
/// Returns `MigrateError` if a migration fails or the history is inconsistent.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
