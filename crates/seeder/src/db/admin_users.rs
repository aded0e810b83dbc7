//! `PostgreSQL` store for administrator accounts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use shop_seed_core::AdminUserId;

use super::{AdminUserStore, RepositoryError};
use crate::models::{AdminUser, NewAdminUser};

/// Internal row type for the insert's `RETURNING` clause.
#[derive(Debug, sqlx::FromRow)]
struct InsertedRow {
    id: i32,
    created_at: DateTime<Utc>,
}

/// Administrator store backed by the `app_user` table.
#[derive(Debug, Clone)]
pub struct PgAdminUserStore {
    pool: PgPool,
}

impl PgAdminUserStore {
    /// Create a new store over a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminUserStore for PgAdminUserStore {
    /// Insert the account. There is no uniqueness check on email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn save(&self, user: NewAdminUser) -> Result<AdminUser, RepositoryError> {
        let roles: Vec<String> = user.roles.iter().map(|r| r.as_str().to_owned()).collect();

        let row: InsertedRow = sqlx::query_as(
            r"
            INSERT INTO app_user
                (name, email, password_hash, roles, is_verified, is_locked, failed_attempts)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, created_at
            ",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(roles)
        .bind(user.is_verified)
        .bind(user.is_locked)
        .bind(user.failed_attempts)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_insert)?;

        Ok(AdminUser::from_new(
            AdminUserId::new(row.id),
            row.created_at,
            user,
        ))
    }
}
