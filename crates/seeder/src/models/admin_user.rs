//! Administrator account types.

use chrono::{DateTime, Utc};

use shop_seed_core::{AdminUserId, Role};

/// An administrator account ready to be inserted.
///
/// `password_hash` is always the hasher's output, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdminUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
    pub is_verified: bool,
    pub is_locked: bool,
    pub failed_attempts: i32,
}

/// A persisted administrator account.
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// Database ID.
    pub id: AdminUserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
    pub is_verified: bool,
    pub is_locked: bool,
    pub failed_attempts: i32,
    /// When the row was inserted.
    pub created_at: DateTime<Utc>,
}

impl AdminUser {
    /// Attach the database-assigned fields to an inserted record.
    #[must_use]
    pub fn from_new(id: AdminUserId, created_at: DateTime<Utc>, new: NewAdminUser) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            roles: new.roles,
            is_verified: new.is_verified,
            is_locked: new.is_locked,
            failed_attempts: new.failed_attempts,
            created_at,
        }
    }

    /// Whether the account holds the given role.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}
