//! Administrator account seeding.

use tracing::{info, instrument};

use shop_seed_core::Role;

use crate::config::AdminSeedConfig;
use crate::db::AdminUserStore;
use crate::error::SeedError;
use crate::models::{AdminUser, NewAdminUser};
use crate::services::CredentialHasher;

/// Build the administrator record from its configured identity.
///
/// The account starts verified and unlocked with the `super_admin` role.
#[must_use]
pub fn build_admin(config: &AdminSeedConfig, password_hash: String) -> NewAdminUser {
    NewAdminUser {
        name: config.name.clone(),
        email: config.email.clone(),
        password_hash,
        roles: vec![Role::SuperAdmin],
        is_verified: true,
        is_locked: false,
        failed_attempts: 0,
    }
}

/// Hash the configured password and insert the administrator.
///
/// No existence check is made; every call inserts a new account.
///
/// # Errors
///
/// Returns [`SeedError::Hash`] if hashing fails and [`SeedError::Repository`]
/// if the insert fails.
#[instrument(skip_all, fields(email = %config.email))]
pub async fn seed_admin(
    store: &dyn AdminUserStore,
    hasher: &dyn CredentialHasher,
    config: &AdminSeedConfig,
) -> Result<AdminUser, SeedError> {
    info!("Creating admin user");

    let password_hash = hasher.hash(&config.password)?;
    let admin = store.save(build_admin(config, password_hash)).await?;

    info!(id = %admin.id, "Admin user created");
    Ok(admin)
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    #[test]
    fn test_build_admin_flags() {
        let config = AdminSeedConfig {
            name: "Root".to_owned(),
            email: "root@example.com".to_owned(),
            password: SecretString::from("hunter2"),
        };

        let admin = build_admin(&config, "$argon2id$stub".to_owned());

        assert_eq!(admin.name, "Root");
        assert_eq!(admin.email, "root@example.com");
        assert_eq!(admin.password_hash, "$argon2id$stub");
        assert_eq!(admin.roles, vec![Role::SuperAdmin]);
        assert!(admin.is_verified);
        assert!(!admin.is_locked);
        assert_eq!(admin.failed_attempts, 0);
    }
}
