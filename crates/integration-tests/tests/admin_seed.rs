//! Integration tests for administrator seeding.

#![allow(clippy::unwrap_used)]

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use secrecy::ExposeSecret;

use shop_seed::services::Argon2Hasher;
use shop_seed::{SeedError, seed_admin};
use shop_seed_core::Role;
use shop_seed_integration_tests::{FailingHasher, InMemoryAdminStore, admin_config};

#[tokio::test]
async fn test_admin_created_with_hashed_password() {
    let store = InMemoryAdminStore::new();
    let config = admin_config();

    let admin = seed_admin(&store, &Argon2Hasher, &config).await.unwrap();

    assert_eq!(admin.name, "Store Owner");
    assert_eq!(admin.email, "owner@shop.test");
    assert_eq!(admin.roles, vec![Role::SuperAdmin]);
    assert!(admin.has_role(Role::SuperAdmin));
    assert!(admin.is_verified);
    assert!(!admin.is_locked);
    assert_eq!(admin.failed_attempts, 0);

    let plaintext = config.password.expose_secret();
    assert_ne!(admin.password_hash, plaintext);
    let parsed = PasswordHash::new(&admin.password_hash).unwrap();
    assert!(
        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    );

    assert_eq!(store.users().len(), 1);
}

#[tokio::test]
async fn test_seeding_twice_creates_two_admins() {
    let store = InMemoryAdminStore::new();
    let config = admin_config();

    let first = seed_admin(&store, &Argon2Hasher, &config).await.unwrap();
    let second = seed_admin(&store, &Argon2Hasher, &config).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.email, second.email);
    assert_ne!(first.password_hash, second.password_hash);
    assert_eq!(store.users().len(), 2);
}

#[tokio::test]
async fn test_hash_failure_inserts_nothing() {
    let store = InMemoryAdminStore::new();

    let err = seed_admin(&store, &FailingHasher, &admin_config())
        .await
        .unwrap_err();

    assert!(matches!(err, SeedError::Hash(_)));
    assert!(store.users().is_empty());
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let store = InMemoryAdminStore::failing();

    let err = seed_admin(&store, &Argon2Hasher, &admin_config())
        .await
        .unwrap_err();

    assert!(matches!(err, SeedError::Repository(_)));
}
