//! Credential hashing.

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Errors that can occur while hashing a credential.
#[derive(Debug, Error)]
pub enum HashError {
    /// The hasher rejected the input or failed internally.
    #[error("password hashing error: {0}")]
    Hash(String),
}

/// Turns a plaintext credential into an irreversible stored form.
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext credential.
    ///
    /// # Errors
    ///
    /// Returns `HashError` if the underlying algorithm rejects the input.
    fn hash(&self, plaintext: &SecretString) -> Result<String, HashError>;
}

/// Argon2id with default parameters and a random salt per hash.
///
/// Output is the PHC string (`$argon2id$v=19$...`), verifiable with
/// [`argon2::PasswordVerifier`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Hasher;

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &SecretString) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(plaintext.expose_secret().as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| HashError::Hash(e.to_string()))
    }
}
