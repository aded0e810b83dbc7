//! Business logic services.
//!
//! # Services
//!
//! - `password` - One-way credential hashing (Argon2id)

pub mod password;

pub use password::{Argon2Hasher, CredentialHasher, HashError};
