//! Shop Seed Core - Shared types library.
//!
//! This crate provides the plain types used by the seeder and its CLI:
//! - `seeder` - Startup routine that creates the admin account and sample catalog
//! - `cli` - Command-line tools for migrations and running individual phases
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. Enable the `postgres` feature for sqlx encode/decode support.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, user roles, and product categories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
