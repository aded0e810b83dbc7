//! Shop Seed - startup data seeder for the shop database.
//!
//! Creates one administrator account and a fixed sample catalog. Each
//! product image is downloaded and re-uploaded to an S3-compatible bucket;
//! when that fails the product keeps its original image URL.
//!
//! # Modules
//!
//! - [`config`] - Environment configuration
//! - [`db`] - `PostgreSQL` stores and migrations
//! - [`images`] - Remote image download
//! - [`storage`] - Object storage and key naming
//! - [`services`] - Password hashing
//! - [`seed`] - The admin and catalog seeders
//! - [`telemetry`] - Tracing and Sentry setup

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod images;
pub mod models;
pub mod seed;
pub mod services;
pub mod storage;
pub mod telemetry;

pub use config::{AdminSeedConfig, ConfigError, SeedConfig, StorageConfig};
pub use error::SeedError;
pub use seed::{
    CATALOG, CatalogReport, ImageRehoster, RehostOutcome, SeedReport, Seeder, build_product,
    seed_admin, seed_catalog,
};
