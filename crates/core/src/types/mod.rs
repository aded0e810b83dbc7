//! Core types for the seeder.

pub mod category;
pub mod id;
pub mod role;

pub use category::{Category, CategoryError};
pub use id::*;
pub use role::{Role, RoleError};
