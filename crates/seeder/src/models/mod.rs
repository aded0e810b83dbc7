//! Domain types for seeded records.

pub mod admin_user;
pub mod product;

pub use admin_user::{AdminUser, NewAdminUser};
pub use product::{NewProduct, Product, ProductDescriptor};
