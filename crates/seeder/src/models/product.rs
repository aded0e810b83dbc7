//! Catalog product types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use shop_seed_core::{Category, ProductId};

/// A fixed sample product, before its image has been rehosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub price: Decimal,
    pub category: Category,
    /// Remote reference image.
    pub image_url: &'static str,
    pub rating: Decimal,
}

/// A product ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub stock: i32,
    pub price: Decimal,
    pub category: Category,
    /// Rehosted bucket URL, or the source URL when rehosting failed.
    pub image: String,
    pub rating: Decimal,
}

/// A persisted product.
#[derive(Debug, Clone)]
pub struct Product {
    /// Database ID.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub stock: i32,
    pub price: Decimal,
    pub category: Category,
    pub image: String,
    pub rating: Decimal,
    /// When the row was inserted.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Attach the database-assigned fields to an inserted record.
    #[must_use]
    pub fn from_new(id: ProductId, created_at: DateTime<Utc>, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            stock: new.stock,
            price: new.price,
            category: new.category,
            image: new.image,
            rating: new.rating,
            created_at,
        }
    }
}
