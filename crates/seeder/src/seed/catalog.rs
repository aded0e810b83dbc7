//! Sample catalog seeding.

use tracing::{info, instrument};

use crate::db::ProductStore;
use crate::error::SeedError;
use crate::models::{NewProduct, Product, ProductDescriptor};

use super::rehost::ImageRehoster;

/// Stock level given to every seeded product.
pub const SEED_STOCK: i32 = 100;

/// What a catalog run produced.
#[derive(Debug, Clone)]
pub struct CatalogReport {
    /// Inserted products, in catalog order.
    pub products: Vec<Product>,
    /// Products whose image now lives in the bucket.
    pub rehosted: usize,
    /// Products that kept their source image URL.
    pub fell_back: usize,
}

/// Turn a descriptor into an insertable product with the given image.
#[must_use]
pub fn build_product(descriptor: &ProductDescriptor, image_url: String) -> NewProduct {
    NewProduct {
        name: descriptor.name.to_owned(),
        description: descriptor.description.to_owned(),
        stock: SEED_STOCK,
        price: descriptor.price,
        category: descriptor.category,
        image: image_url,
        rating: descriptor.rating,
    }
}

/// Rehost each product's image, then insert all products in one batch.
///
/// Images are processed one at a time in catalog order. A failed rehost
/// only changes that product's image URL; a failed insert fails the run.
///
/// # Errors
///
/// Returns [`SeedError::Repository`] if the batch insert fails.
#[instrument(skip_all, fields(total = descriptors.len()))]
pub async fn seed_catalog(
    store: &dyn ProductStore,
    rehoster: &ImageRehoster,
    descriptors: &[ProductDescriptor],
) -> Result<CatalogReport, SeedError> {
    info!("Creating products with rehosted images");

    let total = descriptors.len();
    let mut rehosted = 0;
    let mut fell_back = 0;
    let mut pending = Vec::with_capacity(total);

    for (index, descriptor) in descriptors.iter().enumerate() {
        info!(index = index + 1, total, product = descriptor.name, "Processing product");

        let outcome = rehoster.rehost(descriptor.image_url, descriptor.name).await;
        if outcome.is_rehosted() {
            rehosted += 1;
        } else {
            fell_back += 1;
        }

        pending.push(build_product(descriptor, outcome.into_url()));
    }

    let products = store.save_all(pending).await?;

    info!(count = products.len(), rehosted, fell_back, "Products created");
    Ok(CatalogReport {
        products,
        rehosted,
        fell_back,
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use shop_seed_core::Category;

    use super::*;

    #[test]
    fn test_build_product_copies_descriptor() {
        let descriptor = ProductDescriptor {
            name: "Yoga Mat",
            description: "Eco-friendly non-slip yoga mat",
            price: dec!(39.00),
            category: Category::Sports,
            image_url: "https://images.example/yoga.jpg",
            rating: dec!(4.7),
        };

        let product = build_product(&descriptor, "http://s3/bucket/products/x_Yoga_Mat.jpg".to_owned());

        assert_eq!(product.name, "Yoga Mat");
        assert_eq!(product.description, "Eco-friendly non-slip yoga mat");
        assert_eq!(product.stock, SEED_STOCK);
        assert_eq!(product.price, dec!(39.00));
        assert_eq!(product.category, Category::Sports);
        assert_eq!(product.image, "http://s3/bucket/products/x_Yoga_Mat.jpg");
        assert_eq!(product.rating, dec!(4.7));
    }
}
