//! Integration tests for catalog seeding.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;
use std::sync::Arc;

use rust_decimal_macros::dec;

use shop_seed::models::ProductDescriptor;
use shop_seed::seed::SEED_STOCK;
use shop_seed::{CATALOG, SeedError, seed_catalog};
use shop_seed_core::Category;
use shop_seed_integration_tests::{
    Fakes, InMemoryProductStore, StaticImageSource, entries_in,
};

const BUCKET_PREFIX: &str = "http://localhost:4566/product-images/products/";

#[tokio::test]
async fn test_full_catalog_rehosted_and_inserted_once() {
    let temp = tempfile::tempdir().unwrap();
    let fakes = Fakes::default();

    let report = seed_catalog(fakes.products.as_ref(), &fakes.rehoster(temp.path()), &CATALOG)
        .await
        .unwrap();

    assert_eq!(report.products.len(), 22);
    assert_eq!(report.rehosted, 22);
    assert_eq!(report.fell_back, 0);
    assert_eq!(fakes.products.batches(), vec![22]);
    assert_eq!(fakes.objects.objects().len(), 22);
    assert_eq!(entries_in(temp.path()), 0);

    for (product, descriptor) in report.products.iter().zip(CATALOG.iter()) {
        assert_eq!(product.name, descriptor.name);
        assert_eq!(product.description, descriptor.description);
        assert_eq!(product.price, descriptor.price);
        assert_eq!(product.category, descriptor.category);
        assert_eq!(product.rating, descriptor.rating);
        assert_eq!(product.stock, SEED_STOCK);
        assert!(product.image.starts_with(BUCKET_PREFIX), "{}", product.image);
    }
}

#[tokio::test]
async fn test_images_fetched_in_catalog_order() {
    let temp = tempfile::tempdir().unwrap();
    let fakes = Fakes::default();

    seed_catalog(fakes.products.as_ref(), &fakes.rehoster(temp.path()), &CATALOG)
        .await
        .unwrap();

    let expected: Vec<String> = CATALOG.iter().map(|p| p.image_url.to_owned()).collect();
    assert_eq!(fakes.images.requested(), expected);
}

#[tokio::test]
async fn test_shared_source_image_gets_separate_objects() {
    let temp = tempfile::tempdir().unwrap();
    let fakes = Fakes::default();

    let report = seed_catalog(fakes.products.as_ref(), &fakes.rehoster(temp.path()), &CATALOG)
        .await
        .unwrap();

    let images: HashSet<_> = report.products.iter().map(|p| p.image.as_str()).collect();
    assert_eq!(images.len(), CATALOG.len());

    let yoga_mat = report.products.iter().find(|p| p.name == "Yoga Mat").unwrap();
    let yoga_block = report.products.iter().find(|p| p.name == "Yoga Block").unwrap();
    assert!(yoga_mat.image.ends_with("_Yoga_Mat.jpg"));
    assert!(yoga_block.image.ends_with("_Yoga_Block.jpg"));

    let socks = report
        .products
        .iter()
        .find(|p| p.name == "Sports Socks (3 Pack)")
        .unwrap();
    assert!(socks.image.ends_with("_Sports_Socks__3_Pack_.jpg"));
}

#[tokio::test]
async fn test_failed_images_keep_source_url() {
    let temp = tempfile::tempdir().unwrap();
    let broken = CATALOG[0].image_url;
    let fakes = Fakes {
        images: Arc::new(StaticImageSource::failing_for([broken])),
        ..Fakes::default()
    };

    let report = seed_catalog(fakes.products.as_ref(), &fakes.rehoster(temp.path()), &CATALOG)
        .await
        .unwrap();

    assert_eq!(report.products.len(), 22);
    assert_eq!(report.fell_back, 1);
    assert_eq!(report.rehosted, 21);
    assert_eq!(report.products[0].image, broken);
    assert!(report.products[1].image.starts_with(BUCKET_PREFIX));
    assert_eq!(fakes.images.requested().len(), 22);
    assert_eq!(entries_in(temp.path()), 0);
}

#[tokio::test]
async fn test_every_image_failing_still_inserts_catalog() {
    let temp = tempfile::tempdir().unwrap();
    let fakes = Fakes {
        images: Arc::new(StaticImageSource::failing_for(
            CATALOG.iter().map(|p| p.image_url),
        )),
        ..Fakes::default()
    };

    let report = seed_catalog(fakes.products.as_ref(), &fakes.rehoster(temp.path()), &CATALOG)
        .await
        .unwrap();

    assert_eq!(report.fell_back, 22);
    assert!(fakes.objects.objects().is_empty());
    for (product, descriptor) in report.products.iter().zip(CATALOG.iter()) {
        assert_eq!(product.image, descriptor.image_url);
    }
}

#[tokio::test]
async fn test_batch_failure_propagates() {
    let temp = tempfile::tempdir().unwrap();
    let fakes = Fakes {
        products: Arc::new(InMemoryProductStore::failing()),
        ..Fakes::default()
    };

    let err = seed_catalog(fakes.products.as_ref(), &fakes.rehoster(temp.path()), &CATALOG)
        .await
        .unwrap_err();

    assert!(matches!(err, SeedError::Repository(_)));
    assert_eq!(fakes.products.batches(), vec![22]);
    assert!(fakes.products.products().is_empty());
    // Uploads already done are not rolled back
    assert_eq!(fakes.objects.objects().len(), 22);
}

#[tokio::test]
async fn test_custom_descriptors() {
    let temp = tempfile::tempdir().unwrap();
    let fakes = Fakes::default();
    let descriptors = [ProductDescriptor {
        name: "Café Table",
        description: "Small round table",
        price: dec!(120.50),
        category: Category::Home,
        image_url: "https://images.example/table.jpg",
        rating: dec!(0),
    }];

    let report = seed_catalog(fakes.products.as_ref(), &fakes.rehoster(temp.path()), &descriptors)
        .await
        .unwrap();

    assert_eq!(report.products.len(), 1);
    assert!(report.products[0].image.ends_with("_Caf__Table.jpg"));
    assert_eq!(report.products[0].price, dec!(120.50));
}
