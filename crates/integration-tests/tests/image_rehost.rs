//! Integration tests for image rehosting.
//!
//! Covers the upload path, every fallback path, and temporary file cleanup,
//! both with in-memory sources and against a local HTTP server.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use shop_seed::images::HttpImageSource;
use shop_seed::storage::JPEG_CONTENT_TYPE;
use shop_seed::{ImageRehoster, RehostOutcome};
use shop_seed_integration_tests::{
    Fakes, IMAGE_BYTES, ImageServer, InMemoryObjectStore, StaticImageSource, TEST_BUCKET,
    entries_in, storage_config, unreachable_url,
};

const SOURCE: &str = "https://images.example/yoga.jpg";

// =============================================================================
// In-memory Source
// =============================================================================

#[tokio::test]
async fn test_rehost_uploads_and_returns_bucket_url() {
    let temp = tempfile::tempdir().unwrap();
    let fakes = Fakes::default();

    let outcome = fakes.rehoster(temp.path()).rehost(SOURCE, "Yoga Mat").await;

    let url = match outcome {
        RehostOutcome::Rehosted(url) => url,
        other => panic!("expected rehosted outcome, got {other:?}"),
    };
    assert!(url.starts_with("http://localhost:4566/product-images/products/"));
    assert!(url.ends_with("_Yoga_Mat.jpg"));

    let objects = fakes.objects.objects();
    assert_eq!(objects.len(), 1);
    let object = &objects[0];
    assert_eq!(object.bucket, TEST_BUCKET);
    assert!(url.ends_with(&object.key));
    assert_eq!(object.content_type, JPEG_CONTENT_TYPE);
    assert_eq!(object.content_length, IMAGE_BYTES.len() as u64);
    assert_eq!(object.body, IMAGE_BYTES);
}

#[tokio::test]
async fn test_temp_file_removed_after_upload() {
    let temp = tempfile::tempdir().unwrap();
    let fakes = Fakes::default();

    fakes.rehoster(temp.path()).rehost(SOURCE, "Yoga Mat").await;

    let object = fakes.objects.objects().pop().unwrap();
    let file_name = object.source_path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(file_name.starts_with("product_img_"));
    assert!(file_name.ends_with(".jpg"));
    assert!(object.source_path.starts_with(temp.path()));

    assert!(!object.source_path.exists());
    assert_eq!(entries_in(temp.path()), 0);
}

#[tokio::test]
async fn test_download_failure_falls_back_without_upload() {
    let temp = tempfile::tempdir().unwrap();
    let fakes = Fakes {
        images: Arc::new(StaticImageSource::failing_for([SOURCE])),
        ..Fakes::default()
    };

    let outcome = fakes.rehoster(temp.path()).rehost(SOURCE, "Yoga Mat").await;

    assert_eq!(outcome, RehostOutcome::FallbackToOrigin(SOURCE.to_owned()));
    assert!(fakes.objects.objects().is_empty());
    assert_eq!(entries_in(temp.path()), 0);
}

#[tokio::test]
async fn test_upload_failure_falls_back_and_cleans_up() {
    let temp = tempfile::tempdir().unwrap();
    let fakes = Fakes {
        objects: Arc::new(InMemoryObjectStore::failing()),
        ..Fakes::default()
    };

    let outcome = fakes.rehoster(temp.path()).rehost(SOURCE, "Yoga Mat").await;

    assert_eq!(outcome, RehostOutcome::FallbackToOrigin(SOURCE.to_owned()));
    assert_eq!(fakes.images.requested(), vec![SOURCE.to_owned()]);
    assert_eq!(entries_in(temp.path()), 0);
}

#[tokio::test]
async fn test_unusable_temp_dir_falls_back() {
    let temp = tempfile::tempdir().unwrap();
    let missing = temp.path().join("does-not-exist");
    let fakes = Fakes::default();

    let outcome = fakes.rehoster(&missing).rehost(SOURCE, "Yoga Mat").await;

    assert_eq!(outcome, RehostOutcome::FallbackToOrigin(SOURCE.to_owned()));
    assert!(fakes.images.requested().is_empty());
    assert!(fakes.objects.objects().is_empty());
}

#[tokio::test]
async fn test_public_endpoint_used_for_urls() {
    let temp = tempfile::tempdir().unwrap();
    let fakes = Fakes::default();
    let mut storage = storage_config();
    storage.endpoint = "http://localstack:4566".to_owned();
    storage.public_endpoint = "https://cdn.shop.test/".to_owned();

    let rehoster = ImageRehoster::new(fakes.images.clone(), fakes.objects.clone(), &storage)
        .with_temp_dir(temp.path());
    let url = rehoster.rehost(SOURCE, "Desk Lamp").await.into_url();

    assert!(url.starts_with("https://cdn.shop.test/product-images/products/"));
    assert!(url.ends_with("_Desk_Lamp.jpg"));
}

#[tokio::test]
async fn test_same_name_gets_distinct_keys() {
    let temp = tempfile::tempdir().unwrap();
    let fakes = Fakes::default();
    let rehoster = fakes.rehoster(temp.path());

    let first = rehoster.rehost(SOURCE, "Yoga Mat").await.into_url();
    let second = rehoster.rehost(SOURCE, "Yoga Mat").await.into_url();

    assert_ne!(first, second);
    assert_eq!(fakes.objects.objects().len(), 2);
}

// =============================================================================
// HTTP Source
// =============================================================================

fn http_rehoster(fakes: &Fakes, temp_dir: &std::path::Path) -> ImageRehoster {
    ImageRehoster::new(
        Arc::new(HttpImageSource::new()),
        fakes.objects.clone(),
        &storage_config(),
    )
    .with_temp_dir(temp_dir)
}

#[tokio::test]
async fn test_http_download_is_uploaded() {
    let server = ImageServer::spawn().await;
    let temp = tempfile::tempdir().unwrap();
    let fakes = Fakes::default();

    let outcome = http_rehoster(&fakes, temp.path())
        .rehost(&server.url("image.jpg"), "Running Shoes")
        .await;

    assert!(outcome.is_rehosted(), "{outcome:?}");
    let objects = fakes.objects.objects();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].body, IMAGE_BYTES);
    assert_eq!(objects[0].content_length, IMAGE_BYTES.len() as u64);
    assert_eq!(entries_in(temp.path()), 0);
}

#[tokio::test]
async fn test_http_error_status_falls_back() {
    let server = ImageServer::spawn().await;
    let temp = tempfile::tempdir().unwrap();
    let fakes = Fakes::default();
    let rehoster = http_rehoster(&fakes, temp.path());

    for path in ["missing.jpg", "broken.jpg"] {
        let source = server.url(path);
        let outcome = rehoster.rehost(&source, "Running Shoes").await;
        assert_eq!(outcome, RehostOutcome::FallbackToOrigin(source));
    }

    assert!(fakes.objects.objects().is_empty());
    assert_eq!(entries_in(temp.path()), 0);
}

#[tokio::test]
async fn test_unreachable_host_falls_back() {
    let temp = tempfile::tempdir().unwrap();
    let fakes = Fakes::default();
    let source = unreachable_url().await;

    let outcome = http_rehoster(&fakes, temp.path())
        .rehost(&source, "Graphic Tee")
        .await;

    assert_eq!(outcome, RehostOutcome::FallbackToOrigin(source));
    assert_eq!(entries_in(temp.path()), 0);
}

#[tokio::test]
async fn test_malformed_url_falls_back() {
    let temp = tempfile::tempdir().unwrap();
    let fakes = Fakes::default();

    let outcome = http_rehoster(&fakes, temp.path())
        .rehost("not a url", "Graphic Tee")
        .await;

    assert_eq!(outcome, RehostOutcome::FallbackToOrigin("not a url".to_owned()));
}
