//! Storage keys for product images.

use uuid::Uuid;

/// Key namespace for product images.
pub const PRODUCT_PREFIX: &str = "products/";

/// Replace every character outside `[A-Za-z0-9]` with `_`.
///
/// Each `char` maps to exactly one output character, so non-ASCII letters
/// become a single `_`.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Generate a fresh key: `products/<uuid-v4>_<sanitized-name>.jpg`.
#[must_use]
pub fn product_image_key(product_name: &str) -> String {
    format!(
        "{PRODUCT_PREFIX}{}_{}.jpg",
        Uuid::new_v4(),
        sanitize_name(product_name)
    )
}
