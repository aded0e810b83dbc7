//! The fixed sample catalog.

use rust_decimal_macros::dec;
use shop_seed_core::Category;

use crate::models::ProductDescriptor;

/// Every product seeded on startup, in insertion order.
pub const CATALOG: [ProductDescriptor; 22] = [
    ProductDescriptor {
        name: "Wireless Headphones Pro",
        description: "Premium wireless headphones with noise cancellation",
        price: dec!(299.00),
        category: Category::Electronics,
        image_url: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=400&fit=crop",
        rating: dec!(4.8),
    },
    ProductDescriptor {
        name: "Minimalist Watch",
        description: "Elegant minimalist watch with leather strap",
        price: dec!(199.00),
        category: Category::Accessories,
        image_url: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400&h=400&fit=crop",
        rating: dec!(4.6),
    },
    ProductDescriptor {
        name: "Premium T-Shirt",
        description: "Soft cotton t-shirt with perfect fit",
        price: dec!(79.00),
        category: Category::Clothing,
        image_url: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=400&fit=crop",
        rating: dec!(4.5),
    },
    ProductDescriptor {
        name: "Laptop Stand",
        description: "Adjustable aluminum laptop stand",
        price: dec!(89.00),
        category: Category::Electronics,
        image_url: "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?w=400&h=400&fit=crop",
        rating: dec!(4.7),
    },
    ProductDescriptor {
        name: "Ceramic Plant Pot",
        description: "Modern ceramic plant pot with drainage",
        price: dec!(45.00),
        category: Category::Home,
        image_url: "https://images.unsplash.com/photo-1485955900006-10f4d324d411?w=400&h=400&fit=crop",
        rating: dec!(4.3),
    },
    ProductDescriptor {
        name: "Running Shoes",
        description: "Lightweight running shoes with superior comfort",
        price: dec!(159.00),
        category: Category::Sports,
        image_url: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400&h=400&fit=crop",
        rating: dec!(4.6),
    },
    ProductDescriptor {
        name: "Bluetooth Speaker",
        description: "Portable Bluetooth speaker with deep bass",
        price: dec!(129.00),
        category: Category::Electronics,
        image_url: "https://images.unsplash.com/photo-1512446733611-9099a758e63c?w=400&h=400&fit=crop",
        rating: dec!(4.4),
    },
    ProductDescriptor {
        name: "Yoga Mat",
        description: "Eco-friendly non-slip yoga mat",
        price: dec!(39.00),
        category: Category::Sports,
        image_url: "https://images.unsplash.com/photo-1519864600265-abb23847ef2c?w=400&h=400&fit=crop",
        rating: dec!(4.7),
    },
    ProductDescriptor {
        name: "Leather Wallet",
        description: "Classic genuine leather wallet",
        price: dec!(59.00),
        category: Category::Accessories,
        image_url: "https://images.unsplash.com/photo-1519125323398-675f0ddb6308?w=400&h=400&fit=crop",
        rating: dec!(4.5),
    },
    ProductDescriptor {
        name: "Desk Lamp",
        description: "Adjustable LED desk lamp with touch control",
        price: dec!(75.00),
        category: Category::Home,
        image_url: "https://images.unsplash.com/photo-1465101046530-73398c7f28ca?w=400&h=400&fit=crop",
        rating: dec!(4.6),
    },
    ProductDescriptor {
        name: "Sports Water Bottle",
        description: "Stainless steel insulated water bottle",
        price: dec!(25.00),
        category: Category::Sports,
        image_url: "https://images.unsplash.com/photo-1503602642458-232111445657?w=400&h=400&fit=crop",
        rating: dec!(4.8),
    },
    ProductDescriptor {
        name: "Scented Candle",
        description: "Hand-poured soy wax scented candle",
        price: dec!(35.00),
        category: Category::Home,
        image_url: "https://images.unsplash.com/photo-1506744038136-46273834b3fb?w=400&h=400&fit=crop",
        rating: dec!(4.9),
    },
    ProductDescriptor {
        name: "Smart Fitness Tracker",
        description: "Track your health and activity with this smart fitness tracker.",
        price: dec!(99.00),
        category: Category::Electronics,
        image_url: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=400&h=400&fit=crop",
        rating: dec!(4.4),
    },
    ProductDescriptor {
        name: "Classic Backpack",
        description: "Durable backpack for everyday use.",
        price: dec!(69.00),
        category: Category::Accessories,
        image_url: "https://images.unsplash.com/photo-1503342217505-b0a15ec3261c?w=400&h=400&fit=crop",
        rating: dec!(4.7),
    },
    ProductDescriptor {
        name: "Cotton Bath Towel",
        description: "Soft and absorbent cotton bath towel.",
        price: dec!(25.00),
        category: Category::Home,
        image_url: "https://images.unsplash.com/photo-1515378791036-0648a3ef77b2?w=400&h=400&fit=crop",
        rating: dec!(4.8),
    },
    ProductDescriptor {
        name: "Wireless Mouse",
        description: "Ergonomic wireless mouse with long battery life.",
        price: dec!(49.00),
        category: Category::Electronics,
        image_url: "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=400&h=400&fit=crop",
        rating: dec!(4.6),
    },
    ProductDescriptor {
        name: "Travel Mug",
        description: "Insulated travel mug keeps drinks hot or cold.",
        price: dec!(29.00),
        category: Category::Home,
        image_url: "https://images.unsplash.com/photo-1464983953574-0892a716854b?w=400&h=400&fit=crop",
        rating: dec!(4.5),
    },
    ProductDescriptor {
        name: "Yoga Block",
        description: "Support your yoga practice with this sturdy block.",
        price: dec!(19.00),
        category: Category::Sports,
        image_url: "https://images.unsplash.com/photo-1519864600265-abb23847ef2c?w=400&h=400&fit=crop",
        rating: dec!(4.7),
    },
    ProductDescriptor {
        name: "Graphic Tee",
        description: "Trendy graphic t-shirt made from organic cotton.",
        price: dec!(39.00),
        category: Category::Clothing,
        image_url: "https://images.unsplash.com/photo-1512436991641-6745cdb1723f?w=400&h=400&fit=crop",
        rating: dec!(4.4),
    },
    ProductDescriptor {
        name: "Wireless Charger",
        description: "Fast wireless charger for all compatible devices.",
        price: dec!(59.00),
        category: Category::Electronics,
        image_url: "https://images.unsplash.com/photo-1519125323398-675f0ddb6308?w=400&h=400&fit=crop",
        rating: dec!(4.6),
    },
    ProductDescriptor {
        name: "Sports Socks (3 Pack)",
        description: "Comfortable and breathable sports socks.",
        price: dec!(15.00),
        category: Category::Clothing,
        image_url: "https://images.unsplash.com/photo-1512436991641-6745cdb1723f?w=400&h=400&fit=crop",
        rating: dec!(4.8),
    },
    ProductDescriptor {
        name: "Desk Organizer",
        description: "Keep your workspace tidy with this desk organizer.",
        price: dec!(35.00),
        category: Category::Home,
        image_url: "https://images.unsplash.com/photo-1465101046530-73398c7f28ca?w=400&h=400&fit=crop",
        rating: dec!(4.7),
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = CATALOG.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn test_values_fit_product_constraints() {
        for product in &CATALOG {
            assert!(product.price > Decimal::ZERO, "{}", product.name);
            assert!(product.rating >= Decimal::ZERO, "{}", product.name);
            assert!(product.rating <= dec!(5), "{}", product.name);
            assert!(product.image_url.starts_with("https://"), "{}", product.name);
        }
    }

    #[test]
    fn test_every_category_is_stocked() {
        let used: HashSet<_> = CATALOG.iter().map(|p| p.category).collect();
        assert_eq!(used.len(), Category::ALL.len());
    }

    #[test]
    fn test_some_products_share_an_image() {
        let urls: HashSet<_> = CATALOG.iter().map(|p| p.image_url).collect();
        assert!(urls.len() < CATALOG.len());
    }
}
