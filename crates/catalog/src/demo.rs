//! The fixed demo catalog.

use shopwindow_core::ProductId;

use crate::product::{Category, Product};

/// Returns the catalog the storefront demo serves.
///
/// Prices are in cents and ratings in tenths of a star, so `99_900` is
/// $999.00 and `45` is 4.5 stars. Identifiers are assigned in catalog order
/// and are unique.
pub fn demo_catalog() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Laptop".to_string(),
            price: 99_900,
            category: Category::Electronics,
            rating: 45,
            stock: 10,
        },
        Product {
            id: ProductId::new(2),
            name: "Headphones".to_string(),
            price: 7_900,
            category: Category::Electronics,
            rating: 42,
            stock: 25,
        },
        Product {
            id: ProductId::new(3),
            name: "T-Shirt".to_string(),
            price: 1_900,
            category: Category::Clothing,
            rating: 40,
            stock: 50,
        },
        Product {
            id: ProductId::new(4),
            name: "Jeans".to_string(),
            price: 4_900,
            category: Category::Clothing,
            rating: 43,
            stock: 30,
        },
        Product {
            id: ProductId::new(5),
            name: "Shoes".to_string(),
            price: 8_900,
            category: Category::Footwear,
            rating: 46,
            stock: 15,
        },
        Product {
            id: ProductId::new(6),
            name: "Watch".to_string(),
            price: 19_900,
            category: Category::Accessories,
            rating: 44,
            stock: 20,
        },
        Product {
            id: ProductId::new(7),
            name: "Phone".to_string(),
            price: 69_900,
            category: Category::Electronics,
            rating: 47,
            stock: 8,
        },
        Product {
            id: ProductId::new(8),
            name: "Sweater".to_string(),
            price: 3_900,
            category: Category::Clothing,
            rating: 41,
            stock: 22,
        },
    ]
}
