//! Product types for the storefront catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use shopwindow_core::{DomainError, DomainResult, ProductId};

/// Product category.
///
/// The demo catalog is closed, so categories are an enum rather than free
/// strings. The lowercase string forms double as the filter tokens used by
/// the UI shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Clothing,
    Footwear,
    Accessories,
}

impl Category {
    /// Every known category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Clothing,
        Category::Footwear,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Clothing => "clothing",
            Category::Footwear => "footwear",
            Category::Accessories => "accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "electronics" => Ok(Category::Electronics),
            "clothing" => Ok(Category::Clothing),
            "footwear" => Ok(Category::Footwear),
            "accessories" => Ok(Category::Accessories),
            other => Err(DomainError::validation(format!("unknown category: {other}"))),
        }
    }
}

/// A product as rendered on the listing screen.
///
/// Catalog entries are immutable demo data; they are only ever copied into
/// carts or projected listings, never mutated in place. Price and rating are
/// integers so that ordering and equality stay exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in the smallest currency unit (cents for the demo data).
    pub price: u64,
    pub category: Category,
    /// Average rating in tenths of a star (45 means 4.5 stars).
    pub rating: u16,
    /// Units available for sale.
    pub stock: u32,
}
