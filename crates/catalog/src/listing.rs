//! Listing projection: derives the displayed product sequence.
//!
//! The projection is a pure function of the catalog and the view criteria.
//! It never mutates its input and never fails; criteria that match nothing
//! simply produce an empty listing.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use shopwindow_core::{DomainError, DomainResult};

use crate::product::{Category, Product};

/// Category selector for the listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Retain every product regardless of category.
    #[default]
    All,
    /// Retain only products in the given category.
    Only(Category),
}

impl CategoryFilter {
    fn retains(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => f.write_str(category.as_str()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        if s == "all" {
            Ok(CategoryFilter::All)
        } else {
            Category::from_str(s).map(CategoryFilter::Only)
        }
    }
}

/// View criteria for the listing: a category selector plus free-text search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    /// Matched case-insensitively against product names as a substring.
    /// An empty term matches everything.
    pub search: String,
}

impl FilterCriteria {
    /// Criteria that retain the whole catalog.
    pub fn unfiltered() -> Self {
        Self::default()
    }

    pub fn in_category(category: Category) -> Self {
        Self {
            category: CategoryFilter::Only(category),
            ..Self::default()
        }
    }

    pub fn searching(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            ..Self::default()
        }
    }
}

/// Sort order for the projected listing.
///
/// The string forms are the selector tokens the UI shell uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Case-folded lexicographic order on the product name.
    #[default]
    NameAscending,
    PriceAscending,
    PriceDescending,
    RatingDescending,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAscending => "name",
            SortKey::PriceAscending => "price-low",
            SortKey::PriceDescending => "price-high",
            SortKey::RatingDescending => "rating",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "name" => Ok(SortKey::NameAscending),
            "price-low" => Ok(SortKey::PriceAscending),
            "price-high" => Ok(SortKey::PriceDescending),
            "rating" => Ok(SortKey::RatingDescending),
            other => Err(DomainError::validation(format!("unknown sort key: {other}"))),
        }
    }
}

/// Projects the catalog into the sequence the listing screen displays.
///
/// Category filter and name search are conjunctive. Sorting is stable, so
/// products that compare equal under the sort key keep their catalog order;
/// two calls with equal inputs produce identical listings.
pub fn project(catalog: &[Product], criteria: &FilterCriteria, sort_key: SortKey) -> Vec<Product> {
    let needle = criteria.search.to_lowercase();

    let mut listing: Vec<Product> = catalog
        .iter()
        .filter(|product| criteria.category.retains(product))
        .filter(|product| needle.is_empty() || product.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    match sort_key {
        SortKey::NameAscending => listing.sort_by_cached_key(|p| p.name.to_lowercase()),
        SortKey::PriceAscending => listing.sort_by_key(|p| p.price),
        SortKey::PriceDescending => listing.sort_by_key(|p| Reverse(p.price)),
        SortKey::RatingDescending => listing.sort_by_key(|p| Reverse(p.rating)),
    }

    listing
}
