//! Catalog domain module.
//!
//! This crate contains the product catalog and the listing projection that
//! derives the displayed product sequence, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod demo;
pub mod listing;
pub mod product;

pub use demo::demo_catalog;
pub use listing::{project, CategoryFilter, FilterCriteria, SortKey};
pub use product::{Category, Product};
