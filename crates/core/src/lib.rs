//! Core domain module.
//!
//! This crate contains the building blocks shared by the storefront crates,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage): the domain error model, the product identifier, the reducer
//! seam, and the identity-keyed memo cell.

pub mod error;
pub mod id;
pub mod memo;
pub mod reducer;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use memo::Memo;
pub use reducer::Reducer;
