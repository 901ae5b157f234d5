//! Cart domain module.
//!
//! This crate contains business rules for the shopping cart, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod cart;

pub use cart::{Cart, CartAction, CartLine};
