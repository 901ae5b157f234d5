//! Counter domain module.
//!
//! The strict companion to the cart reducer: a minimal reducer whose action
//! set is closed, so unrecognized action tags fail at the parse boundary
//! instead of flowing through as no-ops.

pub mod counter;

pub use counter::{Counter, CounterAction};
