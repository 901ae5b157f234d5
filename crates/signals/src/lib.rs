//! Shared settings module.
//!
//! This crate provides [`Setting`], an observable value cell: one writer
//! slot that any number of watchers can subscribe to, plus the storefront's
//! theme as its canonical instance. In-process only, no IO.

pub mod setting;
pub mod theme;

pub use setting::{Setting, Subscription};
pub use theme::Theme;
