//! Deferred-work scheduling module.
//!
//! This crate provides [`TaskQueue`], a two-lane cooperative queue: urgent
//! tasks model direct interaction feedback, background tasks model derived
//! work that is allowed to lag behind it. Intentionally minimal and runtime
//! agnostic; draining is the caller's loop.

pub mod queue;

pub use queue::{Priority, Task, TaskQueue};
