//! HTTP server: delivers the built storefront bundle.

pub mod app;
pub mod config;
