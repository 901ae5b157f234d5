//! Router for the storefront bundle.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Build the router: files out of the bundle directory, with the SPA's
/// `index.html` for any path that matches no file so client-side routes
/// deep-link correctly.
pub fn router(dist_dir: &Path) -> Router {
    let index = ServeFile::new(dist_dir.join("index.html"));
    // `not_found_service` would force the fallback's status to 404;
    // `fallback` keeps the index's 200 so deep links load as pages.
    let assets = ServeDir::new(dist_dir).fallback(index);

    Router::new().fallback_service(assets)
}
