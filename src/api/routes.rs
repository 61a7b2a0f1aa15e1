//! Link route configuration.

use crate::api::handlers::{
    missing_slug_redirect_handler, missing_slug_register_handler, redirect_handler,
    register_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Registration and redirect routes.
///
/// # Endpoints
///
/// - `POST /r/{slug}` - Register a slug (create-only)
/// - `GET  /r/{slug}` - Redirect to the platform-specific target
/// - `POST /r`        - Missing slug, always 422
/// - `GET  /r`        - Missing slug, always 404
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/r",
            get(missing_slug_redirect_handler).post(missing_slug_register_handler),
        )
        .route("/r/{slug}", get(redirect_handler).post(register_handler))
}
