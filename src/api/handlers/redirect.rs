//! Handler for platform-aware redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::platform::detect_platform;

/// Redirects a slug to the target matching the visitor's platform.
///
/// # Endpoint
///
/// `GET /r/{slug}`
///
/// # Request Flow
///
/// 1. Classify the visitor from the `User-Agent` header
/// 2. Look up the slug in the registry
/// 3. Pick `android`, `ios` or `default` by platform
/// 4. Return 302 Found
///
/// # Errors
///
/// Returns 404 Not Found if the slug doesn't exist.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let platform = detect_platform(&headers);

    let target = state
        .link_service
        .resolve_for_platform(&slug, platform)
        .await?;

    debug!(%slug, %platform, %target, "Redirecting");

    let location = location_header(&target)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Answers `GET /r` without a slug.
///
/// # Endpoint
///
/// `GET /r`
pub async fn missing_slug_redirect_handler() -> AppError {
    AppError::not_found("")
}

/// Builds a `Location` value. Non-ASCII targets are sent in their
/// punycode / percent-encoded serialization.
fn location_header(target: &str) -> Result<HeaderValue, AppError> {
    let location = if target.is_ascii() {
        Some(target.to_string())
    } else {
        Url::parse(target).ok().map(String::from)
    };

    location
        .and_then(|location| HeaderValue::from_str(&location).ok())
        .ok_or_else(|| {
            AppError::internal(
                "Stored target cannot be used as a redirect location",
                json!({ "target": target }),
            )
        })
}
