//! Handler for link registration.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::api::dto::register::{LinkResponse, RegisterRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a slug with up to three platform targets.
///
/// # Endpoint
///
/// `POST /r/{slug}`
///
/// # Request Body
///
/// ```json
/// {
///   "ios": "https://apps.apple.com/app/id123",
///   "android": "https://play.google.com/store/apps/details?id=app",
///   "default": "https://example.com"
/// }
/// ```
///
/// Any field may be omitted; missing targets are filled from the supplied
/// ones.
///
/// # Response
///
/// `200 OK` with the stored link:
///
/// ```json
/// {
///   "slug": "app",
///   "ios": "https://apps.apple.com/app/id123",
///   "android": "https://play.google.com/store/apps/details?id=app",
///   "default": "https://example.com"
/// }
/// ```
///
/// # Errors
///
/// - `403 Forbidden` if the slug is already registered (checked first, even
///   when the body is malformed)
/// - `422 Unprocessable Entity` if the body is not a JSON object of optional
///   strings, all targets are missing, or a target is not a valid URL
pub async fn register_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            state.link_service.ensure_available(&slug).await?;
            return Err(AppError::invalid_body(rejection.body_text()));
        }
    };

    let entry = state.link_service.register(&slug, request.into()).await?;

    Ok(Json(entry.into()))
}

/// Rejects registration without a slug.
///
/// # Endpoint
///
/// `POST /r`
pub async fn missing_slug_register_handler() -> AppError {
    AppError::invalid_slug("")
}
