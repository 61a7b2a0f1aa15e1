use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    InvalidSlug { message: String, details: Value },
    #[error("{message}")]
    SlugConflict { message: String, details: Value },
    #[error("{message}")]
    EmptyLinkSet { message: String, details: Value },
    #[error("{message}")]
    InvalidUrl { message: String, details: Value },
    #[error("{message}")]
    InvalidBody { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_slug(slug: &str) -> Self {
        Self::InvalidSlug {
            message: "Slug must not be empty".to_string(),
            details: json!({ "slug": slug }),
        }
    }
    pub fn slug_conflict(slug: &str) -> Self {
        Self::SlugConflict {
            message: "Slug is already registered".to_string(),
            details: json!({ "slug": slug }),
        }
    }
    pub fn empty_link_set() -> Self {
        Self::EmptyLinkSet {
            message: "At least one of ios, android or default is required".to_string(),
            details: json!({}),
        }
    }
    pub fn invalid_url(field: &str, value: &str) -> Self {
        Self::InvalidUrl {
            message: format!("Field '{field}' is not a valid URL"),
            details: json!({ "field": field, "value": value }),
        }
    }
    pub fn invalid_body(reason: impl Into<String>) -> Self {
        Self::InvalidBody {
            message: "Request body is not a valid link object".to_string(),
            details: json!({ "reason": reason.into() }),
        }
    }
    pub fn not_found(slug: &str) -> Self {
        Self::NotFound {
            message: "Link not found".to_string(),
            details: json!({ "slug": slug }),
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::InvalidSlug { message, details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "invalid_slug",
                message,
                details,
            ),
            AppError::SlugConflict { message, details } => {
                (StatusCode::FORBIDDEN, "slug_conflict", message, details)
            }
            AppError::EmptyLinkSet { message, details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "empty_link_set",
                message,
                details,
            ),
            AppError::InvalidUrl { message, details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "invalid_url",
                message,
                details,
            ),
            AppError::InvalidBody { message, details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "invalid_body",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::invalid_slug(""), StatusCode::UNPROCESSABLE_ENTITY),
            (AppError::slug_conflict("x"), StatusCode::FORBIDDEN),
            (AppError::empty_link_set(), StatusCode::UNPROCESSABLE_ENTITY),
            (
                AppError::invalid_url("ios", "nope"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::invalid_body("EOF"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (AppError::not_found("x"), StatusCode::NOT_FOUND),
            (
                AppError::internal("boom", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_display_uses_message() {
        let error = AppError::invalid_url("android", "nope");
        assert_eq!(error.to_string(), "Field 'android' is not a valid URL");
    }
}
