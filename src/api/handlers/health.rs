//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Registry**: Reports the number of registered links
/// 2. **Persistence**: Checks that the persist worker is still receiving
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "registry": { "status": "ok", "message": "12 links registered" },
///     "persistence": { "status": "ok", "message": "Persist worker running" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let registry_check = check_registry(&state).await;

    let persistence_check = check_persistence(&state);

    let all_healthy = registry_check.is_ok() && persistence_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            registry: registry_check,
            persistence: persistence_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_registry(state: &AppState) -> CheckStatus {
    match state.link_service.count().await {
        Ok(count) => CheckStatus::ok(format!("{count} links registered")),
        Err(e) => CheckStatus::error(format!("Registry error: {e}")),
    }
}

/// Checks if the persist worker is still receiving snapshots.
fn check_persistence(state: &AppState) -> CheckStatus {
    if state.persist_sender.is_closed() {
        CheckStatus::error("Persist worker stopped; registrations are not saved")
    } else {
        CheckStatus::ok("Persist worker running")
    }
}
