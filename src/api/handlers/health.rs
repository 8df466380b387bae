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
/// - **200 OK**: Email provider configured
/// - **503 Service Unavailable**: Email provider missing credentials; every
///   contact submission would fail
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "email_provider": {
///       "status": "ok",
///       "message": "API key configured"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let provider_check = check_email_provider(&state);

    let all_healthy = provider_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            email_provider: provider_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks whether the email provider has credentials.
fn check_email_provider(state: &AppState) -> CheckStatus {
    if state.contact_service.is_provider_configured() {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("API key configured".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("API key missing".to_string()),
        }
    }
}
