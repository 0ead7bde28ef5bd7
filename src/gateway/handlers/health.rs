//! Health check handler

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{Json, extract::State, http::StatusCode};

use super::super::state::AppState;
use super::super::types::HealthBody;

/// Health check endpoint
///
/// Pings the contact store. The response never exposes the failure cause.
///
/// - Healthy: 200 OK + {status: "ok", timestamp_ms}
/// - Unhealthy: 503 Service Unavailable + {status: "unavailable", timestamp_ms}
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthBody, content_type = "application/json"),
        (status = 503, description = "Service unavailable", body = HealthBody)
    ),
    tag = "System"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthBody>) {
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    match state.contacts.store_health().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthBody {
                status: "ok".to_string(),
                timestamp_ms,
            }),
        ),
        Err(e) => {
            tracing::error!("[HEALTH] Store ping failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthBody {
                    status: "unavailable".to_string(),
                    timestamp_ms,
                }),
            )
        }
    }
}
