use axum::Json;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET *health* - Report liveness, insert count and uptime.
///
/// Read-only: does not touch the insert counter.
pub async fn health(state: AppState) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        requests: state.insert_count(),
        uptime: state.uptime_secs(),
    })
}
