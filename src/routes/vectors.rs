use axum::{body::Body, Json};

use crate::dto::{request::InsertVectorRequest, response::InsertVectorResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Log a throughput line every this many inserts.
const PROGRESS_INTERVAL: u64 = 25;

/// Insert bodies are tiny; anything past this is a client bug.
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// POST *vector* - Acknowledge a vector insert.
///
/// The counter increments before the body is inspected, so a malformed body
/// still advances it (the original behaved this way). An empty body is valid:
/// it just means the id is synthesized as `vec_<count>`.
pub async fn insert_vector(state: AppState, body: Body) -> ApiResult<InsertVectorResponse> {
    let count = state.record_insert();

    let bytes = axum::body::to_bytes(body, BODY_LIMIT)
        .await
        .map_err(|e| ApiError::bad_request(format!("failed to read request body: {e}")))?;

    let req: InsertVectorRequest = if bytes.is_empty() {
        InsertVectorRequest::default()
    } else {
        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::bad_request(format!("invalid JSON body: {e}")))?
    };

    let id = req.id.unwrap_or_else(|| format!("vec_{count}"));

    if count % PROGRESS_INTERVAL == 0 {
        tracing::info!(
            "Processed {} vectors ({:.1}/sec)",
            count,
            state.insert_rate(count)
        );
    }

    Ok(Json(InsertVectorResponse {
        id,
        status: "inserted".to_string(),
    }))
}
