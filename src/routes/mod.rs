use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Router,
};

use crate::state::AppState;

mod health;
mod vectors;

/// Build the router.
///
/// Routing is substring containment on the path rather than exact match: any
/// GET whose path contains "health" is a health check, any POST whose path
/// contains "vector" is an insert. Real clients hit `/api/v1/health` and
/// `/api/v1/vectors`, but `/healthcheck` or `/insert_vectors` work just as
/// well. axum's route table is exact-match, so dispatch happens in a single
/// fallback handler.
pub fn create_router(state: AppState) -> Router {
    Router::new().fallback(dispatch).with_state(state)
}

async fn dispatch(State(state): State<AppState>, req: Request) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    if method == Method::GET && path.contains("health") {
        health::health(state).await.into_response()
    } else if method == Method::POST && path.contains("vector") {
        vectors::insert_vector(state, req.into_body())
            .await
            .into_response()
    } else if method == Method::GET || method == Method::POST {
        StatusCode::NOT_FOUND.into_response()
    } else {
        StatusCode::METHOD_NOT_ALLOWED.into_response()
    }
}
