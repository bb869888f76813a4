use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;

use crate::{catalog, note, project, quiz, state::ApiState, study};

/// Application routes: `/health` plus the REST surface under `/api`.
///
/// Layers (CORS, tracing, metrics, request id) are added by the binary.
pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
        .fallback(handler_404)
}

fn api_routes() -> Router<ApiState> {
    Router::new()
        .merge(catalog::routes())
        .merge(quiz::routes())
        .merge(study::routes())
        .merge(project::routes())
        .merge(note::routes())
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "The requested resource was not found" })),
    )
}
