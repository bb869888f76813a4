use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use axum_extra::extract::WithRejection;
use serde_json::json;
use vsl_db::{
    models::{NewNote, Note},
    repositories::note,
};

use crate::{
    ApiState,
    error::{ApiError, JsonPayload},
    metrics::record_write,
};

/// Create the notebook routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{id}", put(update_note).delete(delete_note))
}

async fn list_notes(State(state): State<ApiState>) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = note::list_all(&state.pool).await?;
    Ok(Json(notes))
}

async fn create_note(
    State(state): State<ApiState>,
    WithRejection(Json(payload), _): JsonPayload<NewNote>,
) -> Result<impl IntoResponse, ApiError> {
    let id = note::create(&state.pool, &payload).await?;

    tracing::info!(note_id = id, "Note created");
    record_write("note", "create");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "message": "Note created" })),
    ))
}

/// Overwrite title and content. Unknown ids are a no-op.
async fn update_note(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
    WithRejection(Json(payload), _): JsonPayload<NewNote>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = note::update(&state.pool, id, &payload).await?;

    tracing::debug!(note_id = id, updated, "Note update applied");
    record_write("note", "update");

    Ok(Json(json!({ "message": "Note updated" })))
}

async fn delete_note(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = note::delete(&state.pool, id).await?;

    tracing::info!(note_id = id, deleted, "Note deleted");
    record_write("note", "delete");

    Ok(Json(json!({ "message": "Note deleted" })))
}
