use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use serde_json::json;
use vsl_db::{
    models::{Chapter, NewChapter, Subject},
    repositories::{chapter, subject},
};

use crate::{
    ApiState,
    error::{ApiError, JsonPayload},
    metrics::record_write,
};

/// Create the subject and chapter routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/subjects", get(list_subjects))
        .route("/chapters", get(list_chapters).post(create_chapter))
        .route("/chapters/{id}", get(get_chapter))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChapterQuery {
    subject_id: Option<String>,
}

async fn list_subjects(State(state): State<ApiState>) -> Result<Json<Vec<Subject>>, ApiError> {
    let subjects = subject::list_all(&state.pool).await?;
    Ok(Json(subjects))
}

/// List chapters, filtered by `subjectId` when it is given and non-empty
async fn list_chapters(
    State(state): State<ApiState>,
    Query(query): Query<ChapterQuery>,
) -> Result<Json<Vec<Chapter>>, ApiError> {
    let subject_id = query.subject_id.as_deref().filter(|s| !s.is_empty());
    let chapters = chapter::list(&state.pool, subject_id).await?;
    Ok(Json(chapters))
}

async fn get_chapter(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Chapter>, ApiError> {
    chapter::find_by_id(&state.pool, &id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Chapter not found".to_string()))
}

async fn create_chapter(
    State(state): State<ApiState>,
    WithRejection(Json(payload), _): JsonPayload<NewChapter>,
) -> Result<impl IntoResponse, ApiError> {
    chapter::create(&state.pool, &payload).await?;

    tracing::info!(chapter_id = ?payload.id, subject_id = ?payload.subject_id, "Chapter created");
    record_write("chapter", "create");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Chapter created successfully" })),
    ))
}
