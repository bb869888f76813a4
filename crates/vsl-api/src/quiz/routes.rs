use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_extra::extract::WithRejection;
use serde_json::json;
use vsl_db::{
    models::{NewQuiz, Quiz, encode_questions},
    repositories::quiz,
};

use crate::{
    ApiState,
    error::{ApiError, JsonPayload},
    metrics::record_write,
};

/// Create the quiz routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/quizzes", get(list_quizzes).post(create_quiz))
}

/// List quizzes with their question lists decoded.
///
/// A row whose stored questions cannot be decoded fails the whole listing.
async fn list_quizzes(State(state): State<ApiState>) -> Result<Json<Vec<Quiz>>, ApiError> {
    let rows = quiz::list_all(&state.pool).await?;
    let quizzes = rows
        .into_iter()
        .map(Quiz::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(quizzes))
}

async fn create_quiz(
    State(state): State<ApiState>,
    WithRejection(Json(payload), _): JsonPayload<NewQuiz>,
) -> Result<impl IntoResponse, ApiError> {
    let questions = payload
        .questions
        .as_deref()
        .map(encode_questions)
        .transpose()?;

    quiz::create(
        &state.pool,
        payload.id.as_deref(),
        payload.subject_id.as_deref(),
        payload.title.as_deref(),
        payload.level.as_deref(),
        questions.as_deref(),
    )
    .await?;

    tracing::info!(
        quiz_id = ?payload.id,
        questions = payload.questions.as_ref().map_or(0, Vec::len),
        "Quiz created"
    );
    record_write("quiz", "create");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Quiz created successfully" })),
    ))
}
