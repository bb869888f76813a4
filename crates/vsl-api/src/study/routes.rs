use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};
use vsl_db::{
    models::TimetableEntry,
    repositories::{stats, timetable},
};

use crate::{ApiState, error::ApiError};

/// Create the timetable, stats and current-user routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/timetable", get(list_timetable))
        .route("/stats", get(get_stats))
        .route("/user", get(get_user))
}

async fn list_timetable(
    State(state): State<ApiState>,
) -> Result<Json<Vec<TimetableEntry>>, ApiError> {
    let entries = timetable::list_all(&state.pool).await?;
    Ok(Json(entries))
}

/// First stats row, or an empty object when none has been recorded
async fn get_stats(State(state): State<ApiState>) -> Result<Json<Value>, ApiError> {
    let body = match stats::find_first(&state.pool).await? {
        Some(row) => serde_json::to_value(row)?,
        None => json!({}),
    };
    Ok(Json(body))
}

/// There are no accounts; the client always talks as this student.
async fn get_user() -> Json<Value> {
    Json(json!({
        "name": "Student",
        "language": "en",
        "grade": "5"
    }))
}
