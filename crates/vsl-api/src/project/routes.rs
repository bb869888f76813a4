use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use axum_extra::extract::WithRejection;
use serde_json::json;
use vsl_db::{
    models::{
        DiscussionPost, NewBudgetRequest, NewDiscussionPost, NewProject, NewTask, ProjectDetails,
        ProjectSummary,
    },
    repositories::{budget, discussion, member, project, task},
};

use super::model::{
    BudgetReview, JoinRequest, ProjectQuery, UpdateMember, UpdateProject, UpdateTask, non_empty,
};
use crate::{
    ApiState,
    error::{ApiError, JsonPayload},
    metrics::record_write,
};

/// Create the project routes, including tasks, budget requests and discussion
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route("/projects/{id}", get(get_project).put(update_project))
        .route("/projects/{id}/join", post(join_project))
        .route("/projects/{id}/members/{member_id}", put(update_member))
        .route("/projects/{id}/tasks", post(create_task))
        .route("/tasks/{task_id}", put(update_task))
        .route("/projects/{id}/budget", post(create_budget_request))
        .route("/budget/{budget_id}", put(review_budget_request))
        .route(
            "/projects/{id}/discussion",
            get(list_discussion).post(create_discussion_post),
        )
}

async fn list_projects(
    State(state): State<ApiState>,
    Query(query): Query<ProjectQuery>,
) -> Result<Json<Vec<ProjectSummary>>, ApiError> {
    let projects = project::list(&state.pool, query.to_filter()).await?;
    Ok(Json(projects))
}

/// Insert the project and its creator's leader membership as one unit
async fn create_project(
    State(state): State<ApiState>,
    WithRejection(Json(payload), _): JsonPayload<NewProject>,
) -> Result<impl IntoResponse, ApiError> {
    let mut tx = state.pool.begin().await?;

    project::create(&mut *tx, &payload).await?;
    member::create(
        &mut *tx,
        payload.id.as_deref(),
        payload.creator_id,
        member::LEADER_ROLE,
        member::STATUS_APPROVED,
    )
    .await?;

    tx.commit().await?;

    tracing::info!(
        project_id = ?payload.id,
        creator_id = ?payload.creator_id,
        "Project created"
    );
    record_write("project", "create");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Project created successfully" })),
    ))
}

async fn get_project(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectDetails>, ApiError> {
    let project = project::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

    let members = member::list_for_project(&state.pool, &id).await?;
    let tasks = task::list_for_project(&state.pool, &id).await?;
    let budget = budget::list_for_project(&state.pool, &id).await?;

    Ok(Json(ProjectDetails {
        project,
        members,
        tasks,
        budget,
    }))
}

/// Apply a non-empty `status` and, when the key is present, `professor_id`.
/// Unknown ids are a no-op.
async fn update_project(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): JsonPayload<UpdateProject>,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(status) = non_empty(payload.status.as_deref()) {
        project::update_status(&state.pool, &id, status).await?;
        tracing::info!(project_id = %id, status, "Project status updated");
    }
    if let Some(professor_id) = payload.professor_id {
        project::update_professor(&state.pool, &id, professor_id).await?;
        tracing::info!(project_id = %id, ?professor_id, "Project professor updated");
    }
    record_write("project", "update");

    Ok(Json(json!({ "message": "Project updated successfully" })))
}

/// Ask to join a project. Any existing membership row, whatever its status,
/// blocks a second request.
async fn join_project(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): JsonPayload<JoinRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if member::membership_exists(&state.pool, &id, payload.user_id).await? {
        return Err(ApiError::BadRequest(
            "Already requested or joined".to_string(),
        ));
    }

    member::create(
        &state.pool,
        Some(&id),
        payload.user_id,
        member::MEMBER_ROLE,
        member::STATUS_PENDING,
    )
    .await?;

    tracing::info!(project_id = %id, user_id = ?payload.user_id, "Join request created");
    record_write("member", "create");

    Ok(Json(json!({ "message": "Join request sent" })))
}

/// Approve, reject or re-role a member. Empty fields are ignored.
async fn update_member(
    State(state): State<ApiState>,
    Path((_project_id, member_id)): Path<(String, i64)>,
    WithRejection(Json(payload), _): JsonPayload<UpdateMember>,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(status) = non_empty(payload.status.as_deref()) {
        member::update_status(&state.pool, member_id, status).await?;
    }
    if let Some(role) = non_empty(payload.role.as_deref()) {
        member::update_role(&state.pool, member_id, role).await?;
    }

    tracing::info!(member_id, status = ?payload.status, role = ?payload.role, "Member updated");
    record_write("member", "update");

    Ok(Json(json!({ "message": "Member updated" })))
}

async fn create_task(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): JsonPayload<NewTask>,
) -> Result<impl IntoResponse, ApiError> {
    let task_id = task::create(&state.pool, &id, &payload).await?;

    tracing::info!(project_id = %id, task_id, "Task added");
    record_write("task", "create");

    Ok((StatusCode::CREATED, Json(json!({ "message": "Task added" }))))
}

/// Set the task status as given; a missing status clears it
async fn update_task(
    State(state): State<ApiState>,
    Path(task_id): Path<i64>,
    WithRejection(Json(payload), _): JsonPayload<UpdateTask>,
) -> Result<impl IntoResponse, ApiError> {
    task::update_status(&state.pool, task_id, payload.status.as_deref()).await?;

    tracing::info!(task_id, status = ?payload.status, "Task updated");
    record_write("task", "update");

    Ok(Json(json!({ "message": "Task updated" })))
}

async fn create_budget_request(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): JsonPayload<NewBudgetRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let budget_id = budget::create(&state.pool, &id, &payload).await?;

    tracing::info!(project_id = %id, budget_id, amount = ?payload.amount, "Budget request added");
    record_write("budget", "create");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Budget request added" })),
    ))
}

/// Professor review of a budget request: a non-empty `status` and/or a note
async fn review_budget_request(
    State(state): State<ApiState>,
    Path(budget_id): Path<i64>,
    WithRejection(Json(payload), _): JsonPayload<BudgetReview>,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(status) = non_empty(payload.status.as_deref()) {
        budget::update_status(&state.pool, budget_id, status).await?;
    }
    if let Some(note) = payload.professor_note.as_deref() {
        budget::update_professor_note(&state.pool, budget_id, Some(note)).await?;
    }

    tracing::info!(budget_id, status = ?payload.status, "Budget request reviewed");
    record_write("budget", "update");

    Ok(Json(json!({ "message": "Budget request updated" })))
}

/// Posts oldest first
async fn list_discussion(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<DiscussionPost>>, ApiError> {
    let posts = discussion::list_for_project(&state.pool, &id).await?;
    Ok(Json(posts))
}

async fn create_discussion_post(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): JsonPayload<NewDiscussionPost>,
) -> Result<impl IntoResponse, ApiError> {
    let post_id = discussion::create(&state.pool, &id, &payload).await?;

    tracing::debug!(project_id = %id, post_id, user_id = ?payload.user_id, "Message posted");
    record_write("discussion", "create");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Message posted" })),
    ))
}
