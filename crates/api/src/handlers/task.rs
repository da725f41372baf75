//! Handlers for the `/tasks` resource, including overdue listing and stats.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::types::EntityId;
use taskboard_store::models::stats::TaskStats;
use taskboard_store::models::task::{CreateTask, Task, TaskListParams, UpdateTask};
use taskboard_store::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::response::{OverdueTasksResponse, TaskListResponse};
use crate::state::AppState;

/// POST /api/tasks
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let task = TaskRepo::create(&state.store, &input)?;
    tracing::info!(task_id = task.id, category_id = ?task.category_id, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks?category_id=&completed=&overdue=
///
/// Filters combine with AND. Boolean filters accept `true`/`false`/`1`/`0`.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<TaskListParams>,
) -> AppResult<Json<TaskListResponse>> {
    let filter = params.to_filter()?;
    let tasks = TaskRepo::list(&state.store, &filter);
    Ok(Json(TaskListResponse::new(tasks)))
}

/// GET /api/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.store, id).ok_or(AppError::not_found("Task", id))?;
    Ok(Json(task))
}

/// PUT /api/tasks/{id}
///
/// Only fields present in the body are touched; `null` clears
/// `category_id` and `due_date`.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(input): AppJson<UpdateTask>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::update(&state.store, id, &input)?
        .ok_or(AppError::not_found("Task", id))?;
    tracing::info!(task_id = id, "Task updated");
    Ok(Json(task))
}

/// DELETE /api/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<StatusCode> {
    if TaskRepo::delete(&state.store, id) {
        tracing::info!(task_id = id, "Task deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Task", id))
    }
}

/// GET /api/tasks/overdue
pub async fn list_overdue(State(state): State<AppState>) -> Json<OverdueTasksResponse> {
    Json(OverdueTasksResponse::new(TaskRepo::list_overdue(&state.store)))
}

/// GET /api/tasks/stats
pub async fn stats(State(state): State<AppState>) -> Json<TaskStats> {
    Json(TaskRepo::stats(&state.store))
}
