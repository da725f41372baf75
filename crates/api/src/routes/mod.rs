pub mod category;
pub mod health;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                   list, create
/// /categories/{id}              get, update, delete
///
/// /tasks                        list (filterable), create
/// /tasks/overdue                overdue tasks
/// /tasks/stats                  aggregate counts
/// /tasks/{id}                   get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/tasks", task::router())
}
