use axum::routing::get;
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Task routes mounted at `/tasks`.
///
/// ```text
/// GET    /          -> list (?category_id=&completed=&overdue=)
/// POST   /          -> create
/// GET    /overdue   -> list_overdue
/// GET    /stats     -> stats
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
///
/// Static segments take precedence over `/{id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list).post(task::create))
        .route("/overdue", get(task::list_overdue))
        .route("/stats", get(task::stats))
        .route(
            "/{id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
}
