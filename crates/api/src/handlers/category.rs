//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::types::EntityId;
use taskboard_store::models::category::{Category, CreateCategory, UpdateCategory};
use taskboard_store::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::CategoryListResponse;
use crate::state::AppState;

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = CategoryRepo::create(&state.store, &input)?;
    tracing::info!(category_id = category.id, "Category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> Json<CategoryListResponse> {
    Json(CategoryListResponse {
        categories: CategoryRepo::list(&state.store),
    })
}

/// GET /api/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.store, id)
        .ok_or(AppError::not_found("Category", id))?;
    Ok(Json(category))
}

/// PUT /api/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(input): AppJson<UpdateCategory>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::update(&state.store, id, &input)?
        .ok_or(AppError::not_found("Category", id))?;
    tracing::info!(category_id = id, "Category updated");
    Ok(Json(category))
}

/// DELETE /api/categories/{id}
///
/// Tasks in the category are kept; their `category_id` becomes `null`.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<StatusCode> {
    if CategoryRepo::delete(&state.store, id) {
        tracing::info!(category_id = id, "Category deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Category", id))
    }
}
