use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use taskboard_core::error::CoreError;
use taskboard_core::types::EntityId;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `taskboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request the transport could not decode (bad JSON, wrong JSON
    /// types, non-integer path ids).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build a not-found error for `entity` with `id`.
    pub fn not_found(entity: &'static str, id: EntityId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::Core(CoreError::NotFound { .. }) => json!({
                "error": self.to_string(),
                "code": "NOT_FOUND",
            }),
            AppError::Core(CoreError::InvalidInput { field, message }) => json!({
                "error": format!("{field} {message}"),
                "code": "VALIDATION_ERROR",
                "field": field,
            }),
            AppError::BadRequest(msg) => json!({
                "error": msg,
                "code": "BAD_REQUEST",
            }),
        };

        let status = match &self {
            AppError::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Core(CoreError::InvalidInput { .. }) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        if status == StatusCode::BAD_REQUEST {
            tracing::debug!(error = %self, "Rejected request");
        }

        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
