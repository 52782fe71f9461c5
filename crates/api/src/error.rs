use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mechai_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for anything
/// the database layer raises. Implements [`IntoResponse`] to produce
/// `{ "detail": ... }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `mechai_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database or pool error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Body text for every 500 response.
const INTERNAL_DETAIL: &str = "Internal Server Error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Core(CoreError::NotFound { entity }) => {
                (StatusCode::NOT_FOUND, format!("{entity} not found"))
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_DETAIL.to_string())
            }
        };

        (status, axum::Json(json!({ "detail": detail }))).into_response()
    }
}
