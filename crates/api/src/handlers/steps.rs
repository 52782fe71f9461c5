//! Handler for individual steps.

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::response::IntoResponse;
use axum::Json;
use mechai_core::error::CoreError;
use mechai_core::synthetic_id::IdKind;
use mechai_db::models::step::StepDetailResponse;
use mechai_db::repositories::StepRepo;

use super::decode_path_id;
use crate::error::{AppError, AppResult};
use crate::middleware::session::DbSession;

/// GET /api/steps/{step_id}
///
/// Accepts `step_<n>` or a bare `<n>`; anything else, including a path
/// segment that is not valid UTF-8, is a 404.
pub async fn get_step(
    DbSession(mut conn): DbSession,
    step_id: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = decode_path_id(IdKind::Step, step_id)?;

    let step = StepRepo::find_by_id(&mut conn, id).await?.ok_or_else(|| {
        tracing::debug!(step_id = id, "Step not in database");
        AppError::Core(CoreError::NotFound {
            entity: IdKind::Step.entity(),
        })
    })?;

    Ok(Json(StepDetailResponse::from(step)))
}
