//! Handlers for repair procedures.
//!
//! Procedures are addressed by synthetic `proc_<n>` ids. An id that does
//! not decode is answered exactly like one that decodes but has no row.

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::response::IntoResponse;
use axum::Json;
use mechai_core::error::CoreError;
use mechai_core::synthetic_id::IdKind;
use mechai_db::models::procedure::{ProcedureDetailResponse, ProcedureListResponse};
use mechai_db::repositories::ProcedureRepo;

use super::decode_path_id;
use crate::error::{AppError, AppResult};
use crate::middleware::session::DbSession;

/// GET /api/procedures
///
/// All procedures, in storage order.
pub async fn list_procedures(DbSession(mut conn): DbSession) -> AppResult<impl IntoResponse> {
    let procedures = ProcedureRepo::list(&mut conn).await?;

    let body: Vec<ProcedureListResponse> = procedures
        .into_iter()
        .map(ProcedureListResponse::from)
        .collect();

    Ok(Json(body))
}

/// GET /api/procedures/{procedure_id}
///
/// A procedure with its steps ordered by position.
pub async fn get_procedure(
    DbSession(mut conn): DbSession,
    procedure_id: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = decode_path_id(IdKind::Procedure, procedure_id)?;

    let procedure = ProcedureRepo::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| {
            tracing::debug!(procedure_id = id, "Procedure not in database");
            AppError::Core(CoreError::NotFound {
                entity: IdKind::Procedure.entity(),
            })
        })?;

    let links = ProcedureRepo::list_steps(&mut conn, id).await?;

    Ok(Json(ProcedureDetailResponse::assemble(procedure, &links)))
}
