//! Handler for the legacy instruction listing.

use axum::response::IntoResponse;
use axum::Json;
use mechai_db::repositories::InstructionRepo;

use crate::error::AppResult;
use crate::middleware::session::DbSession;

/// GET /
///
/// Every row of the `instructions` table, unfiltered.
pub async fn list_instructions(DbSession(mut conn): DbSession) -> AppResult<impl IntoResponse> {
    let rows = InstructionRepo::list(&mut conn).await?;

    Ok(Json(rows))
}
