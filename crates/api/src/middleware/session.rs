//! Per-request database session extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::Postgres;

use crate::error::AppError;
use crate::state::AppState;

/// One pooled connection, held for the lifetime of a single handler call.
///
/// The connection goes back to the pool when the extractor is dropped,
/// which happens on every exit path of the handler, early `?` returns
/// included. Failing to acquire one rejects the request with a 500.
///
/// ```ignore
/// async fn handler(DbSession(mut conn): DbSession) -> AppResult<Json<Vec<Procedure>>> {
///     Ok(Json(ProcedureRepo::list(&mut conn).await?))
/// }
/// ```
pub struct DbSession(pub PoolConnection<Postgres>);

impl FromRequestParts<AppState> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let conn = state.pool.acquire().await?;
        Ok(DbSession(conn))
    }
}
