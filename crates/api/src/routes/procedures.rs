//! Route definitions for procedures.

use axum::routing::get;
use axum::Router;

use crate::handlers::procedures;
use crate::state::AppState;

/// Procedure routes mounted at `/procedures`.
///
/// ```text
/// GET /                  -> list_procedures
/// GET /{procedure_id}    -> get_procedure
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(procedures::list_procedures))
        .route("/{procedure_id}", get(procedures::get_procedure))
}
