pub mod health;
pub mod instructions;
pub mod procedures;
pub mod steps;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                      service liveness
///
/// /procedures                  list
/// /procedures/{procedure_id}   detail with ordered steps
///
/// /steps/{step_id}             detail
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/procedures", procedures::router())
        .nest("/steps", steps::router())
}
