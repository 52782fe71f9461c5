//! Route definitions for steps.

use axum::routing::get;
use axum::Router;

use crate::handlers::steps;
use crate::state::AppState;

/// Step routes mounted at `/steps`.
///
/// ```text
/// GET /{step_id}    -> get_step
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{step_id}", get(steps::get_step))
}
