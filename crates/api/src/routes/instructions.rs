//! Route definitions for the legacy instruction listing.

use axum::routing::get;
use axum::Router;

use crate::handlers::instructions;
use crate::state::AppState;

/// Legacy routes mounted at the root.
///
/// ```text
/// GET /    -> list_instructions
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(instructions::list_instructions))
}
