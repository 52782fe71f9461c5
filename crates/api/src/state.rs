/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide database connection pool. Requests borrow one
    /// connection each through [`crate::middleware::session::DbSession`].
    pub pool: mechai_db::DbPool,
}
