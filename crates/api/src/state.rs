/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup. Cheap to clone: the pool is reference-counted
/// internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. The only shared mutable resource.
    pub pool: todoboard_db::DbPool,
}
