pub mod categories;
pub mod health;
pub mod todos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /todos                      list (?category=), create
/// /todos/{id}                 get, update, delete
/// /todos/{id}/complete        toggle completion (PATCH)
///
/// /categories                 list, create
/// /categories/{id}            get, update, delete (cascades to todos)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/todos", todos::router())
        .nest("/categories", categories::router())
}
