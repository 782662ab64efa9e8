//! Handlers for todo CRUD and the completion toggle.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use todoboard_core::error::CoreError;
use todoboard_core::todo::format_display_timestamp;
use todoboard_core::types::DbId;
use todoboard_db::models::todo::{CreateTodo, TodoWithCategory, UpdateTodo};
use todoboard_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::query::TodoListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// A listed todo plus its creation time pre-formatted for display.
#[derive(Debug, Serialize)]
pub struct TodoListEntry {
    #[serde(flatten)]
    pub todo: TodoWithCategory,
    pub created_at_display: String,
}

impl From<TodoWithCategory> for TodoListEntry {
    fn from(todo: TodoWithCategory) -> Self {
        let created_at_display = format_display_timestamp(&todo.created_at);
        Self {
            todo,
            created_at_display,
        }
    }
}

/// GET /api/v1/todos?category=
///
/// List todos in creation order, optionally restricted to one category.
pub async fn list_todos(
    State(state): State<AppState>,
    Query(params): Query<TodoListParams>,
) -> AppResult<impl IntoResponse> {
    let todos: Vec<TodoListEntry> = TodoRepo::list(&state.pool, params.category)
        .await?
        .into_iter()
        .map(TodoListEntry::from)
        .collect();

    Ok(Json(DataResponse { data: todos }))
}

/// POST /api/v1/todos
///
/// Title and description are validated by the repository. An unknown
/// `category_id` is a 409.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::create(&state.pool, &input).await?;

    tracing::info!(
        todo_id = todo.id,
        category_id = ?todo.category_id,
        "Todo created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: todo })))
}

/// GET /api/v1/todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    Ok(Json(DataResponse { data: todo }))
}

/// PUT /api/v1/todos/{id}
///
/// Overwrite title, description, and category. An absent or empty
/// `category_id` clears the category.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTodo>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    tracing::info!(todo_id = id, "Todo updated");

    Ok(Json(DataResponse { data: todo }))
}

/// DELETE /api/v1/todos/{id}
///
/// Idempotent: deleting a todo that is already gone still returns 204.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TodoRepo::delete(&state.pool, id).await?;

    if deleted {
        tracing::info!(todo_id = id, "Todo deleted");
    } else {
        tracing::debug!(todo_id = id, "Delete of absent todo ignored");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/todos/{id}/complete
///
/// Flip the completed flag. The new state is computed by the database from
/// the stored value.
pub async fn toggle_complete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::toggle_completed(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    tracing::info!(todo_id = id, completed = todo.completed, "Todo completion toggled");

    Ok(Json(DataResponse { data: todo }))
}
