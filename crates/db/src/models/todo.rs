//! Todo model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todoboard_core::input::deserialize_optional_id;
use todoboard_core::types::{DbId, Timestamp};

/// A row from the `todos` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub completed: bool,
    pub category_id: Option<DbId>,
}

/// A todo joined with its category's display fields, as returned by listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TodoWithCategory {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub completed: bool,
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub category_color: Option<String>,
}

/// DTO for creating a new todo.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub category_id: Option<DbId>,
}

/// DTO for editing a todo. All fields are overwritten; a `None` category
/// clears the reference.
#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub category_id: Option<DbId>,
}
