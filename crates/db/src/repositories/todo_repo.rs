//! Repository for the `todos` table.

use chrono::Utc;
use sqlx::error::ErrorKind;
use todoboard_core::error::CoreError;
use todoboard_core::todo::{validate_description, validate_title};
use todoboard_core::types::DbId;

use crate::error::{DbError, DbResult};
use crate::models::todo::{CreateTodo, Todo, TodoWithCategory, UpdateTodo};
use crate::DbPool;

/// Column list for todos queries.
const COLUMNS: &str = "id, title, description, created_at, completed, category_id";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Create a new todo, returning the created row.
    ///
    /// `created_at` is taken from the clock at insert time and `completed`
    /// starts out false. A blank or over-long title or description is a
    /// validation error, and a `category_id` that does not reference an
    /// existing category is a constraint error.
    pub async fn create(pool: &DbPool, input: &CreateTodo) -> DbResult<Todo> {
        validate_title(&input.title)?;
        validate_description(&input.description)?;

        let query = format!(
            "INSERT INTO todos (title, description, created_at, completed, category_id)
             VALUES (?1, ?2, ?3, FALSE, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(input.title.trim())
            .bind(input.description.trim())
            .bind(Utc::now())
            .bind(input.category_id)
            .fetch_one(pool)
            .await
            .map_err(|e| category_ref_error(e, input.category_id))
    }

    /// Find a todo by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = ?1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List todos in creation order, joined with their category's name and
    /// color. When `category_id` is given only todos in that category are
    /// returned.
    pub async fn list(
        pool: &DbPool,
        category_id: Option<DbId>,
    ) -> Result<Vec<TodoWithCategory>, sqlx::Error> {
        sqlx::query_as::<_, TodoWithCategory>(
            "SELECT t.id, t.title, t.description, t.created_at, t.completed, t.category_id,
                    c.name AS category_name, c.color AS category_color
             FROM todos t
             LEFT JOIN categories c ON c.id = t.category_id
             WHERE ?1 IS NULL OR t.category_id = ?1
             ORDER BY t.id ASC",
        )
        .bind(category_id)
        .fetch_all(pool)
        .await
    }

    /// Overwrite a todo's title, description, and category, returning the
    /// updated row. Validated like [`TodoRepo::create`].
    pub async fn update(pool: &DbPool, id: DbId, input: &UpdateTodo) -> DbResult<Option<Todo>> {
        validate_title(&input.title)?;
        validate_description(&input.description)?;

        let query = format!(
            "UPDATE todos SET
                title = ?2,
                description = ?3,
                category_id = ?4
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(input.title.trim())
            .bind(input.description.trim())
            .bind(input.category_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| category_ref_error(e, input.category_id))
    }

    /// Flip the completed flag of a todo.
    ///
    /// The read and the write happen in a single statement, so concurrent
    /// toggles of the same todo alternate instead of overwriting each other.
    pub async fn toggle_completed(pool: &DbPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET completed = NOT completed
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a todo by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Turn a foreign key failure on `todos.category_id` into a constraint error
/// naming the missing category.
fn category_ref_error(err: sqlx::Error, category_id: Option<DbId>) -> DbError {
    match (&err, category_id) {
        (sqlx::Error::Database(db_err), Some(category_id))
            if db_err.kind() == ErrorKind::ForeignKeyViolation =>
        {
            DbError::Core(CoreError::Constraint(format!(
                "Category with id {category_id} does not exist"
            )))
        }
        _ => DbError::Sqlx(err),
    }
}
