//! Repository for the `categories` table.

use todoboard_core::category::{normalize_color, validate_category_name};
use todoboard_core::types::DbId;

use crate::error::DbResult;
use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::DbPool;

/// Column list for categories queries.
const COLUMNS: &str = "id, name, color";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories in creation order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = ?1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new category, returning the created row.
    ///
    /// Fails with a validation error on a blank name or a color that is not
    /// `#RRGGBB`. An omitted or blank color is stored as the default.
    pub async fn create(pool: &DbPool, input: &CreateCategory) -> DbResult<Category> {
        validate_category_name(&input.name)?;
        let color = normalize_color(input.color.as_deref())?;

        let query = format!(
            "INSERT INTO categories (name, color)
             VALUES (?1, ?2)
             RETURNING {COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(input.name.trim())
            .bind(color)
            .fetch_one(pool)
            .await?;
        Ok(category)
    }

    /// Overwrite a category's name and color, returning the updated row.
    ///
    /// Same rules as [`CategoryRepo::create`]; an omitted color resets the
    /// category to the default.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> DbResult<Option<Category>> {
        validate_category_name(&input.name)?;
        let color = normalize_color(input.color.as_deref())?;

        let query = format!(
            "UPDATE categories SET
                name = ?2,
                color = ?3
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(input.name.trim())
            .bind(color)
            .fetch_optional(pool)
            .await?;
        Ok(category)
    }

    /// Delete a category together with every todo filed under it.
    ///
    /// Both deletes run in one transaction. Returns the number of todos
    /// removed, or `None` if the category did not exist.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let todos_removed = sqlx::query("DELETE FROM todos WHERE category_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        Ok(Some(todos_removed))
    }
}
