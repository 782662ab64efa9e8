//! Category model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todoboard_core::types::DbId;

/// A row from the `categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub color: String,
}

/// DTO for creating a new category.
///
/// `color` falls back to the default sentinel when omitted.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub color: Option<String>,
}

/// DTO for renaming/recoloring a category. Both fields are overwritten.
#[derive(Debug, Deserialize)]
pub struct UpdateCategory {
    pub name: String,
    pub color: Option<String>,
}
