//! Shared query parameter types for API handlers.

use serde::Deserialize;
use todoboard_core::input::deserialize_optional_id;
use todoboard_core::types::DbId;

/// Query parameters for the todo listing (`?category=`).
///
/// An empty `category` value is treated the same as an absent one.
#[derive(Debug, Default, Deserialize)]
pub struct TodoListParams {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub category: Option<DbId>,
}
